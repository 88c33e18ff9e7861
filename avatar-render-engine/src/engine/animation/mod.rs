pub mod clip_registry;
pub mod playback;
