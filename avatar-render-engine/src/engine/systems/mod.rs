pub mod hud;
pub mod input;
pub mod teardown;
pub mod window_events;
