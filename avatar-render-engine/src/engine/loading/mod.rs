pub mod avatar_loader;
pub mod manifest_loader;
pub mod progress;
