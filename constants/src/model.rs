/// Largest model dimension after fitting, in world units.
pub const FIT_TARGET_SIZE: f32 = 2.0;

pub const DEFAULT_MODEL_PATH: &str = "avatar/avatar.gltf";
pub const VIEWER_MANIFEST_PATH: &str = "avatar/viewer.json";

/// Surface size assumed when the canvas reports zero before page layout settles.
pub const FALLBACK_SURFACE_WIDTH: f32 = 600.0;
pub const FALLBACK_SURFACE_HEIGHT: f32 = 500.0;
