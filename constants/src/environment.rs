use bevy::prelude::*;

/// Page background (#f8f9fa), carried into the clear colour and the fog so
/// distant geometry fades into the surrounding page.
pub const BACKGROUND_COLOUR: Srgba = Srgba::new(0.973, 0.976, 0.980, 1.0);

/// Linear fog range in world units.
pub const FOG_START: f32 = 50.0;
pub const FOG_END: f32 = 100.0;

pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

pub const SUN_ILLUMINANCE: f32 = 9_000.0;
pub const SUN_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.0);

pub const SHADOW_MAP_SIZE: usize = 1024;
pub const SHADOW_MAX_DISTANCE: f32 = 20.0;
