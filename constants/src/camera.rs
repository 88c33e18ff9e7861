use bevy::prelude::*;

/// Initial camera placement, matching the framing the avatar was authored for.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 1.5, 2.5);

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Orbit manipulator tuning. Distances are measured from the orbit focus
/// and bound how far the user can dolly in or out.
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 5.0;

/// Damped-interpolation rate for camera position and rotation, per second.
pub const ORBIT_DAMPING: f32 = 5.0;

/// Slow idle spin, radians per second.
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.21;

pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;

/// Keeps the pitch away from the poles so the orbit never flips.
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;
