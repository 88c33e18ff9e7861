use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use constants::camera::{
    CAMERA_START_POSITION, ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MIN_DISTANCE, ORBIT_PITCH_LIMIT, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};

use crate::engine::loading::manifest_loader::ViewerManifest;

/// Orbit state around a focus point. The camera itself renders fine without
/// this resource; teardown removes it and the controller becomes inert.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub auto_rotate: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let start = CAMERA_START_POSITION;
        let flat = Vec2::new(start.x, start.z).length();
        Self {
            focus: Vec3::ZERO,
            distance: start.length(),
            yaw: 0.0,
            pitch: (start.y / flat.max(f32::EPSILON)).atan(),
            auto_rotate: true,
        }
    }
}

/// Damped orbit controller: drag to rotate, scroll to dolly within bounds,
/// slow auto-rotation while idle.
pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    orbit: Option<ResMut<OrbitCamera>>,
    manifest: Option<Res<ViewerManifest>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Some(mut orbit) = orbit else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let dragging = mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO;
    if dragging {
        orbit.yaw += -mouse_delta.x * ORBIT_YAW_SENSITIVITY;
        orbit.pitch += -mouse_delta.y * ORBIT_PITCH_SENSITIVITY;
        orbit.pitch = orbit.pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    } else if orbit.auto_rotate && manifest.as_ref().is_none_or(|m| m.auto_rotate) {
        orbit.yaw += ORBIT_AUTO_ROTATE_SPEED * time.delta_secs();
    }

    // Mouse wheel scroll accumulation (pixel and line scroll).
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if scroll_accum.abs() > f32::EPSILON {
        let (min_distance, max_distance) = manifest
            .as_ref()
            .map(|m| (m.min_distance, m.max_distance))
            .unwrap_or((ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE));
        let dolly_speed = (orbit.distance * 0.2).clamp(0.05, 1.0);
        orbit.distance =
            (orbit.distance - scroll_accum * dolly_speed).clamp(min_distance, max_distance);
    }

    // Camera sits behind the focus along the orbit rotation, looking inward.
    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, -orbit.pitch, 0.0);
    let target_pos = orbit.focus + target_rot * (Vec3::Z * orbit.distance);

    let lerp_speed = (ORBIT_DAMPING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}
