use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::{CascadeShadowConfigBuilder, DirectionalLightShadowMap, DistanceFog, FogFalloff};
use bevy::prelude::*;

use constants::camera::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION};
use constants::environment::{
    AMBIENT_BRIGHTNESS, BACKGROUND_COLOUR, FOG_END, FOG_START, SHADOW_MAP_SIZE,
    SHADOW_MAX_DISTANCE, SUN_ILLUMINANCE, SUN_POSITION,
};

/// Establish the bounded scene: page-coloured background with distance fog,
/// a perspective camera, one ambient and one shadow-casting directional light.
pub fn setup_environment(mut commands: Commands) {
    commands.insert_resource(ClearColor(BACKGROUND_COLOUR.into()));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Msaa::Sample4,
        DistanceFog {
            color: BACKGROUND_COLOUR.into(),
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: SHADOW_MAX_DISTANCE,
            ..default()
        }
        .build(),
    ));

    info!("Scene environment initialised");
}
