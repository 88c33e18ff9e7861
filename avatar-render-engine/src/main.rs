use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod engine;
mod rpc;

use engine::animation::clip_registry::{
    ClipRegistry, attach_animation_graph, run_playback_commands,
};
use engine::animation::playback::{PlaybackCommand, PlaybackState};
use engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller};
use engine::core::app_state::{AppState, transition_to_ready};
use engine::loading::avatar_loader::{AvatarLoader, begin_model_load, poll_avatar_load};
use engine::loading::manifest_loader::{
    ManifestLoader, ViewerManifest, resolve_manifest, start_loading,
};
use engine::loading::progress::LoadingProgress;
use engine::scene::environment::setup_environment;
use engine::scene::fallback::{spawn_fallback, sync_fallback_visibility};
use engine::scene::model_fit::normalize_and_fit;
use engine::systems::hud::{
    fps_notification_system, fps_text_update_system, playback_text_update_system, spawn_hud,
    status_text_update_system,
};
use engine::systems::input::playback_keyboard_shortcuts;
use engine::systems::teardown::{ViewerTeardown, teardown_on_exit};
use engine::systems::window_events::{handle_window_resize, pause_when_occluded};
use rpc::web_rpc::WebRpcPlugin;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Assemble the viewer application: plugins, lifecycle state, resources,
/// and the system schedule.
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin);

    app.init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<AvatarLoader>()
        .init_resource::<ClipRegistry>()
        .init_resource::<PlaybackState>()
        .init_resource::<ViewerTeardown>()
        .init_resource::<OrbitCamera>()
        .add_event::<PlaybackCommand>()
        .add_systems(
            Startup,
            (setup_environment, spawn_fallback, spawn_hud, start_loading),
        )
        .add_systems(
            Update,
            (
                resolve_manifest,
                begin_model_load,
                poll_avatar_load,
                normalize_and_fit,
                transition_to_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                attach_animation_graph,
                orbit_camera_controller,
                playback_keyboard_shortcuts,
                run_playback_commands,
                handle_window_resize,
                pause_when_occluded,
            ),
        )
        .add_systems(
            Update,
            (
                fps_text_update_system,
                fps_notification_system,
                playback_text_update_system,
                status_text_update_system,
                sync_fallback_visibility,
            ),
        )
        .add_systems(Last, teardown_on_exit);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#avatarCanvas".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Avatar Viewer".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
