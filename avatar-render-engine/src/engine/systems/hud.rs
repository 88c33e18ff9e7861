use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::animation::clip_registry::ClipRegistry;
use crate::engine::animation::playback::PlaybackState;
use crate::engine::core::app_state::AppState;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Component)]
pub struct FpsText;

/// Current clip name plus the play/pause indicator.
#[derive(Component)]
pub struct PlaybackText;

/// Lifecycle message: loading, failed, or cleared once ready.
#[derive(Component)]
pub struct StatusText;

const HUD_TEXT_COLOUR: Color = Color::Srgba(Srgba::new(0.25, 0.27, 0.30, 1.0));

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("FPS: --"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(HUD_TEXT_COLOUR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        FpsText,
    ));

    commands.spawn((
        Text::new("No animation selected"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(HUD_TEXT_COLOUR),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        PlaybackText,
    ));

    commands.spawn((
        Text::new("Loading avatar…"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(HUD_TEXT_COLOUR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(8.0),
            ..default()
        },
        StatusText,
    ));
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

/// Push smoothed FPS to the embedding page every half second.
pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    if current_time - *last_send_time >= 0.5 {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                rpc_interface.send_notification(
                    "fps_update",
                    serde_json::json!({
                        "fps": value as f32
                    }),
                );
                *last_send_time = current_time;
            }
        }
    }
}

/// Mirror the playback state machine into the on-screen indicator.
pub fn playback_text_update_system(
    playback: Res<PlaybackState>,
    registry: Res<ClipRegistry>,
    mut query: Query<&mut Text, With<PlaybackText>>,
) {
    if !playback.is_changed() && !registry.is_changed() {
        return;
    }

    let label = match playback.selected {
        None => "No animation selected".to_string(),
        Some(index) => {
            let name = registry.name(index).unwrap_or("?");
            if playback.playing {
                format!("▶ {name}")
            } else {
                format!("⏸ {name}")
            }
        }
    };

    for mut text in &mut query {
        text.0 = label.clone();
    }
}

pub fn status_text_update_system(
    state: Res<State<AppState>>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    if !state.is_changed() {
        return;
    }

    let label = match state.get() {
        AppState::Loading => "Loading avatar…",
        AppState::Ready => "",
        AppState::Failed => "Avatar unavailable, showing placeholder",
    };

    for mut text in &mut query {
        text.0 = label.to_string();
    }
}
