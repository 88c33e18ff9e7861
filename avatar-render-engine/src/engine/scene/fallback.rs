use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

/// In-scene stand-in shown while the avatar is loading and after a failed
/// load. The HUD status line carries the matching message.
#[derive(Component)]
pub struct FallbackPlaceholder;

pub fn spawn_fallback(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let silhouette = meshes.add(Capsule3d::new(0.35, 1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.78, 0.80, 0.83),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(silhouette),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.0, 0.0),
        FallbackPlaceholder,
    ));
}

/// Placeholder visibility for a lifecycle state: visible while loading or
/// after failure, hidden once the model is attached to the scene.
pub fn placeholder_visibility(state: AppState) -> Visibility {
    match state {
        AppState::Ready => Visibility::Hidden,
        AppState::Loading | AppState::Failed => Visibility::Visible,
    }
}

pub fn sync_fallback_visibility(
    state: Res<State<AppState>>,
    mut placeholders: Query<&mut Visibility, With<FallbackPlaceholder>>,
) {
    if !state.is_changed() {
        return;
    }

    let target = placeholder_visibility(*state.get());

    for mut visibility in &mut placeholders {
        *visibility = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_stays_visible_until_ready() {
        assert_eq!(placeholder_visibility(AppState::Loading), Visibility::Visible);
        assert_eq!(placeholder_visibility(AppState::Ready), Visibility::Hidden);
    }

    #[test]
    fn failed_load_keeps_the_placeholder_shown() {
        assert_eq!(placeholder_visibility(AppState::Failed), Visibility::Visible);
    }
}
