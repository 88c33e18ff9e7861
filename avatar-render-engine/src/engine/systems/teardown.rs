use bevy::animation::AnimationPlayer;
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::OrbitCamera;

/// Handles teardown releases on exit. Every field may be absent if its setup
/// phase never ran (failed load, missing clips), and `dispose` may be called
/// any number of times.
#[derive(Resource, Default)]
pub struct ViewerTeardown {
    pub model_root: Option<Entity>,
    pub player_entity: Option<Entity>,
    orbit_released: bool,
}

/// Which release steps a `dispose` call actually has to perform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisposeReport {
    pub player: Option<Entity>,
    pub model_root: Option<Entity>,
    pub release_orbit: bool,
}

impl DisposeReport {
    pub fn is_empty(&self) -> bool {
        self.player.is_none() && self.model_root.is_none() && !self.release_orbit
    }
}

impl ViewerTeardown {
    /// Take every live handle, leaving the resource empty. Each step checks
    /// for presence, so repeated calls and partially-constructed viewers
    /// yield an empty report rather than an error.
    pub fn dispose(&mut self) -> DisposeReport {
        let release_orbit = !self.orbit_released;
        self.orbit_released = true;
        DisposeReport {
            player: self.player_entity.take(),
            model_root: self.model_root.take(),
            release_orbit,
        }
    }
}

/// Invoked on shutdown: stop all animation actions, despawn the model
/// hierarchy, release the orbit manipulator.
pub fn teardown_on_exit(
    mut exit_events: EventReader<AppExit>,
    mut teardown: ResMut<ViewerTeardown>,
    mut players: Query<&mut AnimationPlayer>,
    mut commands: Commands,
) {
    if exit_events.is_empty() {
        return;
    }
    exit_events.clear();

    let report = teardown.dispose();
    if report.is_empty() {
        return;
    }

    if let Some(entity) = report.player {
        if let Ok(mut player) = players.get_mut(entity) {
            player.stop_all();
        }
    }
    if let Some(root) = report.model_root {
        commands.entity(root).despawn();
    }
    if report.release_orbit {
        commands.remove_resource::<OrbitCamera>();
    }

    info!("Viewer disposed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispose_is_idempotent() {
        let mut teardown = ViewerTeardown {
            model_root: Some(Entity::from_raw(1)),
            player_entity: Some(Entity::from_raw(2)),
            ..default()
        };

        let first = teardown.dispose();
        assert!(first.model_root.is_some());
        assert!(first.player.is_some());
        assert!(first.release_orbit);

        let second = teardown.dispose();
        assert!(second.is_empty());
    }

    #[test]
    fn dispose_with_nothing_constructed_is_harmless() {
        let mut teardown = ViewerTeardown::default();
        let report = teardown.dispose();
        assert!(report.player.is_none());
        assert!(report.model_root.is_none());
        assert!(report.release_orbit);
        assert!(teardown.dispose().is_empty());
    }
}
