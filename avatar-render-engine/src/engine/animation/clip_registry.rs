use bevy::animation::AnimationPlayer;
use bevy::animation::graph::{AnimationGraph, AnimationGraphHandle, AnimationNodeIndex};
use bevy::prelude::*;

use crate::engine::animation::playback::{PlaybackCommand, PlaybackState, PlaybackTransition};
use crate::engine::systems::teardown::ViewerTeardown;
use crate::rpc::web_rpc::WebRpcInterface;

/// Ordered clip set registered from the loaded model, plus the graph and the
/// player entity that drive it. Empty until load completes.
#[derive(Resource, Default)]
pub struct ClipRegistry {
    pub clip_names: Vec<String>,
    pub nodes: Vec<AnimationNodeIndex>,
    pub graph: Option<Handle<AnimationGraph>>,
    pub player_entity: Option<Entity>,
}

impl ClipRegistry {
    pub fn clip_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.clip_names.get(index).map(String::as_str)
    }
}

/// Wire the registered animation graph onto the player the spawned glTF
/// scene brings with it.
pub fn attach_animation_graph(
    mut registry: ResMut<ClipRegistry>,
    mut teardown: ResMut<ViewerTeardown>,
    players: Query<Entity, Added<AnimationPlayer>>,
    mut commands: Commands,
) {
    let Some(graph) = registry.graph.clone() else {
        return;
    };

    for entity in &players {
        commands
            .entity(entity)
            .insert(AnimationGraphHandle(graph.clone()));
        registry.player_entity = Some(entity);
        teardown.player_entity = Some(entity);
        info!("✓ Animation graph attached, {} clips selectable", registry.clip_count());
    }
}

/// Apply queued playback commands to the state machine and carry the
/// resulting transitions onto the `AnimationPlayer`. Invalid commands fall
/// out of the state machine as `None` and touch nothing.
pub fn run_playback_commands(
    mut command_events: EventReader<PlaybackCommand>,
    mut playback: ResMut<PlaybackState>,
    registry: Res<ClipRegistry>,
    mut players: Query<&mut AnimationPlayer>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    for command in command_events.read() {
        let Some(transition) = playback.apply(*command, registry.clip_count()) else {
            continue;
        };

        if let Some(entity) = registry.player_entity {
            if let Ok(mut player) = players.get_mut(entity) {
                perform_transition(&mut player, &registry, transition);
            }
        }

        rpc.send_notification(
            "playback_state",
            serde_json::json!({
                "playing": playback.playing,
                "clip": playback.selected.and_then(|index| registry.name(index)),
            }),
        );
    }
}

fn perform_transition(
    player: &mut AnimationPlayer,
    registry: &ClipRegistry,
    transition: PlaybackTransition,
) {
    match transition {
        PlaybackTransition::Start { index } => {
            let Some(&node) = registry.nodes.get(index) else {
                return;
            };
            player.stop_all();
            player.play(node).repeat();
        }
        PlaybackTransition::Pause { index } => {
            if let Some(&node) = registry.nodes.get(index) {
                if let Some(active) = player.animation_mut(node) {
                    active.pause();
                }
            }
        }
        PlaybackTransition::Resume { index } => {
            let Some(&node) = registry.nodes.get(index) else {
                return;
            };
            match player.animation_mut(node) {
                Some(active) => {
                    active.resume();
                }
                // The clip was stopped rather than paused; start it over.
                None => {
                    player.play(node).repeat();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A failed load never reaches clip registration, so the registry keeps
    // its default shape and every selection against it is rejected.
    #[test]
    fn unregistered_registry_offers_no_clips() {
        let registry = ClipRegistry::default();
        assert_eq!(registry.clip_count(), 0);
        assert_eq!(registry.name(0), None);
        assert!(registry.graph.is_none());

        let mut playback = PlaybackState::default();
        assert_eq!(playback.apply(PlaybackCommand::Select(0), registry.clip_count()), None);
        assert_eq!(playback, PlaybackState::default());
    }
}
