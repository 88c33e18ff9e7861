use bevy::animation::graph::AnimationGraph;
use bevy::asset::RecursiveDependencyLoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::animation::clip_registry::ClipRegistry;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::manifest_loader::ViewerManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::model_fit::AvatarModel;
use crate::engine::systems::teardown::ViewerTeardown;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Resource, Default)]
pub struct AvatarLoader {
    pub gltf: Option<Handle<Gltf>>,
}

/// Issue the glTF load request once the manifest has resolved. The request
/// never blocks; outcomes are observed by `poll_avatar_load`.
pub fn begin_model_load(
    mut loading_progress: ResMut<LoadingProgress>,
    mut loader: ResMut<AvatarLoader>,
    manifest: Option<Res<ViewerManifest>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_requested || !loading_progress.manifest_resolved {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    info!("Loading avatar model from: {}", manifest.model_path);
    loader.gltf = Some(asset_server.load(&manifest.model_path));
    loading_progress.model_requested = true;
}

/// Poll the pending glTF load each frame. Success spawns the scene and
/// registers the clips; failure leaves the fallback visible and parks the
/// viewer in `Failed`. Both outcomes are terminal and mutually exclusive;
/// there is no timeout, so a hung load stays here with the placeholder shown.
pub fn poll_avatar_load(
    mut loading_progress: ResMut<LoadingProgress>,
    loader: Res<AvatarLoader>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut registry: ResMut<ClipRegistry>,
    mut teardown: ResMut<ViewerTeardown>,
    mut rpc: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<AppState>>,
    mut commands: Commands,
) {
    if loading_progress.scene_spawned || !loading_progress.model_requested {
        return;
    }
    let Some(ref handle) = loader.gltf else {
        return;
    };

    match asset_server.get_recursive_dependency_load_state(handle) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            let Some(gltf) = gltf_assets.get(handle) else {
                return;
            };
            let Some(scene) = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned())
            else {
                error!("Avatar model contains no scenes, showing fallback");
                rpc.send_notification("load_failed", serde_json::json!({}));
                next_state.set(AppState::Failed);
                return;
            };

            let root = commands
                .spawn((SceneRoot(scene), Transform::default(), AvatarModel))
                .id();
            teardown.model_root = Some(root);
            loading_progress.scene_spawned = true;
            info!("✓ Avatar model loaded and spawned");

            if gltf.animations.is_empty() {
                warn!("No animation clips found in avatar model");
            } else {
                let names = clip_names(gltf);
                info!("Found animation clips: {names:?}");
                let (graph, nodes) = AnimationGraph::from_clips(gltf.animations.iter().cloned());
                registry.graph = Some(graphs.add(graph));
                registry.nodes = nodes;
                registry.clip_names = names.clone();
                rpc.send_notification(
                    "animations_loaded",
                    serde_json::json!({ "names": names }),
                );
            }
        }
        Some(RecursiveDependencyLoadState::Failed(error)) => {
            error!("Error loading avatar model: {error}");
            rpc.send_notification("load_failed", serde_json::json!({}));
            next_state.set(AppState::Failed);
        }
        // Still in flight. The asset server exposes no byte counts here, so
        // in-progress frames are simply observed as "neither outcome yet".
        _ => {}
    }
}

/// Clip display names in arrival order, falling back to an index label for
/// unnamed clips.
fn clip_names(gltf: &Gltf) -> Vec<String> {
    gltf.animations
        .iter()
        .enumerate()
        .map(|(index, clip)| {
            gltf.named_animations
                .iter()
                .find(|(_, named)| *named == clip)
                .map(|(name, _)| name.to_string())
                .unwrap_or_else(|| format!("clip {index}"))
        })
        .collect()
}
