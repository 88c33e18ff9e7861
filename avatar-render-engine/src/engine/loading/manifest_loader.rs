use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::camera::{ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE};
use constants::model::{DEFAULT_MODEL_PATH, VIEWER_MANIFEST_PATH};

use crate::engine::loading::progress::LoadingProgress;

/// Viewer configuration as a Bevy asset. Mirrors the JSON structure exactly;
/// every field beyond the model path has a built-in default.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct ViewerManifest {
    pub model_path: String,
    #[serde(default = "default_auto_rotate")]
    pub auto_rotate: bool,
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
}

fn default_auto_rotate() -> bool {
    true
}

fn default_min_distance() -> f32 {
    ORBIT_MIN_DISTANCE
}

fn default_max_distance() -> f32 {
    ORBIT_MAX_DISTANCE
}

impl Default for ViewerManifest {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            auto_rotate: default_auto_rotate(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
        }
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

/// Start the loading process.
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(VIEWER_MANIFEST_PATH));
}

/// Resolve the manifest once the asset server settles. A missing or broken
/// manifest is not fatal: the built-in defaults take over, logged.
pub fn resolve_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            if let Some(manifest) = manifests.get(handle) {
                info!("✓ Viewer manifest loaded: model {}", manifest.model_path);
                commands.insert_resource(manifest.clone());
                loading_progress.manifest_resolved = true;
            }
        }
        Some(LoadState::Failed(error)) => {
            warn!("Viewer manifest unavailable, using defaults: {error}");
            commands.insert_resource(ViewerManifest::default());
            loading_progress.manifest_resolved = true;
        }
        _ => {}
    }
}
