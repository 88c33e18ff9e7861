use bevy::prelude::*;

/// Step flags for the staged load: manifest → model request → scene spawn →
/// fit/normalize.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub model_requested: bool,
    pub scene_spawned: bool,
    pub model_fitted: bool,
}
