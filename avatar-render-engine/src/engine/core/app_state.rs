use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Viewer lifecycle. `Failed` keeps rendering the empty scene with the
/// fallback placeholder visible; nothing propagates to the host.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Transition to Ready once the model is spawned, normalized and fitted.
pub fn transition_to_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_fitted {
        info!("→ Avatar ready, transitioning to Ready state");
        next_state.set(AppState::Ready);
    }
}
