use bevy::prelude::*;

/// Playback requests, raised by keyboard input, the RPC bridge, or window
/// occlusion. Applied against `PlaybackState` by `run_playback_commands`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Select(usize),
    Toggle,
    Pause,
}

/// Side effect a state transition asks the animation player to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackTransition {
    /// Stop whatever is active and start clip `index` from the beginning.
    Start { index: usize },
    Resume { index: usize },
    Pause { index: usize },
}

/// Selection state machine: {no clip, clip playing, clip paused}. Invalid
/// requests (out-of-range index, nothing selected, nothing loaded) return
/// `None` and leave the state untouched.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub selected: Option<usize>,
    pub playing: bool,
}

impl PlaybackState {
    /// Select clip `index` out of `clip_count` registered clips and start it.
    /// A silent no-op unless the index refers to an existing clip.
    pub fn select(&mut self, index: usize, clip_count: usize) -> Option<PlaybackTransition> {
        if index >= clip_count {
            return None;
        }
        self.selected = Some(index);
        self.playing = true;
        Some(PlaybackTransition::Start { index })
    }

    /// Flip playing ↔ paused for the selected clip; no-op without a selection.
    pub fn toggle(&mut self) -> Option<PlaybackTransition> {
        let index = self.selected?;
        if self.playing {
            self.playing = false;
            Some(PlaybackTransition::Pause { index })
        } else {
            self.playing = true;
            Some(PlaybackTransition::Resume { index })
        }
    }

    /// Pause the selected clip. Idempotent: already-paused is a no-op.
    pub fn pause(&mut self) -> Option<PlaybackTransition> {
        let index = self.selected?;
        if !self.playing {
            return None;
        }
        self.playing = false;
        Some(PlaybackTransition::Pause { index })
    }

    pub fn apply(&mut self, command: PlaybackCommand, clip_count: usize) -> Option<PlaybackTransition> {
        match command {
            PlaybackCommand::Select(index) => self.select(index, clip_count),
            PlaybackCommand::Toggle => self.toggle(),
            PlaybackCommand::Pause => self.pause(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_toggle_pauses_and_toggle_resumes() {
        let mut state = PlaybackState::default();
        assert_eq!(
            state.select(1, 3),
            Some(PlaybackTransition::Start { index: 1 })
        );
        assert!(state.playing);

        assert_eq!(state.toggle(), Some(PlaybackTransition::Pause { index: 1 }));
        assert_eq!(state.selected, Some(1));
        assert!(!state.playing);

        assert_eq!(state.toggle(), Some(PlaybackTransition::Resume { index: 1 }));
        assert!(state.playing);
    }

    #[test]
    fn out_of_range_select_is_a_silent_no_op() {
        let mut state = PlaybackState::default();
        assert_eq!(state.select(3, 3), None);
        assert_eq!(state, PlaybackState::default());

        // Before any clips are registered every select is invalid.
        assert_eq!(state.select(0, 0), None);
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn invalid_select_keeps_previous_selection() {
        let mut state = PlaybackState::default();
        state.select(2, 4);
        assert_eq!(state.select(9, 4), None);
        assert_eq!(state.selected, Some(2));
        assert!(state.playing);
    }

    #[test]
    fn toggle_and_pause_without_selection_do_nothing() {
        let mut state = PlaybackState::default();
        assert_eq!(state.toggle(), None);
        assert_eq!(state.pause(), None);
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn pause_is_idempotent() {
        let mut state = PlaybackState::default();
        state.select(0, 1);
        assert_eq!(state.pause(), Some(PlaybackTransition::Pause { index: 0 }));
        assert_eq!(state.pause(), None);
        assert_eq!(state.selected, Some(0));
        assert!(!state.playing);
    }

    #[test]
    fn selecting_a_new_clip_restarts_playback() {
        let mut state = PlaybackState::default();
        state.select(0, 2);
        state.pause();
        assert_eq!(
            state.select(1, 2),
            Some(PlaybackTransition::Start { index: 1 })
        );
        assert!(state.playing);
        assert_eq!(state.selected, Some(1));
    }
}
