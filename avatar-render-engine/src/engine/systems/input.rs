use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::animation::playback::PlaybackCommand;

/// Native playback shortcuts: digits select a clip, Space toggles, P pauses.
/// On the web the embedding page drives the same commands over RPC instead.
pub fn playback_keyboard_shortcuts(
    #[cfg(not(target_arch = "wasm32"))] keyboard: Res<ButtonInput<KeyCode>>,
    #[cfg(not(target_arch = "wasm32"))] mut playback_commands: EventWriter<PlaybackCommand>,
) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        const DIGITS: [KeyCode; 9] = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
            KeyCode::Digit7,
            KeyCode::Digit8,
            KeyCode::Digit9,
        ];

        for (index, key) in DIGITS.iter().enumerate() {
            if keyboard.just_pressed(*key) {
                playback_commands.write(PlaybackCommand::Select(index));
            }
        }

        if keyboard.just_pressed(KeyCode::Space) {
            playback_commands.write(PlaybackCommand::Toggle);
        }
        if keyboard.just_pressed(KeyCode::KeyP) {
            playback_commands.write(PlaybackCommand::Pause);
        }
    }
}
