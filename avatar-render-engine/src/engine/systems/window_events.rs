use bevy::prelude::*;
use bevy::window::{WindowOccluded, WindowResized};

use constants::model::{FALLBACK_SURFACE_HEIGHT, FALLBACK_SURFACE_WIDTH};

use crate::engine::animation::playback::PlaybackCommand;

/// Surface dimensions to use for projection updates; zero-size reports (a
/// canvas before page layout settles) fall back to the built-in defaults.
pub fn surface_dimensions(width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        (FALLBACK_SURFACE_WIDTH, FALLBACK_SURFACE_HEIGHT)
    } else {
        (width, height)
    }
}

/// Keep the projection undistorted across layout changes: aspect follows the
/// new surface exactly. The renderer's output buffer tracks the window on
/// its own; only the projection needs our hand.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resize_events.read() {
        let (width, height) = surface_dimensions(event.width, event.height);
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = width / height;
            }
        }
        debug!("Surface resized to {width}x{height}");
    }
}

/// Backgrounding pauses playback to conserve resources. Becoming visible
/// again never auto-resumes; that stays a user action.
pub fn pause_when_occluded(
    mut occluded_events: EventReader<WindowOccluded>,
    mut playback_commands: EventWriter<PlaybackCommand>,
) {
    for event in occluded_events.read() {
        if event.occluded {
            info!("Window occluded, pausing animation");
            playback_commands.write(PlaybackCommand::Pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_dimensions_pass_through() {
        assert_eq!(surface_dimensions(800.0, 450.0), (800.0, 450.0));
    }

    #[test]
    fn zero_or_negative_dimensions_use_defaults() {
        let defaults = (FALLBACK_SURFACE_WIDTH, FALLBACK_SURFACE_HEIGHT);
        assert_eq!(surface_dimensions(0.0, 450.0), defaults);
        assert_eq!(surface_dimensions(800.0, 0.0), defaults);
        assert_eq!(surface_dimensions(-1.0, -1.0), defaults);
    }
}
