//! 2D camera for the cartogram plane.

use bevy::prelude::*;

/// Spawn a 2D camera centered on the dataset plane's origin. Datasets are
/// authored in world units around the anchor, so no fitting pass is needed.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
