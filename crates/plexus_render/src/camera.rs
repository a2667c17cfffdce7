use bevy::prelude::*;

/// 2D camera for the network overlay
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
