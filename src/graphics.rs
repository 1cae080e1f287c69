use bevy::prelude::*;

/// Setup camera for 2D rendering; the UI renders through the same camera.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}
