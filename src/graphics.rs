use bevy::prelude::*;

/// Setup camera for 2D rendering.
///
/// The default `Camera2d` projection maps one world unit to one pixel, so the
/// 800×600 window shows exactly the scene.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("Camera spawned");
}
