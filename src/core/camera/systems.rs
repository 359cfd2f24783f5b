use crate::core::camera::components::MainCamera;
use bevy::prelude::*;

/// The camera sits just inside the star field, so stars drift both in front
/// of and behind the content plane. The UI renders on the same camera.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    info!("Camera spawned");
}
