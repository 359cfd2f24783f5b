use crate::content::PortfolioContent;
use crate::helpers::mesh::star_mesh;
use crate::starfield::components::{StarfieldPoints, StarfieldRoot};
use bevy::math::EulerRot;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_4;

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    content: Res<PortfolioContent>,
) {
    let field = stargen::generate(&content.starfield);
    info!(
        "Star field generated: {} points within radius {}",
        field.len(),
        field.radius()
    );

    let mesh_handle = meshes.add(star_mesh(&field));
    // Blended alpha also disables depth writes, so the points never occlude
    // each other or the page behind them.
    let material_handle = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    // Fixed tilt group wrapping the drifting points.
    commands
        .spawn((
            Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_4)),
            GlobalTransform::default(),
            Visibility::default(),
            StarfieldRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(mesh_handle),
                MeshMaterial3d(material_handle),
                Transform::default(),
                GlobalTransform::default(),
                StarfieldPoints::default(),
            ));
        });
}

/// Applies one frame of drift to the point cloud.
///
/// Angles accumulate in `StarfieldPoints`; the transform is re-composed from
/// them instead of being rotated incrementally, so the state stays an additive
/// accumulator. The stored vertex positions are never touched.
pub fn drift_starfield(
    time: Res<Time>,
    mut points_query: Query<(&mut Transform, &mut StarfieldPoints)>,
) {
    let delta = time.delta_secs();
    for (mut transform, mut points) in points_query.iter_mut() {
        points.rotation.advance(delta);
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            points.rotation.pitch,
            points.rotation.yaw,
            0.0,
        );
    }
}

pub fn cleanup_starfield(mut commands: Commands, query: Query<Entity, With<StarfieldRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AppState;
    use bevy::state::app::StatesPlugin;
    use std::thread::sleep;
    use std::time::Duration;

    fn drift_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.init_state::<AppState>();
        app.add_systems(
            Update,
            drift_starfield.run_if(in_state(AppState::Portfolio)),
        );
        app
    }

    fn tick(app: &mut App, times: usize) {
        for _ in 0..times {
            sleep(Duration::from_millis(2));
            app.update();
        }
    }

    #[test]
    fn drift_runs_in_portfolio_and_stops_after_leaving_it() {
        let mut app = drift_app();
        let entity = app
            .world_mut()
            .spawn((Transform::default(), StarfieldPoints::default()))
            .id();

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Portfolio);
        tick(&mut app, 3);

        let active = app.world().get::<StarfieldPoints>(entity).unwrap().rotation;
        assert!(active.pitch < 0.0);
        assert!(active.yaw < 0.0);

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Loading);
        tick(&mut app, 3);

        let after = app.world().get::<StarfieldPoints>(entity).unwrap().rotation;
        assert_eq!(active, after);
    }

    #[test]
    fn drift_recomposes_transform_from_accumulated_angles() {
        let mut app = drift_app();
        let entity = app
            .world_mut()
            .spawn((Transform::default(), StarfieldPoints::default()))
            .id();

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Portfolio);
        tick(&mut app, 3);

        let points = app.world().get::<StarfieldPoints>(entity).unwrap();
        let expected = Quat::from_euler(
            EulerRot::XYZ,
            points.rotation.pitch,
            points.rotation.yaw,
            0.0,
        );
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!(transform.rotation.abs_diff_eq(expected, 1e-6));
    }
}
