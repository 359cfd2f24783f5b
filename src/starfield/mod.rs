pub mod components;
pub mod systems;

use crate::core::state::AppState;
use crate::starfield::systems::*;
use bevy::prelude::*;

/// Spawns the rotating star field behind the page and keeps it drifting for
/// as long as the portfolio state is active. Leaving the state tears the
/// field down and stops the drift system.
pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Portfolio), spawn_starfield)
            .add_systems(OnExit(AppState::Portfolio), cleanup_starfield)
            .add_systems(
                Update,
                drift_starfield.run_if(in_state(AppState::Portfolio)),
            );
    }
}
