pub mod components;
pub mod systems;

use crate::core::state::AppState;
use crate::sections::systems::*;
use bevy::prelude::*;

/// Builds the six content sections as one viewport-tall column each and
/// scrolls the column with the mouse wheel.
pub struct SectionsPlugin;

impl Plugin for SectionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Portfolio), setup_sections)
            .add_systems(OnExit(AppState::Portfolio), cleanup_sections)
            .add_systems(
                Update,
                (scroll_on_wheel, handle_scroll_buttons, smooth_scroll)
                    .run_if(in_state(AppState::Portfolio)),
            );
    }
}
