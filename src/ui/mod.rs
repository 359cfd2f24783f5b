pub mod bundles;
pub mod components;
pub mod systems;
pub mod widgets;

use crate::ui::systems::*;
use bevy::prelude::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_button_interactions,
                handle_link_buttons,
                // capture spawn-time alphas before the first animation step
                (init_fade_ins, advance_fade_ins).chain(),
            ),
        );
    }
}
