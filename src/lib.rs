mod content;
mod core;
mod helpers;
mod sections;
mod starfield;
mod ui;

use crate::content::PortfolioContent;
use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::sections::SectionsPlugin;
use crate::starfield::StarfieldPlugin;
use crate::ui::UIPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((CameraPlugin, StarfieldPlugin, SectionsPlugin, UIPlugin))
            .add_systems(OnEnter(AppState::Loading), load_content);

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}

/// Reads the page content once at startup, then moves on to the portfolio
/// proper. A missing or broken content file falls back to built-in defaults
/// so the app always comes up.
fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<AppState>>) {
    commands.insert_resource(PortfolioContent::load_or_default("assets/portfolio.toml"));
    next_state.set(AppState::Portfolio);
}
