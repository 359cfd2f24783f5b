use bevy::prelude::*;

/// Full-viewport node that clips the scrolling column.
#[derive(Component)]
pub struct SectionsRoot;

/// The tall column holding all sections; offset vertically while scrolling.
#[derive(Component)]
pub struct ScrollColumn;

/// Smoothed scroll offset in logical pixels. `target` moves with the wheel,
/// `current` chases it every frame.
#[derive(Component, Default)]
pub struct ScrollState {
    pub target: f32,
    pub current: f32,
}

/// One full-viewport section of the page, in scroll order.
#[derive(Component)]
pub struct Section {
    pub index: usize,
}

/// Button that scrolls the page to the given section.
#[derive(Component)]
pub struct ScrollToSection(pub usize);
