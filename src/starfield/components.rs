use bevy::prelude::*;
use stargen::DriftRotation;

/// Root of the star-field hierarchy; carries the fixed scene tilt.
#[derive(Component)]
pub struct StarfieldRoot;

/// The points entity whose transform the drift system rotates every frame.
/// The accumulated angles live here, not in the transform, so the update
/// stays a pure additive accumulation.
#[derive(Component, Default)]
pub struct StarfieldPoints {
    pub rotation: DriftRotation,
}
