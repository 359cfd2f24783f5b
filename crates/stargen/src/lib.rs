pub mod constants;
pub mod drift;
pub mod generator;

pub use drift::DriftRotation;
pub use generator::{Star, Starfield, StarfieldSettings, generate, generate_with_rng};
