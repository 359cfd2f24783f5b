/// Number of stars sampled when the app config does not override it.
pub const DEFAULT_STAR_COUNT: usize = 5000;

/// Radius of the sphere the stars are sampled from, in world units.
pub const DEFAULT_FIELD_RADIUS: f32 = 1.5;

/// Elapsed seconds are divided by these before being subtracted from the
/// accumulated angles, giving the slow two-axis drift.
pub const PITCH_DRIFT_DIVISOR: f32 = 10.0;
pub const YAW_DRIFT_DIVISOR: f32 = 15.0;

/// Per-star brightness range, baked into the point's vertex color.
pub const MIN_BRIGHTNESS: f32 = 0.5;
pub const MAX_BRIGHTNESS: f32 = 1.0;
