use crate::constants::{PITCH_DRIFT_DIVISOR, YAW_DRIFT_DIVISOR};

/// Accumulated rotation of a star field around the X (pitch) and Y (yaw) axes.
///
/// The angles are unbounded accumulators in radians: every frame adds a small
/// increment derived from the elapsed time, and callers re-compose the angles
/// into a transform. Floating-point drift over very long runtimes is accepted,
/// it matches how renderers treat rotation accumulators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriftRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl DriftRotation {
    /// Advances both angles by one frame worth of drift.
    ///
    /// Purely additive, so applying `d1` then `d2` lands on the same angles as
    /// applying `d1 + d2` at once.
    pub fn advance(&mut self, delta_secs: f32) {
        self.pitch -= delta_secs / PITCH_DRIFT_DIVISOR;
        self.yaw -= delta_secs / YAW_DRIFT_DIVISOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn sequential_deltas_accumulate_like_their_sum() {
        let mut split = DriftRotation::default();
        split.advance(0.3);
        split.advance(1.9);

        let mut whole = DriftRotation::default();
        whole.advance(2.2);

        assert!((split.pitch - whole.pitch).abs() < EPS);
        assert!((split.yaw - whole.yaw).abs() < EPS);
    }

    #[test]
    fn zero_delta_leaves_angles_unchanged() {
        let mut rotation = DriftRotation {
            pitch: -0.25,
            yaw: 0.75,
        };
        rotation.advance(0.0);
        assert_eq!(rotation.pitch, -0.25);
        assert_eq!(rotation.yaw, 0.75);
    }

    /// Ten seconds of drift in one-second steps: pitch ends at -10/10 and yaw
    /// at -10/15.
    #[test]
    fn ten_seconds_of_drift() {
        let mut rotation = DriftRotation::default();
        for _ in 0..10 {
            rotation.advance(1.0);
        }
        assert!((rotation.pitch - (-1.0)).abs() < EPS);
        assert!((rotation.yaw - (-10.0 / 15.0)).abs() < EPS);
    }
}
