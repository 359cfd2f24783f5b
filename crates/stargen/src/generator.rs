use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    pub count: usize,
    pub radius: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_STAR_COUNT,
            radius: DEFAULT_FIELD_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Multiplied into the point color, [MIN_BRIGHTNESS, MAX_BRIGHTNESS).
    pub brightness: f32,
}

/// A fixed set of stars sampled once at generation time.
///
/// Positions never change after generation; only the transform wrapping the
/// rendered field rotates.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    radius: f32,
}

impl Starfield {
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Positions as a flat attribute buffer for mesh construction.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.stars.iter().map(|s| s.position.to_array()).collect()
    }
}

/// Generates a star field with a fresh thread-local RNG.
///
/// Each call produces a different field; the seed is deliberately not fixed.
pub fn generate(settings: &StarfieldSettings) -> Starfield {
    generate_with_rng(settings, &mut rand::rng())
}

/// Generates a star field from the given RNG, for reproducible output.
pub fn generate_with_rng<R: Rng + ?Sized>(settings: &StarfieldSettings, rng: &mut R) -> Starfield {
    let stars = (0..settings.count)
        .map(|_| Star {
            position: sample_in_unit_ball(rng) * settings.radius,
            brightness: rng.random_range(MIN_BRIGHTNESS..MAX_BRIGHTNESS),
        })
        .collect();
    Starfield {
        stars,
        radius: settings.radius,
    }
}

/// Uniform-in-volume sample from the unit ball.
///
/// Draws from the enclosing cube and rejects points outside the sphere, which
/// keeps the density constant per unit volume. Sampling each coordinate
/// uniformly without the rejection would bias stars toward the cube corners.
/// The acceptance rate is pi/6 (~52%), so the loop terminates quickly.
fn sample_in_unit_ball<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const EPS: f32 = 1e-4;

    fn field(count: usize, radius: f32, seed: u64) -> Starfield {
        let settings = StarfieldSettings { count, radius };
        generate_with_rng(&settings, &mut StdRng::seed_from_u64(seed))
    }

    #[rstest]
    #[case(1, 0.5)]
    #[case(100, 1.0)]
    #[case(5000, 1.5)]
    fn exact_count_and_containment(#[case] count: usize, #[case] radius: f32) {
        let field = field(count, radius, 7);
        assert_eq!(field.len(), count);
        for star in field.stars() {
            assert!(star.position.length() <= radius + EPS);
        }
    }

    #[test]
    fn brightness_stays_in_range() {
        let field = field(2000, 1.5, 11);
        for star in field.stars() {
            assert!(star.brightness >= MIN_BRIGHTNESS);
            assert!(star.brightness < MAX_BRIGHTNESS);
        }
    }

    /// Bins stars into five radial shells of equal volume. Uniform-in-volume
    /// sampling puts an equal share into each shell; uniform-in-radius would
    /// put only ~7% into the outermost one.
    #[test]
    fn density_is_uniform_per_volume() {
        let shells = 5usize;
        let count = 50_000usize;
        let radius = 1.5f32;
        let field = field(count, radius, 42);

        let mut bins = vec![0usize; shells];
        for star in field.stars() {
            let r = star.position.length();
            // Shell k covers radii [R*(k/5)^(1/3), R*((k+1)/5)^(1/3)).
            let k = (shells as f32 * (r / radius).powi(3)) as usize;
            bins[k.min(shells - 1)] += 1;
        }

        let expected = count / shells;
        for (k, &hits) in bins.iter().enumerate() {
            let deviation = hits.abs_diff(expected);
            assert!(
                deviation < expected / 25,
                "shell {k}: {hits} stars, expected ~{expected}"
            );
        }
    }

    #[test]
    fn independent_generations_differ_but_both_hold_invariants() {
        let settings = StarfieldSettings {
            count: 500,
            radius: 1.5,
        };
        let a = generate(&settings);
        let b = generate(&settings);

        assert_eq!(a.len(), settings.count);
        assert_eq!(b.len(), settings.count);
        assert_ne!(a.stars(), b.stars());
        for star in a.stars().iter().chain(b.stars()) {
            assert!(star.position.length() <= settings.radius + EPS);
        }
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = field(300, 1.5, 123);
        let b = field(300, 1.5, 123);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn settings_default_matches_constants() {
        let settings = StarfieldSettings::default();
        assert_eq!(settings.count, DEFAULT_STAR_COUNT);
        assert_eq!(settings.radius, DEFAULT_FIELD_RADIUS);
    }
}
