//! Floored-normal sampling for threshold and residual fields.
//!
//! Draws from `N(mean, std_dev)` and clamps every value below the floor
//! up to exactly the floor. The clamp is a hard floor, not a truncated
//! distribution: the probability mass below the floor collapses onto
//! the boundary instead of being resampled away.
//!
//! Respects the determinism contract: all draws come from an explicitly
//! seeded ChaCha8 RNG threaded in by the caller; there is no
//! process-global randomness anywhere in the engine.

use rand::RngExt;
use rand_chacha::ChaCha8Rng;

/// A normal distribution with a hard lower floor.
///
/// `std_dev` of zero is valid and yields the constant
/// `max(mean, floor)`, degenerating to a uniform field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlooredNormal {
    mean: f64,
    std_dev: f64,
    floor: f64,
}

impl FlooredNormal {
    /// Sampler for `N(mean, std_dev)` clamped below at `floor`.
    ///
    /// Parameter validation happens at configuration time
    /// ([`SimConfig::validate`](crate::config::SimConfig::validate));
    /// this constructor is infallible.
    pub fn new(mean: f64, std_dev: f64, floor: f64) -> Self {
        Self {
            mean,
            std_dev,
            floor,
        }
    }

    /// Draw one floored value.
    pub fn draw(&self, rng: &mut ChaCha8Rng) -> f64 {
        let v = self.mean + self.std_dev * standard_normal(rng);
        if v < self.floor {
            self.floor
        } else {
            v
        }
    }

    /// Draw `n` values, every one `>= floor`.
    pub fn sample(&self, rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

/// Generate a standard-normal sample using the Box-Muller transform.
/// Avoids the `rand_distr` dependency.
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Draw `n` values uniform in `[0, 1)` — the initial force field.
pub fn uniform_field(rng: &mut ChaCha8Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random::<f64>()).collect()
}
