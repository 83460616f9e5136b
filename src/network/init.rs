use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const WEIGHT_LOWER_BOUND: f64 = -0.5;
pub const WEIGHT_UPPER_BOUND: f64 = 0.5;

/// Seeded source of initial weights, uniform on
/// [`WEIGHT_LOWER_BOUND`, `WEIGHT_UPPER_BOUND`] and never exactly zero.
pub struct WeightInit {
    rng: StdRng,
    distribution: Uniform<f64>,
}

impl WeightInit {
    pub fn new(seed: u64) -> WeightInit {
        WeightInit {
            rng: StdRng::seed_from_u64(seed),
            distribution: Uniform::new_inclusive(WEIGHT_LOWER_BOUND, WEIGHT_UPPER_BOUND),
        }
    }

    /// Draws one weight, re-drawing on an exact 0.0.
    pub fn next_weight(&mut self) -> f64 {
        loop {
            let w = self.distribution.sample(&mut self.rng);
            if w != 0.0 {
                return w;
            }
        }
    }
}
