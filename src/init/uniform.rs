use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples on `[0, 1)` used to initialize weights and biases.
///
/// Every `rand::Rng` is a `UniformSource`, so callers pass `thread_rng()` for
/// throwaway models and a seeded generator when they need reproducibility.
pub trait UniformSource {
    fn uniform_scalar(&mut self) -> f64;

    fn uniform_vec(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.uniform_scalar()).collect()
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform_scalar(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic generator for tests and reproducible runs.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
