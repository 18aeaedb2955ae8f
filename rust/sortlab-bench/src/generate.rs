//! Pseudo-random test arrays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortlab_core::Key;

/// Source of fresh input arrays for benchmark trials.
///
/// With a seed the sequence of arrays is reproducible; without one the
/// generator is seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// `size` keys drawn uniformly from the whole key range, negatives
    /// included.
    pub fn array(&mut self, size: usize) -> Vec<Key> {
        (0..size).map(|_| self.rng.gen::<Key>()).collect()
    }
}
