// src/generators/random.rs
use chrono::Utc;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use super::charset::CharacterClass;

/// Seed-once pseudo-random source shared by every password in a run.
///
/// This is not a cryptographically secure generator: the seed comes from the
/// wall clock.
pub struct RandomSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    // Seed from nanoseconds since the epoch, falling back to seconds past 2262
    pub fn from_time() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp()) as u64;
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in the inclusive range `[low, high]`.
    pub fn index_in(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    pub fn char_from(&mut self, class: &CharacterClass) -> u8 {
        class.chars[self.index_in(0, class.chars.len() - 1)]
    }
}
