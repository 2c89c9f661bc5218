//! Random number generation for encounter resolution
//!
//! Uses a seeded ChaCha RNG so a resolution can be replayed exactly from its
//! seed (save/restore, audit).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Encounter random number generator
///
/// Wraps ChaCha8Rng for reproducible draws.
/// Note: RNG state is not serialized - only the seed is, so a restored RNG
/// restarts its stream from the beginning.
#[derive(Debug, Clone)]
pub struct EncounterRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for EncounterRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EncounterRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(EncounterRng::new(seed))
    }
}

impl EncounterRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The base encounter roll - uniform in [1, 100]
    pub fn d100(&mut self) -> u32 {
        self.rng.gen_range(1..=100)
    }

    /// Uniform value in [lo, hi]
    ///
    /// Returns `lo` if the range is empty or inverted.
    pub fn between(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: u32) -> bool {
        if n == 0 {
            return false;
        }
        self.rng.gen_range(0..n) == 0
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rng.gen_range(0..100) < percent
    }

    /// Choose a random element from a slice, uniformly
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let i = self.rng.gen_range(0..items.len());
            Some(&items[i])
        }
    }

    /// Choose an element by cumulative-weight roulette.
    ///
    /// Zero-weight entries are never selected. Returns None if the slice is
    /// empty or every weight is zero.
    pub fn weighted<'a, T>(&mut self, items: &'a [T], weight: impl Fn(&T) -> u32) -> Option<&'a T> {
        let total: u64 = items.iter().map(|it| weight(it) as u64).sum();
        if total == 0 {
            return None;
        }
        let mut remaining = self.rng.gen_range(0..total) as i64;
        for item in items {
            remaining -= weight(item) as i64;
            if remaining < 0 {
                return Some(item);
            }
        }
        // Unreachable while weights are consistent with total
        items.last()
    }
}

impl Default for EncounterRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
