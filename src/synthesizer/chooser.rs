// ABOUTME: Injectable random-choice capability for recipe name selection
// ABOUTME: Thread-random, seeded, and fixed implementations of NameChooser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Picks one of `len` candidates
///
/// Implementations must return an index below `len` whenever `len > 0`.
pub trait NameChooser: Send + Sync {
    /// Index of the chosen candidate
    fn choose(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChooser;

impl NameChooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible uniform choice from a seeded RNG
#[derive(Debug)]
pub struct SeededChooser {
    rng: Mutex<StdRng>,
}

impl SeededChooser {
    /// Chooser whose sequence is fixed by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NameChooser for SeededChooser {
    fn choose(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // A poisoned lock still holds a usable RNG.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Always the same candidate, clamped to the last one
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser(pub usize);

impl NameChooser for FixedChooser {
    fn choose(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_chooser_clamps() {
        assert_eq!(FixedChooser(2).choose(4), 2);
        assert_eq!(FixedChooser(9).choose(4), 3);
        assert_eq!(FixedChooser(9).choose(0), 0);
    }

    #[test]
    fn test_random_chooser_stays_in_range() {
        let chooser = RandomChooser;
        for _ in 0..200 {
            assert!(chooser.choose(4) < 4);
        }
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let first = SeededChooser::new(42);
        let second = SeededChooser::new(42);
        let a: Vec<usize> = (0..16).map(|_| first.choose(4)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.choose(4)).collect();
        assert_eq!(a, b);
    }
}
