//! Injected randomness for tie-breaks.
//!
//! The engine never reaches for global random state. Callers hand in a
//! [`ChoiceSource`]; [`SeededRng`] is the stock implementation, deterministic
//! for a given seed.
//!
//! ```
//! use strictly_minimax::{ChoiceSource, SeededRng};
//!
//! let mut a = SeededRng::new(7);
//! let mut b = SeededRng::new(7);
//! assert_eq!(a.pick(5), b.pick(5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Uniform choice over a finite set of `len` options.
pub trait ChoiceSource {
    /// Returns an index in `0..len`, each equally likely.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<C: ChoiceSource + ?Sized> ChoiceSource for &mut C {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Deterministic RNG seeded from a `u64`.
///
/// Uses ChaCha8: fast, and the same seed replays the same games.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SeededRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is logged and available through [`SeededRng::seed`] so a run
    /// can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        debug!(seed, "Seeded tie-break RNG from entropy");
        Self::new(seed)
    }

    /// The seed this RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream (one per game, for example).
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.pick(slice.len());
        slice.get(index)
    }
}

impl ChoiceSource for SeededRng {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
