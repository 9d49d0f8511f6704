//! Deterministic random number generation for board population and refill.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical board and refill sequence
//! - **Injectable**: Passed explicitly to every call that needs randomness
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use soul_board::core::OrbRng;
//!
//! let mut rng1 = OrbRng::new(42);
//! let mut rng2 = OrbRng::new(42);
//!
//! assert_eq!(rng1.choose(&[1, 2, 3]), rng2.choose(&[1, 2, 3]));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable RNG used by board creation and the refill pass.
///
/// Uses ChaCha8, whose output stream is fixed by the seed on every platform.
#[derive(Clone, Debug)]
pub struct OrbRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl OrbRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from an optional seed, drawing one from entropy if absent.
    ///
    /// The drawn seed is kept so the run can be replayed via [`OrbRng::seed`].
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> OrbRngState {
        OrbRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &OrbRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
