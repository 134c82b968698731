//! Deterministic random number generation for board fills.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and refills
//! - **Injected**: Construction and cascade refill take the RNG explicitly,
//!   never ambient global state
//! - **Serializable**: O(1) state capture and restore for undo snapshots
//!
//! ## Usage
//!
//! ```
//! use gemgrid::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let picked = rng.choose(&[1, 2, 3]);
//! assert!(picked.is_some());
//!
//! // Same seed, same sequence
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.choose(&[1, 2, 3]), picked);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for color draws.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// State capture is constant-size regardless of how many draws have happened,
/// so session snapshots can restore the exact random stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
