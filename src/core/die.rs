//! Deterministic dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same roll sequence
//! - **Injectable**: The engine takes any [`Die`] implementation, so tests
//!   can script exact rolls
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::{Die, SixSidedDie};
//!
//! let mut die = SixSidedDie::new(42);
//! let roll = die.roll();
//! assert!((1..=6).contains(&roll));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the standard die.
pub const DIE_SIDES: u8 = 6;

/// A source of die rolls.
///
/// `roll` returns a value uniformly distributed over `{1, ..., 6}`.
/// No failure modes; the only side effect is consuming entropy from
/// the implementation's own state.
pub trait Die {
    /// Roll the die once.
    fn roll(&mut self) -> u8;
}

/// Standard six-sided die backed by a seeded ChaCha8 RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Seeded construction makes whole games replayable.
#[derive(Clone, Debug)]
pub struct SixSidedDie {
    inner: ChaCha8Rng,
}

impl SixSidedDie {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a die seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Die for SixSidedDie {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_SIDES)
    }
}

/// A die that replays a fixed sequence of rolls.
///
/// Intended for tests that need exact movement, e.g. forcing a token
/// onto a ladder entry square. Panics if rolled after the script runs
/// out, so a test that consumes more turns than scripted fails loudly.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    rolls: std::collections::VecDeque<u8>,
}

impl ScriptedDie {
    /// Create a die from the given roll sequence.
    pub fn new<I: IntoIterator<Item = u8>>(rolls: I) -> Self {
        let rolls: std::collections::VecDeque<u8> = rolls.into_iter().collect();
        assert!(
            rolls.iter().all(|r| (1..=DIE_SIDES).contains(r)),
            "Scripted rolls must be in 1..=6"
        );
        Self { rolls }
    }

    /// Number of rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.rolls
            .pop_front()
            .expect("ScriptedDie ran out of rolls")
    }
}
