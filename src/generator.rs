//! Symbol generation.
//!
//! The controller never touches a random source directly; it draws through
//! the [`SequenceGenerator`] trait. Production code uses
//! [`RandomGenerator`]; tests inject [`ScriptedGenerator`] to pin down the
//! exact machine sequence.

use crate::core::{GameRng, Symbol, ALPHABET};

/// Source of the machine's next symbol.
///
/// Implementations hold no game state; the controller owns the sequence.
pub trait SequenceGenerator {
    /// Produce the next symbol to append to the machine sequence.
    fn next_symbol(&mut self) -> Symbol;
}

/// Uniform random draws over the fixed alphabet.
///
/// Each symbol has probability 1/4, independent of prior calls. Backed by
/// the deterministic [`GameRng`], so a seed reproduces a whole game.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: GameRng,
}

impl RandomGenerator {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator from an existing RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl SequenceGenerator for RandomGenerator {
    fn next_symbol(&mut self) -> Symbol {
        ALPHABET[self.rng.gen_index(ALPHABET.len())]
    }
}

/// Replays a fixed script of symbols, cycling when exhausted.
///
/// Deterministic injection point for tests and replays.
#[derive(Clone, Debug)]
pub struct ScriptedGenerator {
    script: Vec<Symbol>,
    position: usize,
}

impl ScriptedGenerator {
    /// Create a generator that yields `script` in order, then repeats.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    #[must_use]
    pub fn new(script: Vec<Symbol>) -> Self {
        assert!(!script.is_empty(), "script must be non-empty");
        Self {
            script,
            position: 0,
        }
    }
}

impl SequenceGenerator for ScriptedGenerator {
    fn next_symbol(&mut self) -> Symbol {
        let symbol = self.script[self.position % self.script.len()];
        self.position += 1;
        symbol
    }
}
