//! The fixed symbol alphabet.
//!
//! The game draws from exactly four symbols. The alphabet is fixed for the
//! process lifetime: there is no configuration hook to grow or shrink it,
//! and the rest of the crate relies on that (uniform draws are 1-in-4,
//! snapshots serialize symbols by name).

use serde::{Deserialize, Serialize};

/// One selectable option in the game.
///
/// Symbols are colors, matching the four buttons of the original game.
/// The ordering here is the canonical alphabet ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Red,
    Blue,
    Green,
    Yellow,
}

/// The full alphabet, in canonical order.
///
/// ```
/// use sequence_recall::core::{Symbol, ALPHABET};
///
/// assert_eq!(ALPHABET.len(), 4);
/// assert_eq!(ALPHABET[0], Symbol::Red);
/// ```
pub const ALPHABET: [Symbol; 4] = [Symbol::Red, Symbol::Blue, Symbol::Green, Symbol::Yellow];

impl Symbol {
    /// Get the symbol's index within [`ALPHABET`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Symbol::Red => 0,
            Symbol::Blue => 1,
            Symbol::Green => 2,
            Symbol::Yellow => 3,
        }
    }

    /// Look up a symbol by alphabet index.
    ///
    /// Returns `None` if `index` is out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        ALPHABET.get(index).copied()
    }

    /// Lowercase name, matching the original game's button identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Blue => "blue",
            Symbol::Green => "green",
            Symbol::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
