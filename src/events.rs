//! Outbound game events.
//!
//! The core has zero I/O: everything presentation needs to show — button
//! flashes, sounds, the level title, the game-over flash — is derivable
//! from these events. Handlers on [`GameController`](crate::GameController)
//! return them; nothing is buffered inside the core.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Symbol;

/// Something the presentation layer should render or play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The machine extended its sequence and a new level began.
    ///
    /// `sequence_so_far` is the full machine sequence; presentation may
    /// replay all of it or only the newest symbol (the original game
    /// animates only the newest).
    LevelAdvanced {
        /// The new level number (1-based).
        level: u32,
        /// The complete machine sequence, newest symbol last.
        sequence_so_far: Vector<Symbol>,
    },

    /// The player pressed a correct symbol. Immediate per-press feedback.
    PlayerInputAccepted {
        /// The symbol the player submitted.
        symbol: Symbol,
    },

    /// The player pressed a wrong symbol. Immediate per-press feedback;
    /// always followed by [`GameEvent::GameLost`].
    PlayerInputRejected {
        /// The symbol the player submitted.
        symbol: Symbol,
    },

    /// The round ended on a mismatch.
    GameLost {
        /// The level the player was attempting when they lost.
        final_level: u32,
    },
}

impl GameEvent {
    /// Check whether this event ends the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameLost { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(GameEvent::GameLost { final_level: 3 }.is_terminal());
        assert!(!GameEvent::PlayerInputAccepted { symbol: Symbol::Red }.is_terminal());
        assert!(!GameEvent::LevelAdvanced {
            level: 1,
            sequence_so_far: Vector::unit(Symbol::Blue),
        }
        .is_terminal());
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = GameEvent::LevelAdvanced {
            level: 2,
            sequence_so_far: Vector::from(vec![Symbol::Red, Symbol::Green]),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, back);
    }
}
