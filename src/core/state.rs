//! Game state: the machine's sequence, the player's buffer, and the
//! level/run-state counters.
//!
//! ## Ownership
//!
//! `GameState` exclusively owns both sequences and the level counter.
//! The controller is the only mutator; presentation code gets read-only
//! [`GameSnapshot`]s. Sequences use `im::Vector`, so a snapshot is a cheap
//! persistent copy rather than a deep clone.
//!
//! ## State machine
//!
//! ```text
//! Idle --start_level--> AwaitingInput
//! AwaitingInput --submit(match, incomplete)--> AwaitingInput
//! AwaitingInput --submit(match, complete)--> AwaitingInput (next start_level appends)
//! AwaitingInput --submit(mismatch)--> GameOver (via set_game_over)
//! GameOver --reset + start_level--> AwaitingInput (fresh)
//! ```
//!
//! Idle and GameOver are the only states from which a new game may begin.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::GameError;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Before the first start, and after a loss once it has been acknowledged.
    Idle,
    /// A level is in progress; the player is reproducing the sequence.
    AwaitingInput,
    /// A mismatch ended the round. Only a fresh start leaves this state.
    GameOver,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunState::Idle => "idle",
            RunState::AwaitingInput => "awaiting-input",
            RunState::GameOver => "game-over",
        };
        f.write_str(s)
    }
}

/// Outcome of a single submitted symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Correct so far, but the level needs more input.
    Partial,
    /// Correct and the whole sequence has been reproduced.
    LevelComplete,
    /// Wrong symbol. The round is over; the caller transitions to GameOver.
    Mismatch,
}

/// The complete core game state.
///
/// Holds the machine-generated sequence, the player's in-progress buffer,
/// the current level, and the run state. All mutation goes through the
/// handful of methods below; there are no public fields.
#[derive(Clone, Debug)]
pub struct GameState {
    machine_sequence: Vector<Symbol>,
    player_buffer: Vector<Symbol>,
    level: u32,
    run_state: RunState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state: no sequence, level 0, [`RunState::Idle`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine_sequence: Vector::new(),
            player_buffer: Vector::new(),
            level: 0,
            run_state: RunState::Idle,
        }
    }

    /// Clear both sequences, set the level to 0, and return to Idle.
    ///
    /// No external side effects; the controller emits events.
    pub fn reset(&mut self) {
        self.machine_sequence.clear();
        self.player_buffer.clear();
        self.level = 0;
        self.run_state = RunState::Idle;
    }

    /// Begin the next level by appending `symbol` to the machine sequence.
    ///
    /// Increments the level, clears the player buffer, and enters
    /// [`RunState::AwaitingInput`].
    pub fn start_level(&mut self, symbol: Symbol) {
        self.machine_sequence.push_back(symbol);
        self.level += 1;
        self.player_buffer.clear();
        self.run_state = RunState::AwaitingInput;

        debug_assert_eq!(self.level as usize, self.machine_sequence.len());
    }

    /// Record one player symbol and compare it at its index.
    ///
    /// Fails with [`GameError::InvalidState`] outside AwaitingInput, and
    /// with [`GameError::AdvancePending`] when the buffer already holds a
    /// full correct level (the window before the next level starts).
    ///
    /// On [`MatchResult::Mismatch`] the caller must follow up with
    /// [`GameState::set_game_over`].
    pub fn submit(&mut self, symbol: Symbol) -> Result<MatchResult, GameError> {
        if self.run_state != RunState::AwaitingInput {
            return Err(GameError::InvalidState(self.run_state));
        }
        if self.player_buffer.len() >= self.machine_sequence.len() {
            return Err(GameError::AdvancePending);
        }

        self.player_buffer.push_back(symbol);
        let index = self.player_buffer.len() - 1;

        if self.machine_sequence[index] != symbol {
            return Ok(MatchResult::Mismatch);
        }

        if self.player_buffer.len() == self.machine_sequence.len() {
            Ok(MatchResult::LevelComplete)
        } else {
            Ok(MatchResult::Partial)
        }
    }

    /// Transition to [`RunState::GameOver`] after a mismatch.
    pub fn set_game_over(&mut self) {
        self.run_state = RunState::GameOver;
    }

    /// Current level. Equals the machine sequence length.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current run state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// The machine-generated sequence so far.
    #[must_use]
    pub fn machine_sequence(&self) -> &Vector<Symbol> {
        &self.machine_sequence
    }

    /// The player's submissions for the current level.
    #[must_use]
    pub fn player_buffer(&self) -> &Vector<Symbol> {
        &self.player_buffer
    }

    /// Whether the current level has been fully (and correctly) reproduced
    /// and the game is waiting for the next level to start.
    #[must_use]
    pub fn level_filled(&self) -> bool {
        self.run_state == RunState::AwaitingInput
            && !self.machine_sequence.is_empty()
            && self.player_buffer.len() == self.machine_sequence.len()
    }

    /// Read-only snapshot for presentation code.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level,
            run_state: self.run_state,
            machine_sequence: self.machine_sequence.clone(),
            player_buffer: self.player_buffer.clone(),
        }
    }
}

/// Read-only view of the game state.
///
/// Persistent-structure clones make this cheap to hand out every frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current level (machine sequence length).
    pub level: u32,
    /// Current run state.
    pub run_state: RunState,
    /// The machine's full sequence so far.
    pub machine_sequence: Vector<Symbol>,
    /// The player's submissions for the current level.
    pub player_buffer: Vector<Symbol>,
}
