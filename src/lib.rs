//! # sequence-recall
//!
//! Core state machine for a growing-sequence memory game: the machine
//! extends a random sequence over a fixed 4-symbol alphabet, the player
//! reproduces it from the beginning after each extension, and a single
//! mismatch ends the round.
//!
//! ## Design Principles
//!
//! 1. **Zero I/O**: The core never animates, plays sounds, or runs timers.
//!    Presentation subscribes to [`GameEvent`]s and owns the advance-delay
//!    timer.
//!
//! 2. **No ambient state**: Everything lives in an owned [`GameState`]
//!    behind a [`GameController`], so multiple independent games can
//!    coexist and tests are deterministic.
//!
//! 3. **Injectable randomness**: Symbol draws go through the
//!    [`SequenceGenerator`] trait. Production uses a seeded ChaCha8 RNG;
//!    tests inject scripted sequences.
//!
//! ## Modules
//!
//! - `core`: symbols, game state, deterministic RNG
//! - `generator`: the symbol source trait and its implementations
//! - `controller`: orchestration, input validation, scheduled level advance
//! - `events`: outbound events for the presentation layer
//! - `config`: seed and advance-delay configuration
//! - `error`: the (deliberately tiny) error taxonomy
//!
//! ## Example
//!
//! ```
//! use sequence_recall::{GameConfig, GameController, GameEvent, RunState};
//!
//! let mut game = GameController::from_config(GameConfig::new(42));
//!
//! // A start request begins level 1 with one drawn symbol.
//! let Some(GameEvent::LevelAdvanced { level: 1, sequence_so_far }) =
//!     game.start_requested()
//! else {
//!     panic!("fresh game must start");
//! };
//!
//! // Reproduce the sequence; the events say how it went.
//! let events = game.player_input(sequence_so_far[0]);
//! assert_eq!(
//!     events.as_slice(),
//!     [GameEvent::PlayerInputAccepted { symbol: sequence_so_far[0] }]
//! );
//!
//! // Level complete: presentation waits game.config().advance_delay,
//! // then fires the pending advance.
//! let token = game.pending_advance().unwrap();
//! let Some(GameEvent::LevelAdvanced { level: 2, .. }) = game.advance_level(token)
//! else {
//!     panic!("advance must reach level 2");
//! };
//! assert_eq!(game.run_state(), RunState::AwaitingInput);
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod events;
pub mod generator;

// Re-export commonly used types
pub use crate::config::{GameConfig, DEFAULT_ADVANCE_DELAY};
pub use crate::controller::{AdvanceToken, EventBatch, GameController};
pub use crate::core::{
    GameRng, GameRngState, GameSnapshot, GameState, MatchResult, RunState, Symbol, ALPHABET,
};
pub use crate::error::GameError;
pub use crate::events::GameEvent;
pub use crate::generator::{RandomGenerator, ScriptedGenerator, SequenceGenerator};
