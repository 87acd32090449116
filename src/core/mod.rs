//! Core game types: symbols, state, RNG.
//!
//! These are the building blocks the controller orchestrates. Nothing in
//! here performs I/O or emits events.

pub mod rng;
pub mod state;
pub mod symbol;

pub use rng::{GameRng, GameRngState};
pub use state::{GameSnapshot, GameState, MatchResult, RunState};
pub use symbol::{Symbol, ALPHABET};
