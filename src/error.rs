//! Error taxonomy.
//!
//! Deliberately tiny. A wrong symbol is not an error — it is the game's
//! defined terminal outcome and comes back as
//! [`MatchResult::Mismatch`](crate::core::MatchResult::Mismatch). What is
//! left are contract violations the controller guards against, so a
//! well-formed caller never observes them.

use crate::core::RunState;

/// Errors from [`GameState::submit`](crate::core::GameState::submit).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Input delivered while the game is not awaiting input.
    #[error("input submitted while not awaiting input (run state: {0})")]
    InvalidState(RunState),

    /// Input delivered after the current level was fully reproduced but
    /// before the next level started (the advance-delay window).
    #[error("input submitted while a level advance is pending")]
    AdvancePending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidState(RunState::Idle);
        assert_eq!(
            err.to_string(),
            "input submitted while not awaiting input (run state: idle)"
        );

        assert_eq!(
            GameError::AdvancePending.to_string(),
            "input submitted while a level advance is pending"
        );
    }
}
