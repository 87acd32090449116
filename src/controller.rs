//! Game orchestration.
//!
//! `GameController` is the only interface presentation code calls. It owns
//! the [`GameState`], draws symbols through a [`SequenceGenerator`], and
//! returns [`GameEvent`]s for presentation to render and play.
//!
//! ## Event flow
//!
//! ```text
//! start_requested ──> LevelAdvanced(1, [s])
//! player_input ─┬─> PlayerInputAccepted            (correct, level incomplete)
//!               ├─> PlayerInputAccepted + pending   (correct, level complete)
//!               └─> PlayerInputRejected, GameLost   (wrong symbol)
//! advance_level(token) ──> LevelAdvanced(N+1, full sequence)
//! ```
//!
//! ## The advance delay
//!
//! The pause between a completed level and the next extension (nominally
//! one second) belongs to presentation, not to game logic. Completing a
//! level arms a [`PendingAdvance`]; presentation runs its timer for
//! [`GameConfig::advance_delay`] and then calls
//! [`GameController::advance_level`] with the pending token. Tokens carry
//! a generation counter: a token minted before a restart no longer
//! matches and the call is a guarded no-op, so a late timer can never
//! append a symbol to a game the player already abandoned.

use smallvec::SmallVec;

use crate::config::GameConfig;
use crate::core::{GameSnapshot, GameState, MatchResult, RunState, Symbol};
use crate::events::GameEvent;
use crate::generator::{RandomGenerator, SequenceGenerator};

/// Events produced by a single input. At most two (rejected + lost).
pub type EventBatch = SmallVec<[GameEvent; 2]>;

/// Proof that a level advance was scheduled, valid for one game.
///
/// Opaque to callers; compared at fire time against the controller's
/// current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceToken {
    generation: u64,
}

/// Orchestrates the game: start requests, input validation, level advance.
///
/// Generic over the symbol source so tests can inject a scripted
/// generator and assert exact sequences.
///
/// ## Example
///
/// ```
/// use sequence_recall::{GameConfig, GameController, GameEvent};
///
/// let mut controller = GameController::from_config(GameConfig::new(42));
///
/// let event = controller.start_requested().unwrap();
/// let GameEvent::LevelAdvanced { level, sequence_so_far } = event else {
///     panic!("start must advance to level 1");
/// };
/// assert_eq!(level, 1);
/// assert_eq!(sequence_so_far.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameController<G> {
    config: GameConfig,
    state: GameState,
    generator: G,
    /// Bumped on every reset; invalidates outstanding advance tokens.
    generation: u64,
    pending_advance: Option<AdvanceToken>,
}

impl GameController<RandomGenerator> {
    /// Create a controller with a seeded random generator.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        let generator = RandomGenerator::new(config.seed);
        Self::new(config, generator)
    }
}

impl<G: SequenceGenerator> GameController<G> {
    /// Create a controller with an injected symbol source.
    #[must_use]
    pub fn new(config: GameConfig, generator: G) -> Self {
        Self {
            config,
            state: GameState::new(),
            generator,
            generation: 0,
            pending_advance: None,
        }
    }

    /// Handle a start request.
    ///
    /// While a game is in progress ([`RunState::AwaitingInput`]) this is a
    /// no-op and returns `None`: duplicate start signals are ignored.
    /// Otherwise the previous game (if any) is discarded, any pending
    /// advance is invalidated, and level 1 begins with one freshly drawn
    /// symbol. Returns the `LevelAdvanced` event for presentation.
    pub fn start_requested(&mut self) -> Option<GameEvent> {
        if self.state.run_state() == RunState::AwaitingInput {
            tracing::debug!("start requested mid-game, ignoring");
            return None;
        }

        self.generation += 1;
        self.pending_advance = None;
        self.state.reset();

        let symbol = self.generator.next_symbol();
        self.state.start_level(symbol);
        tracing::info!(%symbol, "new game started");

        Some(self.level_advanced_event())
    }

    /// Handle one player symbol.
    ///
    /// A no-op (empty batch) outside active play and during the
    /// advance-delay window, so stray events cannot corrupt state.
    ///
    /// - Wrong symbol: `[PlayerInputRejected, GameLost]`, then the game is
    ///   over and only a new start request is accepted.
    /// - Correct, level incomplete: `[PlayerInputAccepted]`.
    /// - Correct, level complete: `[PlayerInputAccepted]` and a pending
    ///   advance is armed (see [`GameController::pending_advance`]).
    pub fn player_input(&mut self, symbol: Symbol) -> EventBatch {
        if self.state.run_state() != RunState::AwaitingInput {
            tracing::debug!(%symbol, run_state = %self.state.run_state(), "input outside active play, ignoring");
            return EventBatch::new();
        }
        if self.pending_advance.is_some() {
            tracing::debug!(%symbol, "input during advance delay, ignoring");
            return EventBatch::new();
        }

        let mut events = EventBatch::new();
        match self.state.submit(symbol) {
            Ok(MatchResult::Mismatch) => {
                let final_level = self.state.level();
                self.state.set_game_over();
                tracing::info!(%symbol, final_level, "wrong symbol, game over");
                events.push(GameEvent::PlayerInputRejected { symbol });
                events.push(GameEvent::GameLost { final_level });
            }
            Ok(MatchResult::Partial) => {
                tracing::debug!(%symbol, "input accepted");
                events.push(GameEvent::PlayerInputAccepted { symbol });
            }
            Ok(MatchResult::LevelComplete) => {
                let token = AdvanceToken {
                    generation: self.generation,
                };
                self.pending_advance = Some(token);
                tracing::debug!(%symbol, level = self.state.level(), "level complete, advance pending");
                events.push(GameEvent::PlayerInputAccepted { symbol });
            }
            // Unreachable given the guards above; asserted away rather
            // than surfaced.
            Err(err) => {
                debug_assert!(false, "guarded submit failed: {err}");
                tracing::warn!(%symbol, %err, "submit rejected despite guards");
            }
        }
        events
    }

    /// The token for a scheduled level advance, if one is armed.
    ///
    /// Presentation should start its [`GameConfig::advance_delay`] timer
    /// when this becomes `Some` and pass the token to
    /// [`GameController::advance_level`] when the timer fires.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceToken> {
        self.pending_advance
    }

    /// Fire a scheduled level advance.
    ///
    /// Draws the next symbol, starts the next level, and returns the
    /// `LevelAdvanced` event. A stale token (a restart happened since it
    /// was minted, or it already fired) is a guarded no-op returning
    /// `None`.
    pub fn advance_level(&mut self, token: AdvanceToken) -> Option<GameEvent> {
        if self.pending_advance != Some(token) {
            tracing::debug!("stale advance token, ignoring");
            return None;
        }
        self.pending_advance = None;

        let symbol = self.generator.next_symbol();
        self.state.start_level(symbol);
        tracing::info!(%symbol, level = self.state.level(), "level advanced");

        Some(self.level_advanced_event())
    }

    /// Read-only snapshot of the game state for presentation.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.state.level()
    }

    /// Current run state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state.run_state()
    }

    /// This game's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn level_advanced_event(&self) -> GameEvent {
        GameEvent::LevelAdvanced {
            level: self.state.level(),
            sequence_so_far: self.state.machine_sequence().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptedGenerator;

    fn scripted(script: Vec<Symbol>) -> GameController<ScriptedGenerator> {
        GameController::new(GameConfig::new(0), ScriptedGenerator::new(script))
    }

    #[test]
    fn test_start_begins_level_one() {
        let mut controller = scripted(vec![Symbol::Red]);

        let event = controller.start_requested().unwrap();
        assert_eq!(
            event,
            GameEvent::LevelAdvanced {
                level: 1,
                sequence_so_far: im::Vector::unit(Symbol::Red),
            }
        );
        assert_eq!(controller.run_state(), RunState::AwaitingInput);
    }

    #[test]
    fn test_duplicate_start_is_noop() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Blue]);

        controller.start_requested().unwrap();
        let before = controller.snapshot();

        assert_eq!(controller.start_requested(), None);
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_correct_input_completes_level_and_arms_advance() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Blue]);
        controller.start_requested();

        let events = controller.player_input(Symbol::Red);
        assert_eq!(
            events.as_slice(),
            [GameEvent::PlayerInputAccepted { symbol: Symbol::Red }]
        );

        let token = controller.pending_advance().expect("advance must be armed");
        let event = controller.advance_level(token).unwrap();
        assert_eq!(
            event,
            GameEvent::LevelAdvanced {
                level: 2,
                sequence_so_far: im::Vector::from(vec![Symbol::Red, Symbol::Blue]),
            }
        );
        assert!(controller.snapshot().player_buffer.is_empty());
    }

    #[test]
    fn test_mismatch_loses_game() {
        let mut controller = scripted(vec![Symbol::Red]);
        controller.start_requested();

        let events = controller.player_input(Symbol::Green);
        assert_eq!(
            events.as_slice(),
            [
                GameEvent::PlayerInputRejected { symbol: Symbol::Green },
                GameEvent::GameLost { final_level: 1 },
            ]
        );
        assert_eq!(controller.run_state(), RunState::GameOver);
    }

    #[test]
    fn test_input_before_start_is_noop() {
        let mut controller = scripted(vec![Symbol::Red]);

        assert!(controller.player_input(Symbol::Red).is_empty());
        assert_eq!(controller.level(), 0);
        assert_eq!(controller.run_state(), RunState::Idle);
    }

    #[test]
    fn test_input_after_loss_is_noop() {
        let mut controller = scripted(vec![Symbol::Red]);
        controller.start_requested();
        controller.player_input(Symbol::Blue);

        assert!(controller.player_input(Symbol::Red).is_empty());
        assert_eq!(controller.run_state(), RunState::GameOver);
    }

    #[test]
    fn test_input_during_advance_delay_is_noop() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Blue]);
        controller.start_requested();
        controller.player_input(Symbol::Red);

        // Level complete, advance armed. Stray input must not land.
        assert!(controller.player_input(Symbol::Red).is_empty());
        assert_eq!(controller.snapshot().player_buffer.len(), 1);
    }

    #[test]
    fn test_advance_token_fires_once() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Blue]);
        controller.start_requested();
        controller.player_input(Symbol::Red);

        let token = controller.pending_advance().unwrap();
        assert!(controller.advance_level(token).is_some());
        assert_eq!(controller.advance_level(token), None);
        assert_eq!(controller.level(), 2);
    }

    #[test]
    fn test_token_from_previous_game_is_stale() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Blue, Symbol::Green]);

        // Game one: complete level 1 and keep the token after firing it.
        controller.start_requested();
        controller.player_input(Symbol::Red);
        let old_token = controller.pending_advance().unwrap();
        controller.advance_level(old_token).unwrap();

        // Lose game one, restart, complete level 1 of game two.
        controller.player_input(Symbol::Yellow);
        assert_eq!(controller.run_state(), RunState::GameOver);
        controller.start_requested().unwrap();
        controller.player_input(Symbol::Green);
        assert!(controller.pending_advance().is_some());

        // The old game's token must not advance the new game.
        assert_eq!(controller.advance_level(old_token), None);
        assert_eq!(controller.level(), 1);
        assert!(controller.pending_advance().is_some());
    }

    #[test]
    fn test_restart_after_loss_is_fresh() {
        let mut controller = scripted(vec![Symbol::Red, Symbol::Green]);
        controller.start_requested();
        controller.player_input(Symbol::Yellow);
        assert_eq!(controller.run_state(), RunState::GameOver);

        let event = controller.start_requested().unwrap();
        assert_eq!(
            event,
            GameEvent::LevelAdvanced {
                level: 1,
                sequence_so_far: im::Vector::unit(Symbol::Green),
            }
        );
        assert_eq!(controller.level(), 1);
        assert!(controller.snapshot().player_buffer.is_empty());
    }
}
