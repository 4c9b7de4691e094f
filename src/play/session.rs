//! Turn sequencing for a human-vs-opponent game.
//!
//! ```text
//! ┌────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │ play_human(p)  │ ─► │ update_terminal  │ ─► │ advance_turn     │
//! └────────────────┘    └──────────────────┘    └──────────────────┘
//!          ▲                                             │
//!          │            ┌──────────────────┐             ▼
//!          └─────────── │ play_opponent()  │ ◄──── (not over)
//!                       └──────────────────┘
//! ```
//!
//! The session does no I/O. Input surfaces feed it positions, renderers
//! read `engine()`, and persistence goes through `snapshot`/`load`.

use crate::core::{EngineConfig, GameRng, GameRngState, Mark};
use crate::error::FormatError;
use crate::persist::StateDocument;
use crate::policy::{GreedyOpponent, OpponentPolicy};
use crate::rules::{GameEngine, Outcome};

/// Result of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move applied, game continues. Holds the cell played.
    Continue(usize),
    /// Move applied (or no move was possible) and the game is over.
    Finished(Outcome),
    /// Nothing changed: wrong turn, invalid cell, or game already over.
    Rejected,
}

/// A game between a human side and an automated opponent.
pub struct GameSession<P: OpponentPolicy = GreedyOpponent> {
    engine: GameEngine,
    policy: P,
    rng: GameRng,
}

impl GameSession<GreedyOpponent> {
    /// Create a session with the greedy opponent.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, GreedyOpponent)
    }
}

impl Default for GameSession<GreedyOpponent> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<P: OpponentPolicy> GameSession<P> {
    /// Create a session with a custom opponent policy.
    pub fn with_policy(config: EngineConfig, policy: P) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            engine: GameEngine::new(config),
            policy,
            rng,
        }
    }

    /// The underlying engine, for queries.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The underlying engine, for callers that sequence moves themselves.
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// Mark played by the human side.
    #[must_use]
    pub fn human(&self) -> Mark {
        self.engine.config().human()
    }

    /// Mark played by the opponent.
    #[must_use]
    pub fn opponent(&self) -> Mark {
        self.engine.config().opponent
    }

    /// Whether the human side is due to move.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.engine.is_game_over() && self.engine.current_player() == self.human()
    }

    /// Start over. The RNG keeps its position.
    pub fn new_game(&mut self) {
        self.engine.reset_new_game();
    }

    /// Play the human's move.
    pub fn play_human(&mut self, position: usize) -> TurnOutcome {
        if !self.is_human_turn() {
            tracing::debug!(position, "human move out of turn");
            return TurnOutcome::Rejected;
        }
        let mark = self.human();
        self.play(position, mark)
    }

    /// Let the opponent choose and play its move.
    ///
    /// With no empty cell left the position is re-evaluated and reported as
    /// finished instead of applying anything.
    pub fn play_opponent(&mut self) -> TurnOutcome {
        let mark = self.opponent();
        if self.engine.is_game_over() || self.engine.current_player() != mark {
            return TurnOutcome::Rejected;
        }

        match self.select_opponent_move() {
            Some(position) => self.play(position, mark),
            None => {
                self.engine.update_terminal_state();
                self.engine.winner().map_or(TurnOutcome::Rejected, TurnOutcome::Finished)
            }
        }
    }

    /// Ask the policy for the opponent's move without applying it.
    pub fn select_opponent_move(&mut self) -> Option<usize> {
        self.engine.select_move_with(&self.policy, &mut self.rng)
    }

    fn play(&mut self, position: usize, mark: Mark) -> TurnOutcome {
        if !self.engine.apply_move(position, mark) {
            return TurnOutcome::Rejected;
        }
        self.engine.update_terminal_state();
        self.engine.advance_turn();

        match self.engine.winner() {
            Some(outcome) => TurnOutcome::Finished(outcome),
            None => TurnOutcome::Continue(position),
        }
    }

    // === Persistence ===

    /// Export the game as a save document.
    #[must_use]
    pub fn snapshot(&self) -> StateDocument {
        self.engine.serialize_state()
    }

    /// Replace the game with a save document. All-or-nothing.
    pub fn load(&mut self, doc: &StateDocument) -> Result<(), FormatError> {
        self.engine.deserialize_state(doc)
    }

    /// Export the game as JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        self.engine.to_json()
    }

    /// Replace the game from JSON text. All-or-nothing.
    pub fn load_json(&mut self, json: &str) -> Result<(), FormatError> {
        self.engine.load_json(json)
    }

    /// RNG position, so a restored session repeats the same fallback moves.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue from a saved RNG position.
    pub fn resume_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}
