//! The game engine: move validation, move application and terminal detection.
//!
//! Applying a move and flagging the game as over are separate steps.
//! `apply_move` only places a mark; `update_terminal_state` re-evaluates
//! the board and records the outcome. A caller can therefore inspect a
//! winning board before the game is marked finished.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::{Board, EngineConfig, GameRng, GameState, Mark, CELL_COUNT};
use crate::error::FormatError;
use crate::persist::StateDocument;
use crate::policy::{GreedyOpponent, OpponentPolicy};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Board full, no three in a row.
    Draw,
}

impl Outcome {
    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, Outcome::Winner(m) if *m == mark)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{mark}"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Error returned when a string is not `"X"`, `"O"` or `"Draw"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown outcome {0:?}")]
pub struct ParseOutcomeError(pub String);

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Draw" {
            return Ok(Outcome::Draw);
        }
        s.parse::<Mark>()
            .map(Outcome::Winner)
            .map_err(|_| ParseOutcomeError(s.to_string()))
    }
}

/// Evaluate a board position.
///
/// Returns the first uniformly filled triple's mark, else `Draw` when
/// `moves_count` has reached nine, else `None`.
#[must_use]
pub fn evaluate(board: &Board, moves_count: usize) -> Option<Outcome> {
    if let Some(mark) = board.winning_mark() {
        return Some(Outcome::Winner(mark));
    }
    if moves_count == CELL_COUNT {
        return Some(Outcome::Draw);
    }
    None
}

/// Read-only summary for reporting collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub moves_made: u8,
    pub game_over: bool,
    pub winner: Option<Outcome>,
    pub board: Board,
}

/// Tic-tac-toe engine owning a single [`GameState`].
///
/// ## Example
///
/// ```
/// use oxo_engine::core::Mark;
/// use oxo_engine::rules::{GameEngine, Outcome};
///
/// let mut engine = GameEngine::default();
/// for (pos, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)] {
///     assert!(engine.apply_move(pos, mark));
/// }
///
/// // The winning line is visible before the game is flagged.
/// assert_eq!(engine.check_winner(), Some(Outcome::Winner(Mark::X)));
/// assert!(!engine.is_game_over());
///
/// engine.update_terminal_state();
/// assert!(engine.is_game_over());
/// assert_eq!(engine.winner(), Some(Outcome::Winner(Mark::X)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
}

impl GameEngine {
    /// Create an engine with a fresh game.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    /// Create an engine around an existing state.
    #[must_use]
    pub fn from_state(config: EngineConfig, state: GameState) -> Self {
        Self { config, state }
    }

    /// Discard the current game and start a fresh one.
    pub fn reset_new_game(&mut self) {
        self.state = GameState::new();
        tracing::debug!("new game started");
    }

    // === Queries ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board contents.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Mark due to move.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.state.current_player
    }

    /// Whether the game has been flagged as finished.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Recorded outcome, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        self.state.winner
    }

    /// Number of marks placed.
    #[must_use]
    pub fn moves_count(&self) -> u8 {
        self.state.moves_count
    }

    /// Summary snapshot with a copy of the board.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            moves_made: self.state.moves_count,
            game_over: self.state.game_over,
            winner: self.state.winner,
            board: self.state.board,
        }
    }

    // === Moves ===

    /// Whether `position` is on the board and empty.
    #[must_use]
    pub fn is_valid_move(&self, position: usize) -> bool {
        self.state.board.is_open(position)
    }

    /// Place `player`'s mark at `position`.
    ///
    /// Returns `false` and leaves the state untouched if the position is
    /// out of range or occupied, or if the game is already over. Does not
    /// update terminal state.
    pub fn apply_move(&mut self, position: usize, player: Mark) -> bool {
        if self.state.game_over {
            tracing::debug!(position, %player, "move rejected: game is over");
            return false;
        }
        if !self.is_valid_move(position) {
            tracing::debug!(position, %player, "move rejected: cell unavailable");
            return false;
        }

        self.state.board.set(position, player);
        self.state.moves_count += 1;
        tracing::debug!(position, %player, moves = self.state.moves_count, "move applied");
        true
    }

    /// Hand the move to the other mark.
    pub fn advance_turn(&mut self) {
        self.state.current_player = self.state.current_player.opponent();
    }

    // === Terminal Detection ===

    /// Evaluate the current board without changing anything.
    #[must_use]
    pub fn check_winner(&self) -> Option<Outcome> {
        evaluate(&self.state.board, self.state.moves_count as usize)
    }

    /// Flag the game as over if the board is terminal.
    ///
    /// Calling it again after the game is over re-derives the same outcome.
    pub fn update_terminal_state(&mut self) {
        if let Some(outcome) = self.check_winner() {
            if !self.state.game_over {
                tracing::debug!(%outcome, "game over");
            }
            self.state.game_over = true;
            self.state.winner = Some(outcome);
        }
    }

    // === Opponent ===

    /// Choose the opponent's next move with the greedy win/block/random policy.
    ///
    /// Returns `None` when the board has no empty cell; callers treat that
    /// as a drawn position and must not apply it.
    #[must_use]
    pub fn select_opponent_move(&self, rng: &mut GameRng) -> Option<usize> {
        self.select_move_with(&GreedyOpponent, rng)
    }

    /// Choose the opponent's next move with a custom policy.
    #[must_use]
    pub fn select_move_with<P: OpponentPolicy>(&self, policy: &P, rng: &mut GameRng) -> Option<usize> {
        let choice = policy.choose_move(&self.state.board, self.config.opponent, rng);
        tracing::debug!(?choice, opponent = %self.config.opponent, "opponent move selected");
        choice
    }

    // === Persistence ===

    /// Export the state as a save document.
    #[must_use]
    pub fn serialize_state(&self) -> StateDocument {
        StateDocument::from_state(&self.state)
    }

    /// Replace the state with a validated save document.
    ///
    /// All-or-nothing: on error the current state is left unchanged.
    pub fn deserialize_state(&mut self, doc: &StateDocument) -> Result<(), FormatError> {
        match doc.to_state() {
            Ok(state) => {
                self.state = state;
                tracing::debug!(moves = state.moves_count, "state loaded");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected state document");
                Err(err)
            }
        }
    }

    /// Export the state as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FormatError> {
        self.serialize_state().to_json()
    }

    /// Replace the state from JSON text. All-or-nothing.
    pub fn load_json(&mut self, json: &str) -> Result<(), FormatError> {
        let doc = StateDocument::from_json(json).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected state document");
        })?;
        self.deserialize_state(&doc)
    }
}
