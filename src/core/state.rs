//! Game state.
//!
//! ## GameState
//!
//! The five fields that fully describe a game in progress:
//! - Board contents
//! - Mark due to move
//! - Terminal flag and outcome
//! - Move counter
//!
//! Fields are crate-private. `GameEngine` is the only mutator, which keeps
//! `moves_count` in step with the board and `winner` in step with `game_over`.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Mark;
use crate::rules::Outcome;

/// Complete state of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Outcome>,
    pub(crate) moves_count: u8,
}

impl GameState {
    /// Create a fresh game state.
    ///
    /// ## Defaults
    ///
    /// - `board`: all empty
    /// - `current_player`: `X`
    /// - `game_over`: false, `winner`: none
    /// - `moves_count`: 0
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            game_over: false,
            winner: None,
            moves_count: 0,
        }
    }

    /// Create an in-progress state around an existing board position.
    ///
    /// `moves_count` is derived from the occupied cells, `X` is to move and
    /// terminality is left for `GameEngine::update_terminal_state`.
    ///
    /// ```
    /// use oxo_engine::core::{Board, GameState};
    ///
    /// let board: Board = "XO./.X./...".parse().unwrap();
    /// let state = GameState::with_board(board);
    /// assert_eq!(state.moves_count(), 3);
    /// assert!(!state.is_game_over());
    /// ```
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            moves_count: board.occupied_count() as u8,
            ..Self::new()
        }
    }

    /// Assemble a state from already-validated parts.
    pub(crate) const fn from_parts(
        board: Board,
        current_player: Mark,
        game_over: bool,
        winner: Option<Outcome>,
        moves_count: u8,
    ) -> Self {
        Self {
            board,
            current_player,
            game_over,
            winner,
            moves_count,
        }
    }

    /// Board contents.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Mark due to move.
    #[must_use]
    pub const fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Whether the game has been flagged as finished.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Recorded outcome; set exactly when the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Number of marks placed.
    #[must_use]
    pub const fn moves_count(&self) -> u8 {
        self.moves_count
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
