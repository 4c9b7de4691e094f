//! Error types for loading saved games.
//!
//! Move rejections are not errors: `GameEngine::apply_move` reports them
//! with `false` and `select_opponent_move` with `None`. The only failing
//! operation is accepting an external state document.

use thiserror::Error;

/// A save document that cannot become a valid `GameState`.
///
/// File-level problems (missing file, unreadable file) belong to whoever
/// does the I/O and never appear here.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid board size: expected 9 cells, found {found}")]
    BoardLength { found: usize },

    #[error("invalid cell {index}: {value:?}")]
    InvalidCell { index: usize, value: String },

    #[error("invalid current player: {0:?}")]
    InvalidPlayer(String),

    #[error("invalid winner: {0:?}")]
    InvalidWinner(String),

    #[error("moves count {0} out of range 0..=9")]
    MovesOutOfRange(u32),

    #[error("moves count {declared} does not match {occupied} occupied cells")]
    MovesMismatch { declared: u32, occupied: usize },

    #[error("recorded winner {declared:?} but the board shows {actual:?}")]
    OutcomeMismatch {
        declared: String,
        actual: Option<String>,
    },

    #[error("game_over is {game_over} but winner is {winner:?}")]
    TerminalMismatch {
        game_over: bool,
        winner: Option<String>,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
