//! The save document schema and its validator.
//!
//! ```json
//! {
//!   "board": ["X", "", "", "", "O", "", "", "", ""],
//!   "current_player": "X",
//!   "game_over": false,
//!   "winner": null,
//!   "moves_count": 2
//! }
//! ```
//!
//! `board` is required. The other fields default to fresh-game values when
//! absent. Empty cells are written as `""`; `" "` is also accepted on load.
//!
//! Defaults are applied before validation, so a board with marks but no
//! `moves_count` is rejected: the default of 0 disagrees with the board.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameState, Mark, CELL_COUNT};
use crate::error::{FormatError, Result};
use crate::rules::{evaluate, Outcome};

fn default_current_player() -> String {
    Mark::X.to_string()
}

/// Loosely-typed save document, exactly as stored.
///
/// Converting to a [`GameState`] goes through [`StateDocument::to_state`],
/// which rejects anything that is not a well-formed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDocument {
    pub board: Vec<String>,
    #[serde(default = "default_current_player")]
    pub current_player: String,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub moves_count: u32,
}

impl StateDocument {
    /// Describe a state as a document.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: state
                .board()
                .cells()
                .iter()
                .map(|cell| cell.map(|mark| mark.to_string()).unwrap_or_default())
                .collect(),
            current_player: state.current_player().to_string(),
            game_over: state.is_game_over(),
            winner: state.winner().map(|outcome| outcome.to_string()),
            moves_count: u32::from(state.moves_count()),
        }
    }

    /// Validate the document and build the state it describes.
    pub fn to_state(&self) -> Result<GameState> {
        if self.board.len() != CELL_COUNT {
            return Err(FormatError::BoardLength {
                found: self.board.len(),
            });
        }

        let mut cells = [None; CELL_COUNT];
        for (index, (cell, value)) in cells.iter_mut().zip(&self.board).enumerate() {
            *cell = parse_cell(value).ok_or_else(|| FormatError::InvalidCell {
                index,
                value: value.clone(),
            })?;
        }

        let current_player = self
            .current_player
            .parse::<Mark>()
            .map_err(|_| FormatError::InvalidPlayer(self.current_player.clone()))?;

        let winner = match &self.winner {
            Some(value) => Some(
                value
                    .parse::<Outcome>()
                    .map_err(|_| FormatError::InvalidWinner(value.clone()))?,
            ),
            None => None,
        };

        if self.game_over != winner.is_some() {
            return Err(FormatError::TerminalMismatch {
                game_over: self.game_over,
                winner: self.winner.clone(),
            });
        }

        let moves_count = u8::try_from(self.moves_count)
            .ok()
            .filter(|&n| usize::from(n) <= CELL_COUNT)
            .ok_or(FormatError::MovesOutOfRange(self.moves_count))?;

        let board = Board::from_cells(cells);
        let occupied = board.occupied_count();
        if usize::from(moves_count) != occupied {
            return Err(FormatError::MovesMismatch {
                declared: self.moves_count,
                occupied,
            });
        }

        // A finished game must record the outcome its board actually shows.
        if let Some(declared) = winner {
            let actual = evaluate(&board, occupied);
            if actual != Some(declared) {
                return Err(FormatError::OutcomeMismatch {
                    declared: declared.to_string(),
                    actual: actual.map(|outcome| outcome.to_string()),
                });
            }
        }

        Ok(GameState::from_parts(
            board,
            current_player,
            self.game_over,
            winner,
            moves_count,
        ))
    }

    /// Parse JSON text. Shape only; call [`StateDocument::to_state`] to validate.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `Some(None)` for an empty cell, `Some(Some(mark))` for a mark,
/// `None` for anything else.
fn parse_cell(value: &str) -> Option<Option<Mark>> {
    match value {
        "" | " " => Some(None),
        _ => value.parse::<Mark>().ok().map(Some),
    }
}
