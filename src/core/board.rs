//! The 3×3 board.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`, so speculative moves are evaluated on a copy with
//! [`Board::with_mark`] and never leak into the caller's board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;
use thiserror::Error;

use super::player::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning index triples, in evaluation order:
/// rows, then columns, then diagonals.
pub const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Indices of empty cells. Never more than nine, so it stays on the stack.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// A 3×3 board of optional marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from explicit cells.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Mark at `index`, or `None` if the cell is empty or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether `index` is on the board and empty.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Place a mark. Callers check [`Board::is_open`] first.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Return a copy with `mark` placed at `index`.
    ///
    /// `self` is untouched. Out-of-range indices return an unchanged copy.
    ///
    /// ```
    /// use oxo_engine::core::{Board, Mark};
    ///
    /// let board = Board::new();
    /// let probe = board.with_mark(4, Mark::X);
    /// assert_eq!(probe.get(4), Some(Mark::X));
    /// assert_eq!(board.get(4), None);
    /// ```
    #[must_use]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(mark);
        }
        self
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Mark owning the first uniformly filled triple, in [`TRIPLES`] order.
    #[must_use]
    pub fn winning_mark(&self) -> Option<Mark> {
        TRIPLES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => {
                Some(mark)
            }
            _ => None,
        })
    }
}

impl std::fmt::Display for Board {
    /// Compact single-line form, rows separated by `/`, empty cells as `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            match cell {
                Some(mark) => write!(f, "{mark}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Errors from parsing a board layout string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board layout must have 9 cells, found {0}")]
    Length(usize),

    #[error("unexpected character {found:?} at cell {index}")]
    Character { index: usize, found: char },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a 9-cell layout: `X`, `O`, or one of ` `, `.`, `-` for empty.
    /// `/` separators are ignored, so the [`Display`](std::fmt::Display)
    /// form parses back.
    ///
    /// ```
    /// use oxo_engine::core::{Board, Mark};
    ///
    /// let board: Board = "XX./.O./...".parse().unwrap();
    /// assert_eq!(board.get(0), Some(Mark::X));
    /// assert_eq!(board.get(4), Some(Mark::O));
    /// assert_eq!(board.occupied_count(), 3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|&c| c != '/').collect();
        if symbols.len() != CELL_COUNT {
            return Err(ParseBoardError::Length(symbols.len()));
        }

        let mut board = Board::new();
        for (index, &c) in symbols.iter().enumerate() {
            match c {
                ' ' | '.' | '-' => {}
                _ => match Mark::from_char(c) {
                    Some(mark) => board.set(index, mark),
                    None => return Err(ParseBoardError::Character { index, found: c }),
                },
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new();
        assert_eq!(b.occupied_count(), 0);
        assert_eq!(b.empty_cells().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(b.winning_mark(), None);
    }

    #[test]
    fn test_is_open_bounds() {
        let b = board("X........");
        assert!(!b.is_open(0));
        assert!(b.is_open(1));
        assert!(b.is_open(8));
        assert!(!b.is_open(9));
        assert!(!b.is_open(usize::MAX));
    }

    #[test]
    fn test_get_out_of_range() {
        let b = board("XXXXXXXXX");
        assert_eq!(b.get(8), Some(Mark::X));
        assert_eq!(b.get(9), None);
    }

    #[test]
    fn test_every_triple_wins() {
        for mark in Mark::ALL {
            for triple in TRIPLES {
                let mut b = Board::new();
                for i in triple {
                    b.set(i, mark);
                }
                assert_eq!(b.winning_mark(), Some(mark), "triple {triple:?}");
            }
        }
    }

    #[test]
    fn test_mixed_triple_does_not_win() {
        assert_eq!(board("XXO......").winning_mark(), None);
        assert_eq!(board("XOXOXOOXO").winning_mark(), None);
    }

    #[test]
    fn test_first_triple_in_order_wins() {
        // Top row (O) is listed before the first column (X).
        let b = board("OOO/X../X..");
        assert_eq!(b.winning_mark(), Some(Mark::O));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let b = board("OO.......");
        let probe = b.with_mark(2, Mark::O);
        assert_eq!(probe.winning_mark(), Some(Mark::O));
        assert_eq!(b.winning_mark(), None);
        assert!(b.is_open(2));
    }

    #[test]
    fn test_with_mark_out_of_range() {
        let b = Board::new();
        assert_eq!(b.with_mark(12, Mark::X), b);
    }

    #[test]
    fn test_display_round_trip() {
        let b = board("XO./.X./..O");
        assert_eq!(b.to_string(), "XO./.X./..O");
        assert_eq!(board(&b.to_string()), b);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::Length(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::Character { index: 2, found: 'Z' })
        );
    }

    #[test]
    fn test_parse_accepts_spaces() {
        let b = board("OO       ");
        assert_eq!(b.occupied_count(), 2);
        assert_eq!(b.get(1), Some(Mark::O));
    }
}
