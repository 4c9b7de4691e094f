//! Opponent move-selection policies.
//!
//! Policies are trait-based so a session can swap the opponent:
//! - `GreedyOpponent`: win if possible, else block, else random (one ply)
//! - `UniformOpponent`: random empty cell
//!
//! Policies read the board by reference and probe on copies, so a
//! speculative mark can never end up on the caller's board.

use crate::core::{Board, GameRng, Mark};

// =============================================================================
// Opponent Policy
// =============================================================================

/// Policy for choosing the automated opponent's move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a cell for `opponent` to play.
    ///
    /// Returns `None` if no empty cell exists.
    fn choose_move(&self, board: &Board, opponent: Mark, rng: &mut GameRng) -> Option<usize>;
}

/// One-ply greedy policy.
///
/// In priority order:
/// 1. The lowest empty cell that completes a line for `opponent`.
/// 2. The lowest empty cell that would complete a line for the other mark.
/// 3. A uniformly random empty cell.
///
/// It looks no further than the next move, so it can be beaten by forks.
#[derive(Clone, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose_move(&self, board: &Board, opponent: Mark, rng: &mut GameRng) -> Option<usize> {
        find_winning_move(board, opponent)
            .or_else(|| find_winning_move(board, opponent.opponent()))
            .or_else(|| UniformOpponent.choose_move(board, opponent, rng))
    }
}

/// Uniform random policy.
///
/// Selects uniformly from empty cells.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, board: &Board, _opponent: Mark, rng: &mut GameRng) -> Option<usize> {
        let open = board.empty_cells();
        rng.choose(&open).copied()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Lowest empty cell where placing `mark` makes a winning line for `mark`.
///
/// Each candidate is tested on a copy of `board`.
///
/// ```
/// use oxo_engine::core::{Board, Mark};
/// use oxo_engine::policy::find_winning_move;
///
/// let board: Board = "XX.......".parse().unwrap();
/// assert_eq!(find_winning_move(&board, Mark::X), Some(2));
/// assert_eq!(find_winning_move(&board, Mark::O), None);
/// ```
#[must_use]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_cells()
        .into_iter()
        .find(|&i| board.with_mark(i, mark).winning_mark() == Some(mark))
}
