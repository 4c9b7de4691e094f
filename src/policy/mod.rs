//! Automated opponent.
//!
//! `OpponentPolicy` implementations receive the board, the mark they play
//! and an explicit `GameRng`.

pub mod opponent;

pub use opponent::{find_winning_move, GreedyOpponent, OpponentPolicy, UniformOpponent};
