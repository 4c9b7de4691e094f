//! Driving a game turn by turn.
//!
//! `GameSession` pairs a `GameEngine` with an opponent policy and its RNG,
//! and sequences human move, terminal check, turn hand-off and opponent
//! move.

pub mod session;

pub use session::{GameSession, TurnOutcome};
