//! Game rules.
//!
//! `GameEngine` owns one `GameState` and is its only mutator:
//! - Which moves are legal
//! - How moves modify the board
//! - When the game is won or drawn
//!
//! Opponent decisions are delegated to `policy`, save documents to
//! `persist`.

pub mod engine;

pub use engine::{evaluate, GameEngine, GameStats, Outcome, ParseOutcomeError};
