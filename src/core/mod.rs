//! Core types: marks, board, state, RNG, configuration.
//!
//! These are plain data types. Move legality and terminal detection live
//! in `rules`; opponent decisions live in `policy`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod state;

pub use player::{Mark, ParseMarkError};
pub use board::{Board, EmptyCells, ParseBoardError, CELL_COUNT, TRIPLES};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use state::GameState;
