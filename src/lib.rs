//! # oxo-engine
//!
//! A tic-tac-toe engine with a one-ply greedy opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure State Transitions**: The engine never reads input, renders or
//!    touches the filesystem. Collaborators own those concerns.
//!
//! 2. **Two-Step Moves**: Placing a mark and flagging the game as over are
//!    separate calls, so a winning board can be inspected before it is
//!    marked terminal.
//!
//! 3. **Injected Randomness**: The opponent's fallback move draws from an
//!    explicit, seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Marks, board, state, RNG, configuration
//! - `rules`: `GameEngine` and outcomes
//! - `policy`: Opponent move selection
//! - `persist`: Save document schema and validation
//! - `play`: Turn sequencing for human-vs-opponent games
//! - `error`: Save document errors

pub mod core;
pub mod error;
pub mod rules;
pub mod policy;
pub mod persist;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Mark, GameState,
    GameRng, GameRngState,
    EngineConfig, CELL_COUNT, TRIPLES,
};

pub use crate::error::FormatError;

pub use crate::rules::{GameEngine, GameStats, Outcome};

pub use crate::policy::{OpponentPolicy, GreedyOpponent, UniformOpponent, find_winning_move};

pub use crate::persist::StateDocument;

pub use crate::play::{GameSession, TurnOutcome};
