//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::player::Mark;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mark played by the automated opponent (default: `O`).
    /// The other mark is the human side.
    pub opponent: Mark,

    /// Seed for the session RNG.
    /// Same seed produces the same fallback moves.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opponent: Mark::O,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Use a custom opponent mark.
    pub fn with_opponent(mut self, opponent: Mark) -> Self {
        self.opponent = opponent;
        self
    }

    /// Use a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Mark played by the human side.
    #[must_use]
    pub fn human(&self) -> Mark {
        self.opponent.opponent()
    }
}
