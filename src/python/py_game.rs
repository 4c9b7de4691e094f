//! Game bindings for Python.
//!
//! Marks cross the boundary as the strings `"X"` and `"O"`, outcomes as
//! `"X"`, `"O"` or `"Draw"`, and empty cells as `""`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, Mark};
use crate::play::{GameSession, TurnOutcome};

fn parse_mark(value: &str) -> PyResult<Mark> {
    value
        .parse::<Mark>()
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
}

/// Out-of-range and negative positions map to an index the engine rejects.
fn to_index(position: i64) -> usize {
    usize::try_from(position).unwrap_or(usize::MAX)
}

fn turn_to_py(outcome: TurnOutcome) -> (String, Option<usize>) {
    match outcome {
        TurnOutcome::Continue(pos) => ("continue".to_string(), Some(pos)),
        TurnOutcome::Finished(result) => (result.to_string(), None),
        TurnOutcome::Rejected => ("rejected".to_string(), None),
    }
}

/// Python wrapper for a tic-tac-toe session.
#[pyclass(name = "TicTacToe")]
pub struct PyTicTacToe {
    session: GameSession,
}

#[pymethods]
impl PyTicTacToe {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for the opponent's random fallback
    /// - opponent: Mark played by the computer ("X" or "O")
    #[new]
    #[pyo3(signature = (seed = 42, opponent = "O"))]
    fn new(seed: u64, opponent: &str) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_opponent(parse_mark(opponent)?);
        Ok(Self {
            session: GameSession::new(config),
        })
    }

    /// Start a fresh game.
    fn reset_new_game(&mut self) {
        self.session.new_game();
    }

    /// Check whether a position is on the board and empty.
    fn is_valid_move(&self, position: i64) -> bool {
        self.session.engine().is_valid_move(to_index(position))
    }

    /// Place a mark without touching turn order or terminal state.
    fn apply_move(&mut self, position: i64, player: &str) -> PyResult<bool> {
        let mark = parse_mark(player)?;
        Ok(self.session.engine_mut().apply_move(to_index(position), mark))
    }

    /// Evaluate the board: "X", "O", "Draw" or None.
    fn check_winner(&self) -> Option<String> {
        self.session.engine().check_winner().map(|o| o.to_string())
    }

    /// Flag the game as over if the board is terminal.
    fn update_terminal_state(&mut self) {
        self.session.engine_mut().update_terminal_state();
    }

    /// Ask the opponent policy for a move without applying it.
    fn select_opponent_move(&mut self) -> Option<usize> {
        self.session.select_opponent_move()
    }

    /// Play the human's move and hand the turn over.
    ///
    /// Returns ("continue", position), (outcome, None) or ("rejected", None).
    fn play_human(&mut self, position: i64) -> (String, Option<usize>) {
        turn_to_py(self.session.play_human(to_index(position)))
    }

    /// Let the opponent play and hand the turn over.
    fn play_opponent(&mut self) -> (String, Option<usize>) {
        turn_to_py(self.session.play_opponent())
    }

    /// Export the game as JSON.
    fn to_json(&self) -> PyResult<String> {
        self.session
            .to_json()
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Replace the game from JSON. Raises ValueError and keeps the current
    /// game if the document is malformed.
    fn load_json(&mut self, json: &str) -> PyResult<()> {
        self.session
            .load_json(json)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Board cells as strings, "" for empty.
    #[getter]
    fn board(&self) -> Vec<String> {
        self.session
            .engine()
            .board()
            .cells()
            .iter()
            .map(|cell| cell.map(|m| m.to_string()).unwrap_or_default())
            .collect()
    }

    #[getter]
    fn current_player(&self) -> String {
        self.session.engine().current_player().to_string()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.session.engine().is_game_over()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        self.session.engine().winner().map(|o| o.to_string())
    }

    #[getter]
    fn moves_count(&self) -> u8 {
        self.session.engine().moves_count()
    }

    fn __repr__(&self) -> String {
        let engine = self.session.engine();
        let status = match engine.winner() {
            Some(outcome) => format!("over, winner={}", outcome),
            None => "ongoing".to_string(),
        };
        format!(
            "TicTacToe(board={}, to_move={}, status={})",
            engine.board(),
            engine.current_player(),
            status
        )
    }
}
