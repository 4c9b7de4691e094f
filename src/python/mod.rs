//! Python bindings for the oxo-engine tic-tac-toe engine.
//!
//! # Quick Start
//!
//! ```python
//! import oxo_engine as oxo
//!
//! game = oxo.TicTacToe(seed=42)
//! game.play_human(4)
//! game.play_opponent()
//!
//! saved = game.to_json()
//! game.load_json(saved)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// oxo_engine: tic-tac-toe with a one-ply greedy opponent.
#[pymodule]
fn oxo_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToe>()?;
    Ok(())
}
