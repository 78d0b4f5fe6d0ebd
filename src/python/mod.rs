//! Python bindings for the 2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(size=4, seed=42)
//! gained, moved = game.step("left")
//! print(game.board())   # numpy uint32 array, shape (4, 4)
//! print(game.score, game.over)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::GameError;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// rust_2048: deterministic 2048 engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDirection>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
