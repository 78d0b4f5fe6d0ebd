//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Direction, GameConfig};
use crate::session::{MoveStatus, Session, Status};

use super::py_core::PyDirection;

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: Session,
}

impl PyGame {
    fn apply(&mut self, direction: Direction) -> (u64, bool) {
        match self.session.try_move(direction) {
            MoveStatus::Moved { gained, .. } => (gained, true),
            MoveStatus::Ignored | MoveStatus::Unchanged => (0, false),
        }
    }
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board edge length (>= 2)
    /// - seed: RNG seed for deterministic games
    /// - win_tile: Tile value that wins the game
    /// - four_probability: Chance a spawned tile is a 4
    #[new]
    #[pyo3(signature = (size = 4, seed = 42, win_tile = 2048, four_probability = 0.1))]
    fn new(size: usize, seed: u64, win_tile: u32, four_probability: f64) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_size(size)
            .with_win_tile(win_tile)
            .with_four_probability(four_probability);
        Ok(Self {
            session: Session::new(config, seed)?,
        })
    }

    /// Move in a direction given by name.
    ///
    /// Returns (gained, moved). Input after a win or game over is ignored.
    fn step(&mut self, direction: &str) -> PyResult<(u64, bool)> {
        let direction = direction.parse::<Direction>()?;
        Ok(self.apply(direction))
    }

    /// Move in a direction given as a `Direction` object.
    fn step_direction(&mut self, direction: &PyDirection) -> (u64, bool) {
        self.apply(direction.0)
    }

    /// Board as a (size, size) uint32 numpy array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let size = self.session.state().size();
        let cells: Vec<u32> = self.session.state().board().cells().map(|(_, _, v)| v).collect();
        PyArray1::from_vec_bound(py, cells).reshape([size, size])
    }

    /// Legal moves as [up, down, left, right] booleans.
    fn legal_moves(&self) -> Vec<bool> {
        self.session.legal_moves().to_vec()
    }

    /// Start a new game, optionally reseeding.
    #[pyo3(signature = (seed = None))]
    fn restart(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.session.restart_with_seed(seed),
            None => self.session.restart(),
        }
    }

    #[getter]
    fn size(&self) -> usize {
        self.session.state().size()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.session.state().score()
    }

    #[getter]
    fn won(&self) -> bool {
        self.session.state().won()
    }

    #[getter]
    fn over(&self) -> bool {
        self.session.state().over()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[getter]
    fn max_tile(&self) -> u32 {
        self.session.state().max_tile()
    }

    /// Copy the game with an independent RNG branch.
    fn copy(&mut self) -> Self {
        Self {
            session: self.session.fork(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.session.status() {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Over => "over",
        };
        format!(
            "Game(size={}, score={}, moves={}, status={})",
            self.session.state().size(),
            self.session.state().score(),
            self.session.moves(),
            status
        )
    }
}
