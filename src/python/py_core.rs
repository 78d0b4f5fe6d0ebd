//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Direction;

/// Python wrapper for Direction.
#[pyclass(name = "Direction")]
#[derive(Clone, Copy, Debug)]
pub struct PyDirection(pub Direction);

#[pymethods]
impl PyDirection {
    /// Parse "up", "down", "left" or "right".
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        Ok(Self(name.parse::<Direction>()?))
    }

    /// Build from an integer code (0=Up, 1=Down, 2=Left, 3=Right).
    #[staticmethod]
    fn from_code(code: u8) -> PyResult<Self> {
        Ok(Self(Direction::try_from(code)?))
    }

    /// All four directions in code order.
    #[staticmethod]
    fn all() -> Vec<Self> {
        Direction::ALL.into_iter().map(Self).collect()
    }

    #[getter]
    fn code(&self) -> u8 {
        self.0.code()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        format!("Direction({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.code())
    }
}
