//! Move directions and the line geometry they induce.
//!
//! Every direction slides tiles along lines toward one edge. Left/Right work
//! on rows, Up/Down on columns. Internally each line is read so that offset 0
//! is the edge tiles travel toward; `Direction::cell` is the single mapping
//! from (line, offset) to a board coordinate used for both reading and
//! writing back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Which board lines a direction operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Lines are rows.
    Rows,
    /// Lines are columns.
    Columns,
}

/// One of the four move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All four directions, in code order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Axis whose lines this direction slides.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Rows,
            Direction::Up | Direction::Down => Axis::Columns,
        }
    }

    /// True when tiles travel toward the high-index edge.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Board coordinate `(row, col)` of `offset` along `line`.
    ///
    /// Offset 0 is the cell on the edge tiles move toward.
    #[must_use]
    pub const fn cell(self, line: usize, offset: usize, size: usize) -> (usize, usize) {
        let along = if self.is_reversed() { size - 1 - offset } else { offset };
        match self.axis() {
            Axis::Rows => (line, along),
            Axis::Columns => (along, line),
        }
    }

    /// Stable integer code (0=Up, 1=Down, 2=Left, 3=Right).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            other => Err(GameError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(GameError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
