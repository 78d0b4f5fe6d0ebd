//! Square tile grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board before a
//! move is O(1) and writing to the clone never touches the original.
//!
//! A cell holds `0` (empty) or a power of two >= 2. Boards built from raw
//! rows are validated; the engine only ever writes merged or spawned values,
//! which keep the invariant.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use crate::error::{GameError, Result};

/// Value of a single cell. `0` means empty.
pub type Tile = u32;

/// Cells of one row or column, ordered toward the direction of travel.
///
/// Inline capacity covers boards up to 8x8 without heap allocation.
pub type Line = SmallVec<[Tile; 8]>;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 2;

/// Largest power of two a `Tile` can hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// Square grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Board {
    size: usize,
    cells: Vector<Tile>,
}

impl Board {
    /// Create an all-empty `size x size` board.
    pub fn empty(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(GameError::BoardTooSmall { size });
        }
        Ok(Self::zeroed(size))
    }

    /// Empty board without the size check. Callers guarantee `size >= 2`.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(0).take(size * size).collect(),
        }
    }

    /// Build a board from rows, rejecting ragged or non-square input and
    /// values that are not tiles.
    ///
    /// ```
    /// use rust_2048::core::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.get(1, 1), 4);
    /// assert!(Board::from_rows(vec![vec![2, 0], vec![0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(GameError::BoardTooSmall { size });
        }

        let mut cells = Vector::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::RaggedBoard {
                    row: r,
                    expected: size,
                    found: row.len(),
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GameError::InvalidTile { row: r, col: c, value });
                }
                cells.push_back(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        debug_assert!(is_tile_value(value));
        let index = row * self.size + col;
        if self.cells[index] != value {
            self.cells.set(index, value);
        }
    }

    /// Read line `index` ordered toward the edge `direction` moves tiles to.
    #[must_use]
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        (0..self.size)
            .map(|offset| {
                let (r, c) = direction.cell(index, offset, self.size);
                self.get(r, c)
            })
            .collect()
    }

    /// Write a line produced by `line` back at its original orientation.
    pub(crate) fn write_line(&mut self, direction: Direction, index: usize, line: &[Tile]) {
        debug_assert_eq!(line.len(), self.size);
        for (offset, &value) in line.iter().enumerate() {
            let (r, c) = direction.cell(index, offset, self.size);
            self.set(r, c, value);
        }
    }

    /// Coordinates of empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// True if at least one cell is empty.
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile, or 0 on an empty board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Iterate `(row, col, value)` over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &v)| (i / size, i % size, v))
    }

    /// Copy the grid out as rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.get(r, c)).collect())
            .collect()
    }
}

/// True for `0` and powers of two >= 2.
#[must_use]
pub fn is_tile_value(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Whether two neighbouring cells would combine in a slide.
#[must_use]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for r in 0..self.size {
            for c in 0..self.size {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match self.get(r, c) {
                    0 => write!(f, "{:>width$}", ".")?,
                    v => write!(f, "{v:>width$}")?,
                }
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
