//! Game configuration.
//!
//! `GameConfig` fixes the rules a `MoveEngine` plays by:
//! - board edge length
//! - the tile value that counts as a win
//! - the probability that a spawned tile is a 4 rather than a 2
//! - how many tiles a fresh game starts with
//!
//! The defaults are the classic 4x4 game to 2048.

use serde::{Deserialize, Serialize};

use super::board::{is_tile_value, Tile, MIN_SIZE};
use crate::error::{GameError, Result};

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// Default winning tile.
pub const DEFAULT_WIN_TILE: Tile = 2048;

/// Default probability that a spawned tile is a 4.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Default number of tiles on a fresh board.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// A win tile must be a power of two >= 4.
pub(crate) fn is_win_tile(tile: Tile) -> bool {
    tile >= 4 && is_tile_value(tile)
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (>= 2).
    pub size: usize,

    /// A tile at or above this value marks the game as won.
    pub win_tile: Tile,

    /// Probability that a spawned tile is 4 instead of 2.
    pub four_probability: f64,

    /// Tiles spawned on a fresh board.
    pub initial_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_tile: DEFAULT_WIN_TILE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, tile: Tile) -> Self {
        self.win_tile = tile;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set how many tiles a fresh board starts with.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(GameError::BoardTooSmall { size: self.size });
        }
        if !is_win_tile(self.win_tile) {
            return Err(GameError::InvalidConfig(format!(
                "win tile {} must be a power of two >= 4",
                self.win_tile
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidConfig(format!(
                "four probability {} must be within [0, 1]",
                self.four_probability
            )));
        }
        if self.initial_tiles > self.size * self.size {
            return Err(GameError::InvalidConfig(format!(
                "{} initial tiles do not fit on a {}x{} board",
                self.initial_tiles, self.size, self.size
            )));
        }
        Ok(())
    }
}
