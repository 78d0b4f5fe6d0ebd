//! Random tile placement.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Tile, TileSource};

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Place up to `count` tiles into distinct empty cells of `board`.
///
/// Cells are drawn uniformly without replacement from the cells that are
/// empty when the call starts. Each value is 4 with `four_probability`,
/// otherwise 2. A full board yields no tiles.
pub fn spawn_tiles<R: TileSource + ?Sized>(
    board: &mut Board,
    count: usize,
    four_probability: f64,
    rng: &mut R,
) -> Vec<SpawnedTile> {
    let mut empties = board.empty_cells();
    let mut spawned = Vec::with_capacity(count.min(empties.len()));

    while spawned.len() < count && !empties.is_empty() {
        let (row, col) = empties.remove(rng.pick_index(empties.len()));
        let value = if rng.chance(four_probability) { 4 } else { 2 };
        board.set(row, col, value);
        trace!("spawned {value} at ({row}, {col})");
        spawned.push(SpawnedTile { row, col, value });
    }

    spawned
}
