//! Terminal-state detection.

use crate::core::{can_merge, Board};

/// True if some move can still change the board: an empty cell exists, or
/// two edge-adjacent cells hold the same value.
#[must_use]
pub fn can_move(board: &Board) -> bool {
    board.has_empty() || has_adjacent_pair(board)
}

/// True if two horizontally or vertically adjacent cells would merge.
#[must_use]
pub fn has_adjacent_pair(board: &Board) -> bool {
    let size = board.size();
    board.cells().any(|(r, c, v)| {
        (c + 1 < size && can_merge(v, board.get(r, c + 1))) || (r + 1 < size && can_merge(v, board.get(r + 1, c)))
    })
}
