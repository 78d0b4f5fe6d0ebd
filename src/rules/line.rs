//! Single-line compaction and merging.
//!
//! A line arrives ordered toward the edge tiles travel to, so the algorithm
//! is the same for every direction:
//!
//! 1. drop empty cells, keeping order
//! 2. one left-to-right pass merging equal neighbours; a merged cell is
//!    frozen for the rest of the move, and `MAX_TILE` never merges
//! 3. pad with empties back to the original length

use crate::core::{can_merge, Line, Tile};

/// Result of sliding one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after compaction and merging, same length as the input.
    pub line: Line,
    /// Sum of merged tile values.
    pub gained: u64,
    /// Number of pairs merged.
    pub merges: usize,
    /// Whether any cell differs from the input.
    pub moved: bool,
}

/// Slide and merge one line toward index 0.
///
/// ```
/// use rust_2048::rules::slide_line;
///
/// let out = slide_line(&[2, 2, 2, 2]);
/// assert_eq!(out.line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(out.gained, 8);
/// ```
#[must_use]
pub fn slide_line(cells: &[Tile]) -> LineSlide {
    let compacted: Line = cells.iter().copied().filter(|&v| v != 0).collect();

    let mut line = Line::with_capacity(cells.len());
    let mut gained = 0u64;
    let mut merges = 0;
    let mut i = 0;
    while i < compacted.len() {
        let value = compacted[i];
        if compacted.get(i + 1).is_some_and(|&next| can_merge(value, next)) {
            let doubled = value * 2;
            line.push(doubled);
            gained += u64::from(doubled);
            merges += 1;
            i += 2;
        } else {
            line.push(value);
            i += 1;
        }
    }
    line.resize(cells.len(), 0);

    let moved = line.as_slice() != cells;
    LineSlide {
        line,
        gained,
        merges,
        moved,
    }
}
