//! Game rules: sliding, merging, spawning and terminal detection.
//!
//! - `line`: compaction and single-pass merge of one row or column
//! - `engine`: whole-board moves, scoring, win latching
//! - `spawner`: random tile placement
//! - `terminal`: whether any move remains
//!
//! Everything here is deterministic given the `TileSource` passed in.

pub mod engine;
pub mod line;
pub mod spawner;
pub mod terminal;

pub use engine::{apply_move, create_initial_state, legal_moves, slide, MoveEngine, MoveOutcome, Slide};
pub use line::{slide_line, LineSlide};
pub use spawner::{spawn_tiles, SpawnedTile};
pub use terminal::{can_move, has_adjacent_pair};
