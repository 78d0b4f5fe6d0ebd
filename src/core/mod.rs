//! Core types: board, state snapshot, directions, RNG, configuration.
//!
//! Nothing in this module moves tiles. The rules that transform a state live
//! in `rules`.

pub mod board;
pub mod config;
pub mod direction;
pub mod rng;
pub mod state;

pub use board::{can_merge, is_tile_value, Board, Line, Tile, MAX_TILE, MIN_SIZE};
pub use config::GameConfig;
pub use direction::{Axis, Direction};
pub use rng::{GameRng, TileSource};
pub use state::GameState;
