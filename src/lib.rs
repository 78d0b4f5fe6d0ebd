//! # rust-2048
//!
//! A deterministic move/merge engine for the 2048 tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: every successful move returns a new `GameState`.
//!    The grid is an `im::Vector`, so the copy is O(1) and never aliases the
//!    previous state.
//!
//! 2. **Injected Randomness**: tile spawning is the only random step and draws
//!    from a caller-supplied `TileSource`. Same seed, same game.
//!
//! 3. **One Line Algorithm**: all four directions run the same compaction and
//!    merge over lines ordered toward the edge of travel.
//!
//! ## Modules
//!
//! - `core`: board, state snapshot, directions, RNG, configuration
//! - `rules`: line sliding, move engine, spawner, terminal detection
//! - `session`: caller-side loop holding the current state
//! - `error`: `GameError`
//!
//! ## Example
//!
//! ```
//! use rust_2048::{apply_move, create_initial_state, Direction, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut state = create_initial_state(4, &mut rng).unwrap();
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     let outcome = apply_move(&state, dir, &mut rng);
//!     if outcome.moved {
//!         state = outcome.state;
//!     }
//! }
//! assert!(state.board().tile_count() >= 2);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Direction, GameConfig, GameRng, GameState, Tile, TileSource};

pub use crate::error::{GameError, Result};

pub use crate::rules::{
    apply_move, can_move, create_initial_state, legal_moves, slide, slide_line, spawn_tiles, MoveEngine,
    MoveOutcome, Slide, SpawnedTile,
};

pub use crate::session::{MoveStatus, Session, Status};
