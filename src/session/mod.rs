//! Caller-side game loop.
//!
//! A `Session` is what an input layer holds: it owns the RNG and the current
//! state, forwards directions to the `MoveEngine`, and swaps in the result
//! only when the board changed. Once the game is won or over further input
//! is ignored until `restart`.

mod driver;

pub use driver::{MoveStatus, Session, Status};
