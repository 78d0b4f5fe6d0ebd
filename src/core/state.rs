//! Game state snapshot.
//!
//! `GameState` is what a presentation layer reads after every move: the
//! grid, the running score and the won/over flags. It is an immutable value;
//! the engine returns a new one per successful move and the caller drops the
//! old one.
//!
//! `over` is never set directly. Every constructor (including
//! deserialization) derives it from the grid, so it cannot drift from the
//! board content. `won` is latched the same way: a board holding the win
//! tile always reports a win.

use serde::{Deserialize, Serialize};

use super::board::{Board, Tile};
use super::config::{is_win_tile, DEFAULT_WIN_TILE};
use crate::error::{GameError, Result};
use crate::rules::terminal;

/// Board, score and terminal flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct GameState {
    board: Board,
    score: u64,
    win_tile: Tile,
    won: bool,
    over: bool,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// `over` is derived from the grid. `won` is kept if already set and
    /// raised if any cell reaches `win_tile`.
    #[must_use]
    pub fn from_parts(board: Board, score: u64, won: bool, win_tile: Tile) -> Self {
        let won = won || board.max_tile() >= win_tile;
        let over = !terminal::can_move(&board);
        Self {
            board,
            score,
            win_tile,
            won,
            over,
        }
    }

    /// All-empty board with zero score, judged against the default win tile.
    /// Not playable until tiles are spawned.
    pub fn empty(size: usize) -> Result<Self> {
        Ok(Self::from_parts(Board::empty(size)?, 0, false, DEFAULT_WIN_TILE))
    }

    /// The grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Tile value that wins this game.
    #[must_use]
    pub fn win_tile(&self) -> Tile {
        self.win_tile
    }

    /// Whether the winning tile has ever appeared.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether no move can change the board.
    #[must_use]
    pub fn over(&self) -> bool {
        self.over
    }

    /// True while some move can still change the board.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.over
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }
}

/// Wire form of `GameState`. `over` is written for readers but ignored on
/// input; `won` is re-latched against the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StateRecord {
    size: usize,
    board: Board,
    score: u64,
    #[serde(default = "default_win_tile")]
    win_tile: Tile,
    won: bool,
    #[serde(default)]
    over: bool,
}

fn default_win_tile() -> Tile {
    DEFAULT_WIN_TILE
}

impl TryFrom<StateRecord> for GameState {
    type Error = GameError;

    fn try_from(record: StateRecord) -> Result<Self> {
        if record.size != record.board.size() {
            return Err(GameError::SizeMismatch {
                declared: record.size,
                actual: record.board.size(),
            });
        }
        if !is_win_tile(record.win_tile) {
            return Err(GameError::InvalidConfig(format!(
                "win tile {} must be a power of two >= 4",
                record.win_tile
            )));
        }
        Ok(Self::from_parts(record.board, record.score, record.won, record.win_tile))
    }
}

impl From<GameState> for StateRecord {
    fn from(state: GameState) -> Self {
        Self {
            size: state.board.size(),
            board: state.board,
            score: state.score,
            win_tile: state.win_tile,
            won: state.won,
            over: state.over,
        }
    }
}
