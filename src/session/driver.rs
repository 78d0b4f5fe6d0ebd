//! Session driver.

use log::{debug, info};

use crate::core::{Direction, GameConfig, GameRng, GameState};
use crate::error::Result;
use crate::rules::{legal_moves, MoveEngine, SpawnedTile};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Moves are accepted.
    Playing,
    /// The winning tile appeared. Takes precedence over `Over`.
    Won,
    /// No move can change the board.
    Over,
}

/// What `Session::try_move` did with an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// The game is won or over; the input was dropped.
    Ignored,
    /// The move would not change the board; state kept as is.
    Unchanged,
    /// The state was replaced.
    Moved {
        gained: u64,
        merges: usize,
        spawned: Option<SpawnedTile>,
    },
}

/// A running game: engine, RNG and current state.
#[derive(Clone, Debug)]
pub struct Session {
    engine: MoveEngine,
    rng: GameRng,
    state: GameState,
    moves: u32,
}

impl Session {
    /// Start a game under `config` with the given seed.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let engine = MoveEngine::new(config)?;
        let mut rng = GameRng::new(seed);
        let state = engine.new_game(&mut rng);
        Ok(Self {
            engine,
            rng,
            state,
            moves: 0,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules in effect.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Number of moves that changed the board since the last restart.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Playing, won or over.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.state.won() {
            Status::Won
        } else if self.state.over() {
            Status::Over
        } else {
            Status::Playing
        }
    }

    /// Directions that would change the board, indexed by `Direction::code`.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        legal_moves(self.state.board())
    }

    /// Apply a move unless the game has finished.
    ///
    /// The state is replaced only when the move changed the board.
    pub fn try_move(&mut self, direction: Direction) -> MoveStatus {
        if self.status() != Status::Playing {
            return MoveStatus::Ignored;
        }

        let outcome = self.engine.apply(&self.state, direction, &mut self.rng);
        if !outcome.moved {
            return MoveStatus::Unchanged;
        }

        self.state = outcome.state;
        self.moves += 1;
        match self.status() {
            Status::Won => info!(
                "won after {} moves with score {}",
                self.moves,
                self.state.score()
            ),
            Status::Over => info!(
                "game over after {} moves with score {}, max tile {}",
                self.moves,
                self.state.score(),
                self.state.max_tile()
            ),
            Status::Playing => {}
        }

        MoveStatus::Moved {
            gained: outcome.gained,
            merges: outcome.merges,
            spawned: outcome.spawned,
        }
    }

    /// Start over, continuing the current RNG stream.
    pub fn restart(&mut self) {
        debug!("restart after {} moves", self.moves);
        self.state = self.engine.new_game(&mut self.rng);
        self.moves = 0;
    }

    /// Start over with a fresh RNG seeded from `seed`.
    pub fn restart_with_seed(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.restart();
    }

    /// Copy this session with an independent RNG branch.
    ///
    /// Takes `&mut self` because forking advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            engine: self.engine.clone(),
            rng: self.rng.fork(),
            state: self.state.clone(),
            moves: self.moves,
        }
    }
}
