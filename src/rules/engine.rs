//! The move engine: state + direction -> next state.
//!
//! ## Move Pipeline
//!
//! 1. `slide` every line of the board toward the move's edge
//! 2. if nothing changed, hand back the input state untouched
//! 3. otherwise add the merge gain to the score, spawn one tile, then latch
//!    `won` and recompute `over` on the post-spawn board
//!
//! Only step 3 consumes randomness, drawn from the caller's `TileSource`.

use log::{debug, trace};

use super::line::slide_line;
use super::spawner::{spawn_tiles, SpawnedTile};
use crate::core::{Board, Direction, GameConfig, GameState, TileSource};
use crate::error::Result;

/// Deterministic half of a move: the board after sliding, before spawning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Board after compaction and merging.
    pub board: Board,
    /// Sum of merged tile values.
    pub gained: u64,
    /// Number of pairs merged.
    pub merges: usize,
    /// Whether any line changed.
    pub moved: bool,
}

/// Slide every line of `board` in `direction`.
#[must_use]
pub fn slide(board: &Board, direction: Direction) -> Slide {
    let mut next = board.clone();
    let mut gained = 0;
    let mut merges = 0;
    let mut moved = false;

    for index in 0..board.size() {
        let result = slide_line(&board.line(direction, index));
        if result.moved {
            next.write_line(direction, index, &result.line);
            moved = true;
        }
        gained += result.gained;
        merges += result.merges;
    }

    Slide {
        board: next,
        gained,
        merges,
        moved,
    }
}

/// Which directions would change `board`, indexed by `Direction::code`.
#[must_use]
pub fn legal_moves(board: &Board) -> [bool; 4] {
    Direction::ALL.map(|direction| slide(board, direction).moved)
}

/// Result of one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Next state. Equal to the input when `moved` is false.
    pub state: GameState,
    /// Score added by this move.
    pub gained: u64,
    /// Whether the board changed.
    pub moved: bool,
    /// Number of pairs merged.
    pub merges: usize,
    /// Tile spawned after the slide, if the move changed the board.
    pub spawned: Option<SpawnedTile>,
}

/// Move engine bound to a `GameConfig`.
///
/// ```
/// use rust_2048::core::{Direction, GameConfig, GameRng};
/// use rust_2048::rules::MoveEngine;
///
/// let engine = MoveEngine::new(GameConfig::default()).unwrap();
/// let mut rng = GameRng::new(42);
/// let state = engine.new_game(&mut rng);
/// assert_eq!(state.board().tile_count(), 2);
///
/// let outcome = engine.apply(&state, Direction::Left, &mut rng);
/// assert!(outcome.state.score() >= state.score());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveEngine {
    config: GameConfig,
}

impl MoveEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The rules this engine plays by.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh board with `initial_tiles` spawned tiles, zero score.
    pub fn new_game<R: TileSource + ?Sized>(&self, rng: &mut R) -> GameState {
        // Size was checked by `GameConfig::validate` in `new`.
        let mut board = Board::zeroed(self.config.size);
        spawn_tiles(&mut board, self.config.initial_tiles, self.config.four_probability, rng);
        debug!("new {}x{} game", self.config.size, self.config.size);
        GameState::from_parts(board, 0, false, self.config.win_tile)
    }

    /// Place up to `count` tiles on a copy of `state`.
    pub fn spawn<R: TileSource + ?Sized>(
        &self,
        state: &GameState,
        count: usize,
        rng: &mut R,
    ) -> (GameState, Vec<SpawnedTile>) {
        let mut board = state.board().clone();
        let spawned = spawn_tiles(&mut board, count, self.config.four_probability, rng);
        (
            GameState::from_parts(board, state.score(), state.won(), state.win_tile()),
            spawned,
        )
    }

    /// Apply one move.
    ///
    /// A move that changes nothing returns the input state with `gained = 0`
    /// and consumes no randomness. The win is judged against the state's own
    /// `win_tile`, including a tile placed by this move's spawn.
    pub fn apply<R: TileSource + ?Sized>(
        &self,
        state: &GameState,
        direction: Direction,
        rng: &mut R,
    ) -> MoveOutcome {
        let Slide {
            mut board,
            gained,
            merges,
            moved,
        } = slide(state.board(), direction);

        if !moved {
            trace!("{direction}: no change");
            return MoveOutcome {
                state: state.clone(),
                gained: 0,
                moved: false,
                merges: 0,
                spawned: None,
            };
        }

        let spawned = spawn_tiles(&mut board, 1, self.config.four_probability, rng)
            .into_iter()
            .next();
        let next = GameState::from_parts(board, state.score() + gained, state.won(), state.win_tile());

        debug!(
            "{direction}: gained {gained} from {merges} merges, score {}, won {}, over {}",
            next.score(),
            next.won(),
            next.over()
        );

        MoveOutcome {
            state: next,
            gained,
            moved: true,
            merges,
            spawned,
        }
    }
}

/// Fresh `size x size` game under the default rules.
pub fn create_initial_state<R: TileSource + ?Sized>(size: usize, rng: &mut R) -> Result<GameState> {
    let engine = MoveEngine::new(GameConfig::default().with_size(size))?;
    Ok(engine.new_game(rng))
}

/// Apply `direction` to `state` under the default rules (win at 2048, 10%
/// fours). The board size is taken from `state`.
pub fn apply_move<R: TileSource + ?Sized>(
    state: &GameState,
    direction: Direction,
    rng: &mut R,
) -> MoveOutcome {
    MoveEngine::default().apply(state, direction, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_slide_directions() {
        let b = board(&[&[2, 0, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);

        let right = slide(&b, Direction::Right);
        assert_eq!(right.board.to_rows()[0], vec![0, 0, 0, 4]);
        assert_eq!(right.gained, 4);

        let left = slide(&b, Direction::Left);
        assert_eq!(left.board.to_rows()[0], vec![4, 0, 0, 0]);
        assert_eq!(left.gained, 4);
    }

    #[test]
    fn test_slide_columns() {
        let b = board(&[&[2, 0], &[2, 4]]);

        let up = slide(&b, Direction::Up);
        assert_eq!(up.board.to_rows(), vec![vec![4, 4], vec![0, 0]]);
        assert_eq!(up.merges, 1);

        let down = slide(&b, Direction::Down);
        assert_eq!(down.board.to_rows(), vec![vec![0, 0], vec![4, 4]]);
    }

    #[test]
    fn test_slide_does_not_touch_input() {
        let b = board(&[&[2, 2], &[0, 0]]);
        let before = b.clone();
        let _ = slide(&b, Direction::Left);
        assert_eq!(b, before);
    }

    #[test]
    fn test_legal_moves() {
        let b = board(&[&[2, 0], &[0, 0]]);
        // Up and Left cannot move a tile already in the top-left corner.
        assert_eq!(legal_moves(&b), [false, true, false, true]);

        let stuck = board(&[&[2, 4], &[4, 2]]);
        assert_eq!(legal_moves(&stuck), [false; 4]);
    }

    #[test]
    fn test_apply_noop_returns_input() {
        let engine = MoveEngine::default();
        let state = GameState::from_parts(board(&[&[2, 4], &[0, 0]]), 12, false, 2048);
        let mut rng = GameRng::new(1);

        let outcome = engine.apply(&state, Direction::Up, &mut rng);

        assert!(!outcome.moved);
        assert_eq!(outcome.gained, 0);
        assert_eq!(outcome.spawned, None);
        assert_eq!(outcome.state, state);
    }

    #[test]
    fn test_apply_scores_and_spawns() {
        let engine = MoveEngine::default();
        let state = GameState::from_parts(
            board(&[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            100,
            false,
            2048,
        );
        let mut rng = GameRng::new(9);

        let outcome = engine.apply(&state, Direction::Left, &mut rng);

        assert!(outcome.moved);
        assert_eq!(outcome.gained, 4);
        assert_eq!(outcome.state.score(), 104);
        assert_eq!(outcome.state.board().get(0, 0), 4);
        assert_eq!(outcome.state.board().tile_count(), 2);
        let spawned = outcome.spawned.unwrap();
        assert_eq!(outcome.state.board().get(spawned.row, spawned.col), spawned.value);
    }

    #[test]
    fn test_apply_sets_won() {
        let engine = MoveEngine::default();
        let state = GameState::from_parts(board(&[&[1024, 1024], &[0, 0]]), 0, false, 2048);
        let mut rng = GameRng::new(5);

        let outcome = engine.apply(&state, Direction::Left, &mut rng);

        assert!(outcome.state.won());
        assert_eq!(outcome.gained, 2048);
    }

    #[test]
    fn test_custom_win_tile() {
        let engine = MoveEngine::new(GameConfig::default().with_win_tile(16)).unwrap();
        let fresh = engine.new_game(&mut GameRng::new(5));
        assert_eq!(fresh.win_tile(), 16);

        let state = GameState::from_parts(board(&[&[8, 8], &[0, 0]]), 0, false, 16);
        let outcome = engine.apply(&state, Direction::Right, &mut GameRng::new(5));
        assert!(outcome.state.won());
        assert_eq!(outcome.state.win_tile(), 16);
    }

    /// Always picks the first empty cell and always spawns a 4.
    struct FirstCellFour;

    impl TileSource for FirstCellFour {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }

        fn chance(&mut self, _probability: f64) -> bool {
            true
        }
    }

    #[test]
    fn test_spawned_win_tile_counts() {
        let engine = MoveEngine::new(GameConfig::default().with_win_tile(4)).unwrap();
        let state = GameState::from_parts(board(&[&[2, 0], &[0, 0]]), 0, false, 4);
        assert!(!state.won());

        // Sliding right leaves only a 2; the win comes from the spawned 4.
        let outcome = engine.apply(&state, Direction::Right, &mut FirstCellFour);

        assert_eq!(outcome.gained, 0);
        assert_eq!(outcome.spawned.map(|t| (t.row, t.col, t.value)), Some((0, 0, 4)));
        assert_eq!(outcome.state.board().to_rows(), vec![vec![4, 2], vec![0, 0]]);
        assert!(outcome.state.won());
    }

    #[test]
    fn test_noop_keeps_latched_win() {
        let state = GameState::from_parts(board(&[&[4096, 0], &[0, 0]]), 0, false, 2048);
        let outcome = apply_move(&state, Direction::Up, &mut GameRng::new(2));

        assert!(!outcome.moved);
        assert!(outcome.state.won());
    }

    #[test]
    fn test_ceiling_tiles_stay_put() {
        let top = crate::core::MAX_TILE;
        let state = GameState::from_parts(board(&[&[top, top], &[2, 4]]), 0, false, 2048);
        assert!(state.over());

        let outcome = apply_move(&state, Direction::Left, &mut GameRng::new(2));

        assert!(!outcome.moved);
        assert_eq!(outcome.state.board().to_rows(), vec![vec![top, top], vec![2, 4]]);
    }

    #[test]
    fn test_new_game() {
        let engine = MoveEngine::new(GameConfig::default().with_size(5).with_initial_tiles(3)).unwrap();
        let state = engine.new_game(&mut GameRng::new(11));

        assert_eq!(state.size(), 5);
        assert_eq!(state.board().tile_count(), 3);
        assert_eq!(state.score(), 0);
        assert!(!state.won());
        assert!(!state.over());
    }

    #[test]
    fn test_spawn_returns_new_state() {
        let engine = MoveEngine::default();
        let state = GameState::empty(4).unwrap();

        let (next, spawned) = engine.spawn(&state, 2, &mut GameRng::new(3));

        assert_eq!(spawned.len(), 2);
        assert_eq!(next.board().tile_count(), 2);
        assert_eq!(state.board().tile_count(), 0);
    }

    #[test]
    fn test_create_initial_state_rejects_tiny_board() {
        let mut rng = GameRng::new(0);
        assert!(create_initial_state(1, &mut rng).is_err());
        assert_eq!(create_initial_state(3, &mut rng).unwrap().board().tile_count(), 2);
    }
}
