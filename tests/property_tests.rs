//! Property tests for the move engine.

use proptest::prelude::*;

use rust_2048::core::{Board, Direction, GameRng, GameState};
use rust_2048::rules::{apply_move, can_move, has_adjacent_pair, slide, slide_line};

fn arb_board() -> impl Strategy<Value = Board> {
    (2usize..=5).prop_flat_map(|size| {
        prop::collection::vec(prop::sample::select(vec![0u32, 0, 2, 4, 8, 16, 32]), size * size).prop_map(
            move |cells| Board::from_rows(cells.chunks(size).map(<[u32]>::to_vec).collect()).unwrap(),
        )
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn mirror(board: &Board) -> Board {
    Board::from_rows(
        board
            .to_rows()
            .into_iter()
            .map(|mut r| {
                r.reverse();
                r
            })
            .collect(),
    )
    .unwrap()
}

fn transpose(board: &Board) -> Board {
    let rows = board.to_rows();
    let n = rows.len();
    Board::from_rows((0..n).map(|c| (0..n).map(|r| rows[r][c]).collect()).collect()).unwrap()
}

proptest! {
    #[test]
    fn slide_conserves_tile_sum(board in arb_board(), dir in arb_direction()) {
        let slid = slide(&board, dir);
        prop_assert_eq!(slid.board.tile_sum(), board.tile_sum());
        prop_assert_eq!(slid.board.tile_count(), board.tile_count() - slid.merges);
        prop_assert_eq!(slid.moved, slid.board != board);
        if !slid.moved {
            prop_assert_eq!(slid.gained, 0);
        }
    }

    #[test]
    fn noop_move_is_identity(board in arb_board(), dir in arb_direction(), seed in any::<u64>()) {
        let state = GameState::from_parts(board, 10, false, 2048);
        let outcome = apply_move(&state, dir, &mut GameRng::new(seed));
        if !outcome.moved {
            prop_assert_eq!(outcome.gained, 0);
            prop_assert!(outcome.spawned.is_none());
            prop_assert_eq!(outcome.state, state);
        }
    }

    #[test]
    fn successful_move_spawns_exactly_one(board in arb_board(), dir in arb_direction(), seed in any::<u64>()) {
        let state = GameState::from_parts(board, 0, false, 2048);
        let slid = slide(state.board(), dir);
        let outcome = apply_move(&state, dir, &mut GameRng::new(seed));
        if outcome.moved {
            prop_assert!(slid.board.has_empty());
            prop_assert_eq!(outcome.state.board().tile_count(), slid.board.tile_count() + 1);
            prop_assert_eq!(outcome.state.score(), state.score() + slid.gained);
            prop_assert!(outcome.spawned.is_some());
        }
    }

    #[test]
    fn over_matches_grid(board in arb_board(), dir in arb_direction(), seed in any::<u64>()) {
        let state = GameState::from_parts(board, 0, false, 2048);
        let outcome = apply_move(&state, dir, &mut GameRng::new(seed));
        let next = outcome.state.board();
        prop_assert_eq!(outcome.state.over(), !can_move(next));
        prop_assert_eq!(can_move(next), next.has_empty() || has_adjacent_pair(next));
    }

    #[test]
    fn won_never_reverts(board in arb_board(), dirs in prop::collection::vec(arb_direction(), 1..20), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut state = GameState::from_parts(board, 0, true, 2048);
        for dir in dirs {
            state = apply_move(&state, dir, &mut rng).state;
            prop_assert!(state.won());
        }
    }

    #[test]
    fn right_is_mirrored_left(board in arb_board()) {
        let right = slide(&board, Direction::Right);
        let left = slide(&mirror(&board), Direction::Left);
        prop_assert_eq!(right.board, mirror(&left.board));
        prop_assert_eq!(right.gained, left.gained);
    }

    #[test]
    fn up_is_transposed_left(board in arb_board()) {
        let up = slide(&board, Direction::Up);
        let left = slide(&transpose(&board), Direction::Left);
        prop_assert_eq!(up.board, transpose(&left.board));
        prop_assert_eq!(up.gained, left.gained);
    }

    #[test]
    fn line_output_is_compacted(cells in prop::collection::vec(prop::sample::select(vec![0u32, 2, 4, 8]), 2..8)) {
        let out = slide_line(&cells);
        prop_assert_eq!(out.line.len(), cells.len());
        let first_empty = out.line.iter().position(|&v| v == 0).unwrap_or(out.line.len());
        prop_assert!(out.line[first_empty..].iter().all(|&v| v == 0));
    }
}
