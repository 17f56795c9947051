/**
 * Property/invariant tests for the public grid and game API.
 *
 * Invariants covered:
 * - `set` then `get` returns the stored value anywhere on the board.
 * - `available_cells` and `occupied_cells` partition the board.
 * - `neighbors` counts depend only on position (corner 2, edge 3, interior 4).
 * - A slam conserves tile sum apart from the one spawned tile.
 * - `best_value` never decreases and `goal_met` never flips back.
 */
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use slam_engine::engine::{Cell, Direction, EMPTY, Game, GameError, GameState, Grid};

fn board_strategy() -> impl Strategy<Value = (usize, usize, Vec<Cell>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec(prop::sample::select(vec![0i64, 0, 2, 4, 8, 16]), w * h),
        )
    })
}

fn build_grid(width: usize, height: usize, values: &[Cell]) -> Grid {
    let mut grid = Grid::new(width as isize, height as isize).unwrap();
    for (idx, &v) in values.iter().enumerate() {
        grid.set(idx / width, idx % width, v).unwrap();
    }
    grid
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

#[test]
fn construction_rejects_bad_dimensions() {
    assert!(matches!(Grid::new(0, 3), Err(GameError::InvalidArgument(_))));
    assert!(matches!(Grid::new(3, -1), Err(GameError::InvalidArgument(_))));
    assert!(matches!(
        Game::seeded(0, 3, 2048, 2, 1),
        Err(GameError::InvalidArgument(_))
    ));
}

#[test]
fn stuck_board_is_over_without_meeting_goal() {
    let grid = build_grid(3, 3, &[2, 4, 2, 4, 2, 4, 2, 4, 2]);
    let mut game = Game::from_grid(grid, 2048, 2, StdRng::seed_from_u64(0)).unwrap();
    assert!(!game.any_can_move(&Direction::ALL));
    assert!(!game.goal_met());
    assert!(game.is_over());
    assert_eq!(game.state(), GameState::Over);
    assert_eq!(game.slam(Direction::Right), Err(GameError::GameOver));
}

proptest! {
    #[test]
    fn set_then_get_round_trips(
        (w, h) in (1usize..8, 1usize..8),
        r in 0usize..8,
        c in 0usize..8,
        v in 0i64..1_000_000,
    ) {
        let mut grid = Grid::new(w as isize, h as isize).unwrap();
        if r < h && c < w {
            prop_assert_eq!(grid.set(r, c, v), Ok(v));
            prop_assert_eq!(grid.get(r, c), Ok(v));
        } else {
            let is_out_of_bounds = matches!(grid.set(r, c, v), Err(GameError::OutOfBounds { .. }));
            prop_assert!(is_out_of_bounds);
            prop_assert!(grid.cell_values().all(|x| x == EMPTY));
        }
    }

    #[test]
    fn available_and_occupied_partition_board((w, h, values) in board_strategy()) {
        let grid = build_grid(w, h, &values);
        let available: Vec<_> = grid.available_cells().collect();
        let occupied: Vec<_> = grid.occupied_cells().collect();
        prop_assert_eq!(available.len() + occupied.len(), w * h);
        for pos in &available {
            prop_assert!(!occupied.contains(pos));
        }
        let mut all: Vec<_> = available.into_iter().chain(occupied).collect();
        all.sort();
        let expected: Vec<_> = (0..h).flat_map(|r| (0..w).map(move |c| (r, c))).collect();
        prop_assert_eq!(all, expected);
    }

    #[test]
    fn neighbor_counts_depend_on_position((w, h, values) in board_strategy()) {
        let grid = build_grid(w, h, &values);
        for r in 0..h {
            for c in 0..w {
                let n = grid.neighbors(r, c, &Direction::ALL).count();
                let expected = [r > 0, c + 1 < w, r + 1 < h, c > 0]
                    .iter()
                    .filter(|&&ok| ok)
                    .count();
                prop_assert_eq!(n, expected);
                if r > 0 && c > 0 && r + 1 < h && c + 1 < w {
                    prop_assert_eq!(n, 4);
                }
            }
        }
    }

    #[test]
    fn slam_conserves_sum_plus_one_spawn(
        (w, h, values) in board_strategy(),
        dir in direction_strategy(),
        seed in any::<u64>(),
    ) {
        prop_assume!(values.contains(&EMPTY));
        let grid = build_grid(w, h, &values);
        let before: Cell = grid.cell_values().sum();
        let mut game = Game::from_grid(grid, Cell::MAX, 2, StdRng::seed_from_u64(seed)).unwrap();
        game.slam(dir).unwrap();
        let after: Cell = game.grid().cell_values().sum();
        prop_assert_eq!(after, before + 2);
        prop_assert_eq!(game.best_value(), game.grid().cell_values().max().unwrap());
    }

    #[test]
    fn best_value_and_goal_are_monotonic(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction_strategy(), 1..60),
    ) {
        let mut game = Game::seeded(3, 3, 32, 2, seed).unwrap();
        game.start();
        let mut best = game.best_value();
        let mut met = game.goal_met();
        for dir in moves {
            if game.is_over() {
                prop_assert_eq!(game.slam(dir), Err(GameError::GameOver));
                break;
            }
            game.slam(dir).unwrap();
            prop_assert!(game.best_value() >= best);
            prop_assert!(!met || game.goal_met());
            best = game.best_value();
            met = game.goal_met();
        }
    }
}
