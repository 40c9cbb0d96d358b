//! Property-based invariant tests for the water trace.
//!
//! 1. Tracing is idempotent for an unchanged board
//! 2. The path starts at the Start cell and every step moves to a neighbour
//! 3. Every recorded cell is on the board and the walk is bounded
//! 4. A win always ends on the End cell
//! 5. Rotating a tile cw then ccw restores the same trace

use proptest::prelude::*;
use tui_pipes_core::types::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use tui_pipes_core::{trace, FlowOutcome, GameSession, Grid, SimpleRng};

// ── Strategies ──────────────────────────────────────────────────────────

fn dims_strategy() -> impl Strategy<Value = (u8, u8)> {
    (MIN_ROWS..=MAX_ROWS, MIN_COLS..=MAX_COLS)
}

fn rotations_strategy() -> impl Strategy<Value = Vec<(u8, u8, bool)>> {
    prop::collection::vec((0u8..MAX_COLS, 0u8..MAX_ROWS, any::<bool>()), 0..64)
}

fn board(rows: u8, cols: u8, seed: u32) -> Grid {
    Grid::generate(rows, cols, &mut SimpleRng::new(seed)).unwrap()
}

proptest! {
    #[test]
    fn trace_is_idempotent((rows, cols) in dims_strategy(), seed in any::<u32>()) {
        let grid = board(rows, cols, seed);
        prop_assert_eq!(trace(&grid), trace(&grid));
    }

    #[test]
    fn path_is_a_connected_walk_from_start((rows, cols) in dims_strategy(), seed in any::<u32>()) {
        let grid = board(rows, cols, seed);
        let path = trace(&grid);

        prop_assert!(!path.is_empty());
        prop_assert_eq!((path.steps[0].x, path.steps[0].y), (0, 0));
        prop_assert!(path.len() <= 4 * rows as usize * cols as usize);

        for pair in path.steps.windows(2) {
            let dist = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            prop_assert_eq!(dist, 1);
        }
        for step in &path.steps {
            prop_assert!(grid.in_bounds(step.x, step.y));
        }
    }

    #[test]
    fn win_ends_on_end_cell(
        (rows, cols) in dims_strategy(),
        seed in any::<u32>(),
        rotations in rotations_strategy(),
    ) {
        let mut session = GameSession::new(rows, cols, seed).unwrap();
        for (x, y, cw) in rotations {
            if session.solved() {
                break;
            }
            let _ = session.rotate((x % cols) as i8, (y % rows) as i8, cw);
        }
        if session.solved() {
            let last = session.path().steps.last().copied().unwrap();
            prop_assert_eq!((last.x, last.y), session.grid().end_pos());
            prop_assert_eq!(session.outcome(), FlowOutcome::ReachedEnd);
            prop_assert!(session.score() > 0);
        }
    }

    #[test]
    fn cw_then_ccw_restores_trace(
        (rows, cols) in dims_strategy(),
        seed in any::<u32>(),
        x in 0u8..MAX_COLS,
        y in 0u8..MAX_ROWS,
    ) {
        let mut grid = board(rows, cols, seed);
        let (x, y) = ((x % cols) as i8, (y % rows) as i8);
        let before = trace(&grid);
        grid.rotate(x, y, true).unwrap();
        grid.rotate(x, y, false).unwrap();
        prop_assert_eq!(trace(&grid), before);
    }
}
