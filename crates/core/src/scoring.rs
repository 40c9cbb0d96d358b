//! Scoring module - score for a solved board
//!
//! `score = rows² * cols² * 100 / (time * turns)` with integer division, where
//! `time` is whole seconds once more than one second has elapsed (1 before that)
//! and `turns` is the move count floored at 1. Big boards solved fast in few
//! moves score highest.

use crate::types::{SCORE_MULTIPLIER, TICKS_PER_SECOND};

/// Seconds used by the score formula.
pub fn effective_time(elapsed_ticks: u32) -> u32 {
    if elapsed_ticks > TICKS_PER_SECOND {
        elapsed_ticks / TICKS_PER_SECOND
    } else {
        1
    }
}

/// Moves used by the score formula.
pub fn effective_turns(moves: u32) -> u32 {
    moves.max(1)
}

/// Calculate the score for a solved `rows x cols` board.
pub fn calculate_score(rows: u8, cols: u8, elapsed_ticks: u32, moves: u32) -> u32 {
    let rows = rows as u64;
    let cols = cols as u64;
    let numerator = rows * rows * cols * cols * SCORE_MULTIPLIER as u64;
    let denominator = effective_time(elapsed_ticks) as u64 * effective_turns(moves) as u64;
    (numerator / denominator) as u32
}

/// Whole seconds elapsed.
pub fn elapsed_secs(elapsed_ticks: u32) -> u32 {
    elapsed_ticks / TICKS_PER_SECOND
}

/// `MM:SS` clock for the HUD. Minutes are not wrapped.
pub fn format_clock(elapsed_ticks: u32) -> String {
    let minutes = elapsed_ticks / (TICKS_PER_SECOND * 60);
    let seconds = elapsed_ticks / TICKS_PER_SECOND % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
