//! Flow module - traces water from the Start tile
//!
//! The trace is a pure function of the grid: it reads the Start outlet, then asks
//! each tile in turn where the water goes, recording every cell it passes through.
//! It stops when the water is refused by a tile, leaves the board, or enters the
//! End tile through its inlet.
//!
//! Every tile maps distinct entry directions to distinct exits and the Start tile
//! accepts nothing, so the walk can never re-enter a (cell, travel direction) state
//! it already passed. The walk still keeps a visited set of those states and stops
//! as [`FlowOutcome::Blocked`] on a repeat, which caps it at `4 * rows * cols`
//! steps. Passing the same Cross twice through its two elbows is a normal path.

use log::trace;

use crate::grid::Grid;
use crate::types::{Angle, Direction, Flow, PipeKind};

/// One wet cell on the path.
///
/// `variant` is the pipe drawn with water. It is the tile's own kind, except for a
/// Cross whose lower elbow carries the water, which is recorded as `Bend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowStep {
    pub x: i8,
    pub y: i8,
    pub variant: PipeKind,
}

/// How a trace ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
    /// A tile refused the water (or the water looped).
    Blocked,
    /// The water left the board before reaching End.
    ExitedGrid,
    /// The water entered End through its inlet.
    ReachedEnd,
}

impl FlowOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, FlowOutcome::ReachedEnd)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowOutcome::Blocked => "blocked",
            FlowOutcome::ExitedGrid => "exitedGrid",
            FlowOutcome::ReachedEnd => "reachedEnd",
        }
    }
}

/// Result of one trace: the wet cells in order and how the water stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowPath {
    pub steps: Vec<FlowStep>,
    pub outcome: FlowOutcome,
}

impl FlowPath {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }

    /// Wet steps recorded for a cell (a Cross can appear twice).
    pub fn steps_at(&self, x: i8, y: i8) -> impl Iterator<Item = &FlowStep> + '_ {
        self.steps.iter().filter(move |s| s.x == x && s.y == y)
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.steps_at(x, y).next().is_some()
    }
}

impl Default for FlowPath {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            outcome: FlowOutcome::Blocked,
        }
    }
}

/// Trace the water through `grid`.
pub fn trace(grid: &Grid) -> FlowPath {
    let mut path = FlowPath::default();
    trace_into(grid, &mut path);
    path
}

/// Trace into an existing path, reusing its allocation.
pub fn trace_into(grid: &Grid, path: &mut FlowPath) {
    path.steps.clear();

    let (sx, sy) = grid.start_pos();
    let Some(start) = grid.get(sx, sy) else {
        path.outcome = FlowOutcome::Blocked;
        return;
    };
    path.steps.push(FlowStep {
        x: sx,
        y: sy,
        variant: PipeKind::Start,
    });

    let mut direction = start.outlet();
    let (dx, dy) = direction.delta();
    let (mut x, mut y) = (sx + dx, sy + dy);

    // (cell index, travel direction) states already walked.
    let cols = grid.cols() as usize;
    let mut visited = vec![0u8; grid.tiles().len()];

    let outcome = loop {
        let Some(tile) = grid.get(x, y) else {
            break FlowOutcome::ExitedGrid;
        };

        let bit = 1u8 << direction as u8;
        let cell = y as usize * cols + x as usize;
        if visited[cell] & bit != 0 {
            break FlowOutcome::Blocked;
        }
        visited[cell] |= bit;

        let Some(flow) = tile.exit_direction(direction) else {
            break FlowOutcome::Blocked;
        };

        path.steps.push(FlowStep {
            x,
            y,
            variant: water_variant(tile.pipe, tile.angle, flow),
        });

        match flow {
            Flow::EndReached => break FlowOutcome::ReachedEnd,
            Flow::Travel(next) => {
                direction = next;
                let (dx, dy) = next.delta();
                x += dx;
                y += dy;
            }
        }
    };

    path.outcome = outcome;
    trace!(
        "flow trace: {} cells, {}",
        path.steps.len(),
        outcome.as_str()
    );
}

/// Which drawing a wet cell uses.
fn water_variant(pipe: PipeKind, angle: Angle, flow: Flow) -> PipeKind {
    use Direction::*;

    if pipe != PipeKind::Cross {
        return pipe;
    }
    let Flow::Travel(exit) = flow else {
        return pipe;
    };
    let lower = matches!(
        (angle, exit),
        (Angle::Deg0, Down | Left)
            | (Angle::Deg90, Down | Right)
            | (Angle::Deg180, Up | Right)
            | (Angle::Deg270, Up | Left)
    );
    if lower {
        PipeKind::Bend
    } else {
        PipeKind::Cross
    }
}
