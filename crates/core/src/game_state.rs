//! Game state module - one puzzle session
//!
//! Ties together the grid, the flow trace and scoring. A session is created for a
//! board size, mutated by rotations and fixed-rate ticks, and discarded when the
//! player leaves to the menu. The water path is retraced after every rotation
//! since a single quarter turn can both make and break a solution.

use log::{debug, info};

use crate::error::CoreError;
use crate::flow::{trace_into, FlowOutcome, FlowPath};
use crate::grid::Grid;
use crate::records::RecordEntry;
use crate::rng::SimpleRng;
use crate::scoring::{calculate_score, elapsed_secs};
use crate::snapshot::GameSnapshot;
use crate::tile::Tile;
use crate::types::{Direction, GameAction};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    path: FlowPath,
    rng: SimpleRng,
    /// Monotonic puzzle id (increments on restart).
    episode_id: u32,
    cursor: (i8, i8),
    /// Fixed simulation steps while active (not paused, not solved).
    elapsed_ticks: u32,
    moves: u32,
    solved: bool,
    paused: bool,
    score: u32,
}

impl GameSession {
    /// Start a session on a freshly generated `rows x cols` board.
    pub fn new(rows: u8, cols: u8, seed: u32) -> Result<Self, CoreError> {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::generate(rows, cols, &mut rng)?;
        info!("new {}x{} puzzle (seed {})", rows, cols, seed);
        Ok(Self::with_rng(grid, rng))
    }

    /// Start a session on a prepared board.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_rng(grid, SimpleRng::default())
    }

    fn with_rng(grid: Grid, rng: SimpleRng) -> Self {
        let mut session = Self {
            grid,
            path: FlowPath::default(),
            rng,
            episode_id: 0,
            cursor: (0, 0),
            elapsed_ticks: 0,
            moves: 0,
            solved: false,
            paused: false,
            score: 0,
        };
        session.check_win();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    /// Water path as of the last rotation.
    pub fn path(&self) -> &FlowPath {
        &self.path
    }

    pub fn outcome(&self) -> FlowOutcome {
        self.path.outcome
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn cursor(&self) -> (i8, i8) {
        self.cursor
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rotation and timing only happen while this is true.
    pub fn is_active(&self) -> bool {
        !self.solved && !self.paused
    }

    /// Rotate the tile at (x, y), count the move and retrace.
    ///
    /// Returns `true` when this rotation solved the puzzle.
    pub fn rotate(&mut self, x: i8, y: i8, clockwise: bool) -> Result<bool, CoreError> {
        if self.solved {
            return Err(CoreError::GameFinished);
        }
        if self.paused {
            return Err(CoreError::Paused);
        }
        let tile = self.grid.rotate(x, y, clockwise)?;
        self.moves = self.moves.saturating_add(1);
        debug!(
            "rotate ({}, {}) {} -> {} {}",
            x,
            y,
            if clockwise { "cw" } else { "ccw" },
            tile.pipe.as_str(),
            tile.angle.degrees()
        );
        Ok(self.check_win())
    }

    /// Retrace the water. On the first trace that reaches End the session is
    /// marked solved and the score fixed. Returns `true` exactly then.
    pub fn check_win(&mut self) -> bool {
        trace_into(&self.grid, &mut self.path);
        if self.solved || !self.path.is_win() {
            return false;
        }

        self.solved = true;
        self.score = calculate_score(
            self.grid.rows(),
            self.grid.cols(),
            self.elapsed_ticks,
            self.moves,
        );
        info!(
            "solved in {} moves, {} ticks: score {}",
            self.moves, self.elapsed_ticks, self.score
        );
        true
    }

    /// Advance the clock by one fixed step. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        if !self.solved {
            self.paused = paused;
        }
    }

    /// Put the cursor on a cell.
    pub fn set_cursor(&mut self, x: i8, y: i8) -> Result<(), CoreError> {
        if !self.grid.in_bounds(x, y) {
            return Err(CoreError::InvalidCoordinate {
                x,
                y,
                cols: self.grid.cols(),
                rows: self.grid.rows(),
            });
        }
        self.cursor = (x, y);
        Ok(())
    }

    /// Move the cursor one cell, stopping at the edges.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let (x, y) = (self.cursor.0 + dx, self.cursor.1 + dy);
        self.set_cursor(x, y).is_ok()
    }

    /// Generate the next puzzle of the same size.
    pub fn restart(&mut self) {
        let seed = self.rng.state();
        let episode_id = self.episode_id.wrapping_add(1);
        let mut rng = SimpleRng::new(seed);
        // Dimensions come from a valid grid, so generation cannot fail.
        if let Ok(grid) = Grid::generate(self.grid.rows(), self.grid.cols(), &mut rng) {
            *self = Self::with_rng(grid, rng);
            self.episode_id = episode_id;
            info!("restart: puzzle #{} (seed {})", episode_id, seed);
        }
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// `GameAction::Menu` belongs to the screen layer and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Cursor(direction) => self.move_cursor(direction),
            GameAction::RotateCw | GameAction::RotateCcw => {
                let (x, y) = self.cursor;
                self.rotate(x, y, action == GameAction::RotateCw).is_ok()
            }
            GameAction::Pause => {
                if self.solved {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Menu => false,
        }
    }

    /// Leaderboard entry for a solved session.
    pub fn record_entry(&self, player: &str) -> Option<RecordEntry> {
        self.solved.then(|| RecordEntry {
            player: player.to_string(),
            score: self.score,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            elapsed_secs: elapsed_secs(self.elapsed_ticks),
            moves: self.moves,
        })
    }

    pub fn tile(&self, x: i8, y: i8) -> Option<Tile> {
        self.grid.get(x, y).copied()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.grid.tiles());
        out.water.clear();
        out.water.extend_from_slice(&self.path.steps);
        out.outcome = self.path.outcome;
        out.cursor = self.cursor;
        out.solved = self.solved;
        out.paused = self.paused;
        out.elapsed_ticks = self.elapsed_ticks;
        out.moves = self.moves;
        out.score = self.score;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
