//! Grid module - the rectangular board of pipe tiles
//!
//! Uses a flat row-major vector (`y * cols + x`) sized once at creation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row (top to
//! bottom). Start sits at (0, 0) and End at (cols - 1, rows - 1).

use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{Angle, PipeKind, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Check a requested board size against the configured bounds.
pub fn validate_dimensions(rows: u8, cols: u8) -> Result<(), CoreError> {
    if (MIN_ROWS..=MAX_ROWS).contains(&rows) && (MIN_COLS..=MAX_COLS).contains(&cols) {
        Ok(())
    } else {
        Err(CoreError::InvalidDimensions { rows, cols })
    }
}

/// The puzzle board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Generate a random board.
    ///
    /// Every non-fixed cell gets a kind from [`PipeKind::PLAYABLE`] and an angle,
    /// both uniform. Start and End are placed with angle 0.
    pub fn generate(rows: u8, cols: u8, rng: &mut SimpleRng) -> Result<Self, CoreError> {
        validate_dimensions(rows, cols)?;

        let len = rows as usize * cols as usize;
        let mut tiles = Vec::with_capacity(len);
        for _ in 0..len {
            let pipe = PipeKind::PLAYABLE[rng.next_range(PipeKind::PLAYABLE.len() as u32) as usize];
            let angle = Angle::ALL[rng.next_range(4) as usize];
            tiles.push(Tile::new(pipe, angle));
        }

        let mut grid = Self { rows, cols, tiles };
        grid.place_fixed();
        Ok(grid)
    }

    /// Fill a board with one tile, then place Start and End.
    pub fn filled(rows: u8, cols: u8, tile: Tile) -> Result<Self, CoreError> {
        validate_dimensions(rows, cols)?;
        let mut grid = Self {
            rows,
            cols,
            tiles: vec![tile; rows as usize * cols as usize],
        };
        grid.place_fixed();
        Ok(grid)
    }

    fn place_fixed(&mut self) {
        let (sx, sy) = self.start_pos();
        let (ex, ey) = self.end_pos();
        if let Some(idx) = self.index(sx, sy) {
            self.tiles[idx] = Tile::start();
        }
        if let Some(idx) = self.index(ex, ey) {
            self.tiles[idx] = Tile::end();
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn start_pos(&self) -> (i8, i8) {
        (0, 0)
    }

    pub fn end_pos(&self) -> (i8, i8) {
        (self.cols as i8 - 1, self.rows as i8 - 1)
    }

    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && (x as u8) < self.cols && (y as u8) < self.rows
    }

    /// Tile at (x, y), `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<&Tile> {
        self.index(x, y).map(|idx| &self.tiles[idx])
    }

    pub fn get_mut(&mut self, x: i8, y: i8) -> Option<&mut Tile> {
        self.index(x, y).map(move |idx| &mut self.tiles[idx])
    }

    /// Replace a tile. Fixed corners cannot be overwritten with another kind.
    pub fn set(&mut self, x: i8, y: i8, tile: Tile) -> Result<(), CoreError> {
        let idx = self.index(x, y).ok_or(CoreError::InvalidCoordinate {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        })?;
        if self.tiles[idx].pipe.is_fixed() != tile.pipe.is_fixed()
            || (tile.pipe.is_fixed() && self.tiles[idx].pipe != tile.pipe)
        {
            return Err(CoreError::FixedCell { x, y });
        }
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Rotate the tile at (x, y) by a quarter turn.
    pub fn rotate(&mut self, x: i8, y: i8, clockwise: bool) -> Result<Tile, CoreError> {
        let (cols, rows) = (self.cols, self.rows);
        let tile = self
            .get_mut(x, y)
            .ok_or(CoreError::InvalidCoordinate { x, y, cols, rows })?;
        tile.rotate(clockwise);
        Ok(*tile)
    }

    /// Row-major view of every tile.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate `(x, y, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i8, i8, &Tile)> + '_ {
        let cols = self.cols as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| ((i % cols) as i8, (i / cols) as i8, t))
    }
}
