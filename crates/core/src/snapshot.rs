use crate::flow::{FlowOutcome, FlowStep};
use crate::tile::Tile;

/// Render-facing copy of a session.
///
/// Kept separate from [`GameSession`](crate::GameSession) so views and tests can
/// build or tweak one freely. `snapshot_into` reuses the vectors between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major tiles (`y * cols + x`).
    pub tiles: Vec<Tile>,
    pub water: Vec<FlowStep>,
    pub outcome: FlowOutcome,
    pub cursor: (i8, i8),
    pub solved: bool,
    pub paused: bool,
    pub elapsed_ticks: u32,
    pub moves: u32,
    pub score: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn tile(&self, x: i8, y: i8) -> Option<Tile> {
        if x < 0 || y < 0 || x as u8 >= self.cols || y as u8 >= self.rows {
            return None;
        }
        self.tiles
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            tiles: Vec::new(),
            water: Vec::new(),
            outcome: FlowOutcome::Blocked,
            cursor: (0, 0),
            solved: false,
            paused: false,
            elapsed_ticks: 0,
            moves: 0,
            score: 0,
            episode_id: 0,
        }
    }
}
