//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary used throughout the application.
//! All types are pure data with no external dependencies, so they can be used by the
//! engine, the terminal front end and the persistence layer alike.
//!
//! # Board Dimensions
//!
//! Boards are `rows x cols` grids of pipe tiles:
//!
//! - **Rows**: 9 to 18
//! - **Columns**: 9 to 36
//! - **Start**: always the top-left cell `(0, 0)`
//! - **End**: always the bottom-right cell `(cols - 1, rows - 1)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Fixed simulation steps per second |
//! | `TICK_MICROS` | 16_666 | Wall-clock length of one step |
//!
//! # Examples
//!
//! ```
//! use tui_pipes_types::{Angle, Direction, PipeKind};
//!
//! let angle = Angle::Deg0;
//! assert_eq!(angle.rotate_ccw(), Angle::Deg90);
//! assert_eq!(angle.rotate_cw(), Angle::Deg270);
//!
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//! assert!(PipeKind::Start.is_fixed());
//! ```

/// Smallest allowed number of rows.
pub const MIN_ROWS: u8 = 9;

/// Largest allowed number of rows.
pub const MAX_ROWS: u8 = 18;

/// Smallest allowed number of columns.
pub const MIN_COLS: u8 = 9;

/// Largest allowed number of columns.
pub const MAX_COLS: u8 = 36;

/// Fixed simulation steps per second. Also the divisor used by scoring.
pub const TICKS_PER_SECOND: u32 = 60;

/// Length of one simulation step in microseconds (1s / 60).
pub const TICK_MICROS: u64 = 1_000_000 / TICKS_PER_SECOND as u64;

/// Scoring numerator multiplier (`rows² * cols² * SCORE_MULTIPLIER`).
pub const SCORE_MULTIPLIER: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_bounds_defaults() {
        assert_eq!(MIN_ROWS, 9);
        assert_eq!(MAX_ROWS, 18);
        assert_eq!(MIN_COLS, 9);
        assert_eq!(MAX_COLS, 36);
        assert_eq!(TICKS_PER_SECOND, 60);
        assert_eq!(TICK_MICROS, 16_666);
    }

    #[test]
    fn angle_cycles() {
        let mut a = Angle::Deg0;
        for _ in 0..4 {
            a = a.rotate_ccw();
        }
        assert_eq!(a, Angle::Deg0);
        assert_eq!(Angle::Deg90.rotate_cw().rotate_ccw(), Angle::Deg90);
        assert_eq!(Angle::from_degrees(450), None);
        assert_eq!(Angle::from_degrees(270), Some(Angle::Deg270));
    }

    #[test]
    fn direction_rotation_matches_angle_direction() {
        assert_eq!(Direction::Right.rotated_ccw(), Direction::Up);
        assert_eq!(Direction::Up.rotated_ccw(), Direction::Left);
        assert_eq!(Direction::Left.rotated_ccw(), Direction::Down);
        assert_eq!(Direction::Down.rotated_ccw(), Direction::Right);
        assert_eq!(Direction::Right.rotated_by(Angle::Deg270), Direction::Down);
    }

    #[test]
    fn menu_items_wrap() {
        assert_eq!(MenuItem::Play.prev(), MenuItem::Quit);
        assert_eq!(MenuItem::Quit.next(), MenuItem::Play);
        assert_eq!(MenuItem::Rows.next(), MenuItem::Columns);
        assert!(MenuItem::Columns.is_adjustable());
        assert!(!MenuItem::Leaderboard.is_adjustable());
    }
}

/// The four axis directions water can travel in.
///
/// When used as a flow query input, the direction is the direction of travel
/// that brought water into a cell (moving `Right` means it entered through the
/// cell's left side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Grid step `(dx, dy)` for one cell of travel. `y` grows downwards.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Quarter turn counter-clockwise (Right -> Up -> Left -> Down).
    pub fn rotated_ccw(&self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    /// Rotate counter-clockwise by a tile angle.
    pub fn rotated_by(&self, angle: Angle) -> Self {
        let mut d = *self;
        for _ in 0..angle.quarter_turns() {
            d = d.rotated_ccw();
        }
        d
    }
}

/// Pipe shapes a tile can hold.
///
/// - **Start**: single outlet, origin of the water path
/// - **End**: single inlet, reaching it solves the puzzle
/// - **Straight**: two opposite sides
/// - **Bend**: two adjacent sides
/// - **Cross**: two bends overlaid on opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeKind {
    Start,
    End,
    Straight,
    Bend,
    Cross,
}

impl PipeKind {
    /// Kinds placed on non-fixed cells at generation time.
    pub const PLAYABLE: [PipeKind; 3] = [PipeKind::Straight, PipeKind::Bend, PipeKind::Cross];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipeKind::Start => "start",
            PipeKind::End => "end",
            PipeKind::Straight => "straight",
            PipeKind::Bend => "bend",
            PipeKind::Cross => "cross",
        }
    }

    /// Start and End never move between cells.
    pub fn is_fixed(&self) -> bool {
        matches!(self, PipeKind::Start | PipeKind::End)
    }
}

/// Tile orientation, counter-clockwise from the kind's canonical drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Angle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub const ALL: [Angle; 4] = [Angle::Deg0, Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Rotate clockwise (angle decreases by 90, mod 360)
    ///
    /// ```
    /// use tui_pipes_types::Angle;
    ///
    /// assert_eq!(Angle::Deg0.rotate_cw(), Angle::Deg270);
    /// assert_eq!(Angle::Deg270.rotate_cw(), Angle::Deg180);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Angle::Deg0 => Angle::Deg270,
            Angle::Deg270 => Angle::Deg180,
            Angle::Deg180 => Angle::Deg90,
            Angle::Deg90 => Angle::Deg0,
        }
    }

    /// Rotate counter-clockwise (angle increases by 90, mod 360)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Angle::Deg0 => Angle::Deg90,
            Angle::Deg90 => Angle::Deg180,
            Angle::Deg180 => Angle::Deg270,
            Angle::Deg270 => Angle::Deg0,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Angle::Deg0 => 0,
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }

    /// Only the four cardinal values are accepted.
    pub fn from_degrees(deg: u16) -> Option<Self> {
        match deg {
            0 => Some(Angle::Deg0),
            90 => Some(Angle::Deg90),
            180 => Some(Angle::Deg180),
            270 => Some(Angle::Deg270),
            _ => None,
        }
    }

    pub fn quarter_turns(&self) -> u8 {
        (self.degrees() / 90) as u8
    }

    /// `angle % 180 == 0`; Straight and Cross only care about this parity.
    pub fn is_horizontal(&self) -> bool {
        self.degrees() % 180 == 0
    }
}

/// Result of asking a tile where water goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Water leaves the tile travelling in this direction.
    Travel(Direction),
    /// Water entered the End tile through its inlet.
    EndReached,
}

/// Actions that modify an in-progress game.
///
/// Used by both keyboard and mouse input; mouse clicks resolve to a cursor jump
/// followed by a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell
    Cursor(Direction),
    /// Rotate the tile under the cursor 90° clockwise
    RotateCw,
    /// Rotate the tile under the cursor 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// New puzzle with the same dimensions
    Restart,
    /// Leave to the main menu
    Menu,
}

/// Actions on the main menu and leaderboard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move the selection up
    Prev,
    /// Move the selection down
    Next,
    /// Activate the selected item
    Select,
    /// Change the selected size value by a signed step (±1 or ±5)
    Adjust(i8),
    /// Go back (leaderboard -> menu)
    Back,
}

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Play,
    Rows,
    Columns,
    Leaderboard,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Play,
        MenuItem::Rows,
        MenuItem::Columns,
        MenuItem::Leaderboard,
        MenuItem::Quit,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Next item, wrapping to the top.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous item, wrapping to the bottom.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Rows => "Rows",
            MenuItem::Columns => "Columns",
            MenuItem::Leaderboard => "Leaderboard",
            MenuItem::Quit => "Quit",
        }
    }

    /// Whether Left/Right change a value on this item.
    pub fn is_adjustable(&self) -> bool {
        matches!(self, MenuItem::Rows | MenuItem::Columns)
    }
}
