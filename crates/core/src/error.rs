use thiserror::Error;

/// Requests the engine refuses.
///
/// A tile that simply does not pass water is not an error; see
/// [`Tile::exit_direction`](crate::tile::Tile::exit_direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} board")]
    InvalidCoordinate { x: i8, y: i8, cols: u8, rows: u8 },

    #[error("board size {rows}x{cols} is outside the allowed range")]
    InvalidDimensions { rows: u8, cols: u8 },

    #[error("cell ({x}, {y}) holds a fixed start/end pipe")]
    FixedCell { x: i8, y: i8 },

    #[error("the puzzle is already solved")]
    GameFinished,

    #[error("the game is paused")]
    Paused,
}
