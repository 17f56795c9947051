use std::fmt;

/// Failures surfaced by the grid and game APIs.
///
/// Every fallible operation checks its inputs before touching the board, so
/// an `Err` always means nothing was mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Non-positive dimensions, an unrecognized direction vector, or a tile
    /// value that cannot live on the board.
    InvalidArgument(String),
    /// A public coordinate outside `[0, height) x [0, width)`.
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    /// `slam` was called after the game already ended.
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GameError::OutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "invalid index (width = {width}, height = {height}): ({row}, {col})"
            ),
            GameError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
