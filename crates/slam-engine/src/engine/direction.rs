use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A cardinal direction to slam tiles towards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Canonical order used whenever a caller does not pick directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Keys accepted by [`Direction::from_key`], sorted.
    pub const KEYS: [&'static str; 4] = ["h", "j", "k", "l"];

    /// `(row_delta, col_delta)` of one step in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Map a vi-style key (`h`, `j`, `k`, `l`) to a direction.
    ///
    /// ```
    /// use slam_engine::engine::Direction;
    /// assert_eq!(Direction::from_key("K"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key("x"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Direction> {
        match key.trim().to_ascii_lowercase().as_str() {
            "h" => Some(Direction::Left),
            "j" => Some(Direction::Down),
            "k" => Some(Direction::Up),
            "l" => Some(Direction::Right),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl TryFrom<(isize, isize)> for Direction {
    type Error = GameError;

    fn try_from(delta: (isize, isize)) -> Result<Self> {
        Direction::ALL
            .into_iter()
            .find(|d| d.delta() == delta)
            .ok_or_else(|| GameError::InvalidArgument(format!("invalid direction: {delta:?}")))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
