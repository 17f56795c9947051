//! Engine module: sentinel-bordered grid, the slam kernels and the game
//! rules on top of them. Public API stays small.
//!
//! - `Grid` is the bounds-checked board with row-major iterators.
//! - `Game` owns a grid, spawns tiles and decides when play ends.
//! - Internals (scan descriptor and squash/combine) live in `ops`.

mod direction;
mod error;
mod game;
mod grid;
mod ops;

pub use direction::Direction;
pub use error::{GameError, Result};
pub use game::{Game, GameState};
pub use grid::{Cell, EDGE, EMPTY, Grid, Pos};
