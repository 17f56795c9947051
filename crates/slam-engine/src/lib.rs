//! slam-engine: the rules of a 2048-style sliding tile game on an arbitrary
//! rectangular grid.
//!
//! Quick start:
//! ```
//! use slam_engine::engine::{Direction, Game};
//!
//! // Deterministic session with a seeded tile stream
//! let mut game = Game::seeded(4, 4, 2048, 2, 42).unwrap();
//! game.start();
//!
//! while !game.is_over() {
//!     for dir in Direction::ALL {
//!         if game.slam(dir).is_err() {
//!             break;
//!         }
//!     }
//! }
//! println!("{}", game.grid());
//! ```

pub mod engine;

pub use engine::{Direction, Game, GameError, GameState, Grid};
