use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{GameError, Result};
use super::grid::{Cell, EMPTY, Grid, Pos};
use super::ops;

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    /// Goal reached or no move left. Terminal.
    Over,
}

/// One session: a grid plus the rules around it.
///
/// Randomness comes from `R`, so a seeded generator replays a game exactly.
///
/// ```
/// use slam_engine::engine::{Direction, Game};
/// let mut game = Game::seeded(4, 4, 2048, 2, 7).unwrap();
/// game.start();
/// game.slam(Direction::Left).unwrap();
/// assert!(game.best_value() >= 2);
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    goal: Cell,
    spawn_value: Cell,
    best_value: Cell,
    state: GameState,
    rng: R,
}

impl Game<StdRng> {
    /// New game seeded from OS entropy.
    pub fn new(width: isize, height: isize, goal: Cell, spawn_value: Cell) -> Result<Self> {
        Self::with_rng(width, height, goal, spawn_value, StdRng::from_entropy())
    }

    /// New game with a reproducible tile stream.
    pub fn seeded(
        width: isize,
        height: isize,
        goal: Cell,
        spawn_value: Cell,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(width, height, goal, spawn_value, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(
        width: isize,
        height: isize,
        goal: Cell,
        spawn_value: Cell,
        rng: R,
    ) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        Self::from_grid(grid, goal, spawn_value, rng)
    }

    /// Resume play on an existing board. `best_value` stays 0 until the
    /// first slam.
    ///
    /// An empty board is `NotStarted`. Any other board is `InProgress`, or
    /// `Over` right away when it already has no move left.
    pub fn from_grid(grid: Grid, goal: Cell, spawn_value: Cell, rng: R) -> Result<Self> {
        if spawn_value <= EMPTY {
            return Err(GameError::InvalidArgument(format!(
                "spawn value must be positive (got {spawn_value})"
            )));
        }
        let mut game = Self {
            grid,
            goal,
            spawn_value,
            best_value: 0,
            state: GameState::NotStarted,
            rng,
        };
        if game.grid.occupied_cells().next().is_some() {
            game.state = if game.is_over() {
                GameState::Over
            } else {
                GameState::InProgress
            };
        }
        Ok(game)
    }

    /// Place the two opening tiles. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.state != GameState::NotStarted {
            debug!("start() ignored in state {:?}", self.state);
            return;
        }
        self.place_random();
        self.place_random();
        self.state = GameState::InProgress;
        info!(
            "game started on {}x{} grid (goal {}, spawn {})",
            self.grid.width(),
            self.grid.height(),
            self.goal,
            self.spawn_value
        );
    }

    /// Play one turn: squash, combine, squash towards `direction`, then spawn
    /// a tile and refresh `best_value`.
    ///
    /// A board that does not change still gets a spawn. Once the game is over
    /// every further slam fails with [`GameError::GameOver`] and changes
    /// nothing.
    pub fn slam(&mut self, direction: Direction) -> Result<()> {
        if self.state == GameState::Over {
            return Err(GameError::GameOver);
        }

        ops::shift(&mut self.grid, direction);
        self.place_random();
        self.best_value = self.grid.cell_values().max().unwrap_or(EMPTY);
        debug!("slam {direction}: best value {}", self.best_value);

        self.state = if self.is_over() {
            info!(
                "game over: best value {} ({})",
                self.best_value,
                if self.goal_met() { "goal met" } else { "no moves left" }
            );
            GameState::Over
        } else {
            GameState::InProgress
        };
        Ok(())
    }

    /// Won or stuck.
    pub fn is_over(&self) -> bool {
        self.goal_met() || !self.any_can_move(&Direction::ALL)
    }

    pub fn goal_met(&self) -> bool {
        self.best_value >= self.goal
    }

    /// True if some cell is empty or has an empty or equal neighbour in one
    /// of `directions`.
    pub fn any_can_move(&self, directions: &[Direction]) -> bool {
        let (width, height) = (self.grid.width(), self.grid.height());
        (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .any(|pos| self.grid.at(pos) == EMPTY || self.position_can_move(pos, directions))
    }

    fn position_can_move(&self, (row, col): Pos, directions: &[Direction]) -> bool {
        let current = self.grid.at((row, col));
        self.grid
            .neighbors(row, col, directions)
            .map(|pos| self.grid.at(pos))
            .any(|value| value == EMPTY || value == current)
    }

    /// Put `spawn_value` on a uniformly chosen empty cell; a full board is
    /// left alone.
    fn place_random(&mut self) {
        let available: Vec<Pos> = self.grid.available_cells().collect();
        match available.choose(&mut self.rng) {
            Some(&pos) => {
                trace!("spawn {} at {:?}", self.spawn_value, pos);
                self.grid.put(pos, self.spawn_value);
            }
            None => trace!("board full, nothing spawned"),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn best_value(&self) -> Cell {
        self.best_value
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn spawn_value(&self) -> Cell {
        self.spawn_value
    }
}
