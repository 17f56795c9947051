use std::fmt;

use super::direction::Direction;
use super::error::{GameError, Result};

/// A cell value. `EMPTY` or a positive tile value on the public grid.
pub type Cell = i64;

/// A public `(row, col)` coordinate.
pub type Pos = (usize, usize);

/// Marks the border ring of the backing store. Never visible to clients.
pub const EDGE: Cell = -1;
/// An unoccupied cell.
pub const EMPTY: Cell = 0;

/// Rectangular board of `width x height` cells.
///
/// The backing store is `(height + 2) x (width + 2)` with a ring of [`EDGE`]
/// around the playable area, so a public `(row, col)` lives at backing
/// `(row + 1, col + 1)` and a step off the board always lands on a sentinel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Fails unless both dimensions are positive.
    ///
    /// ```
    /// use slam_engine::engine::Grid;
    /// let g = Grid::new(4, 3).unwrap();
    /// assert_eq!(g.available_cells().count(), 12);
    /// assert!(Grid::new(0, 4).is_err());
    /// ```
    pub fn new(width: isize, height: isize) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidArgument(format!(
                "width and height must be greater than 0 (got {width} and {height})"
            )));
        }
        let (width, height) = (width as usize, height as usize);
        let stride = width + 2;
        // backing store must stay addressable: at most isize::MAX bytes
        let len = (height + 2)
            .checked_mul(stride)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or_else(|| {
                GameError::InvalidArgument(format!("grid of {width}x{height} cells is too large"))
            })?;
        let mut cells = vec![EDGE; len];
        for row in 1..=height {
            cells[row * stride + 1..row * stride + 1 + width].fill(EMPTY);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.range_check(row, col)?;
        Ok(self.at((row, col)))
    }

    /// Store `value` at `(row, col)` and return it.
    ///
    /// Negative values are rejected: they are not tiles, and `EDGE` in
    /// particular must never enter the public area.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<Cell> {
        self.range_check(row, col)?;
        if value < EMPTY {
            return Err(GameError::InvalidArgument(format!(
                "cell value must be non-negative (got {value})"
            )));
        }
        self.put((row, col), value);
        Ok(value)
    }

    /// All public cell values in row-major order.
    pub fn cell_values(&self) -> impl Iterator<Item = Cell> + '_ {
        self.positions().map(move |pos| self.at(pos))
    }

    /// Coordinates of every `EMPTY` cell, row-major.
    pub fn available_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.at(pos) == EMPTY)
    }

    /// Coordinates of every occupied cell, row-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| {
            let v = self.at(pos);
            v != EMPTY && v != EDGE
        })
    }

    /// On-board neighbours of `(row, col)` in the order of `directions`.
    ///
    /// Steps that land on the border are skipped, as is everything around a
    /// coordinate that is itself off the board.
    pub fn neighbors<'a>(
        &'a self,
        row: usize,
        col: usize,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = Pos> + 'a {
        directions.iter().filter_map(move |dir| {
            let (dr, dc) = dir.delta();
            let br = row.checked_add(1)?.checked_add_signed(dr)?;
            let bc = col.checked_add(1)?.checked_add_signed(dc)?;
            match self.backing(br, bc) {
                Some(v) if v != EDGE => Some((br - 1, bc - 1)),
                _ => None,
            }
        })
    }

    /// Row-major public coordinates.
    fn positions(&self) -> impl Iterator<Item = Pos> + 'static {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    fn range_check(&self, row: usize, col: usize) -> Result<()> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Backing-store lookup; `None` only outside the sentinel ring.
    #[inline]
    fn backing(&self, brow: usize, bcol: usize) -> Option<Cell> {
        let stride = self.width + 2;
        if bcol >= stride || brow >= self.height + 2 {
            return None;
        }
        Some(self.cells[brow * stride + bcol])
    }

    // Unchecked public-space access for the slam kernels. Callers guarantee
    // `pos` is on the board.
    #[inline]
    pub(crate) fn at(&self, (row, col): Pos) -> Cell {
        debug_assert!(row < self.height && col < self.width);
        self.cells[(row + 1) * (self.width + 2) + col + 1]
    }

    #[inline]
    pub(crate) fn put(&mut self, (row, col): Pos, value: Cell) {
        debug_assert!(row < self.height && col < self.width);
        let stride = self.width + 2;
        self.cells[(row + 1) * stride + col + 1] = value;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{:5}", self.at((row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
