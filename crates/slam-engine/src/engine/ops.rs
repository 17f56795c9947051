use super::direction::Direction;
use super::grid::{Cell, EMPTY, Grid, Pos};

/// How to walk the board for one slam direction.
///
/// The kernels below are written as if they slide along rows towards
/// `start`. Vertical slams swap the coordinates handed back by [`Scan::pos`],
/// so the same loop walks columns instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Number of lines in the transformed frame.
    lines: usize,
    /// Cells per line.
    len: usize,
    start: isize,
    step: isize,
    transposed: bool,
}

impl Scan {
    pub(crate) fn new(direction: Direction, width: usize, height: usize) -> Self {
        let transposed = direction.is_vertical();
        let (lines, len) = if transposed {
            (width, height)
        } else {
            (height, width)
        };
        let (start, step) = match direction {
            Direction::Left | Direction::Up => (0, 1),
            Direction::Right | Direction::Down => (len as isize - 1, -1),
        };
        Self {
            lines,
            len,
            start,
            step,
            transposed,
        }
    }

    #[inline]
    fn contains(&self, i: isize) -> bool {
        0 <= i && i < self.len as isize
    }

    #[inline]
    fn pos(&self, line: usize, i: isize) -> Pos {
        let i = i as usize;
        if self.transposed {
            (i, line)
        } else {
            (line, i)
        }
    }

    /// Last index a combine may start from: the far end has no partner.
    #[inline]
    fn can_pair(&self, i: isize) -> bool {
        if self.step > 0 {
            i < self.len as isize - 1
        } else {
            i > 0
        }
    }
}

/// Slide every tile as far towards `start` as it goes, without merging.
///
/// ```text
/// 0 0 0        0 0 0
/// 0 1 0   ==>  1 0 0
/// 1 0 1        1 1 0
/// ```
/// for a left squash.
pub(crate) fn squash(grid: &mut Grid, scan: &Scan) {
    for line in 0..scan.lines {
        let mut curr = scan.start;
        let mut last_empty = scan.start;

        // `last_empty` trails `curr` and marks the slot nearest `start` that
        // may still be free.
        while scan.contains(curr) && scan.contains(last_empty) {
            let target = scan.pos(line, last_empty);
            if grid.at(target) == EMPTY {
                let source = scan.pos(line, curr);
                let value = grid.at(source);
                if value > EMPTY {
                    grid.put(target, value);
                    grid.put(source, EMPTY);
                    last_empty += scan.step;
                }
            } else {
                last_empty += scan.step;
            }
            curr += scan.step;
        }
    }
}

/// Merge adjacent equal tiles once, leaving gaps for the next squash.
///
/// ```text
/// 1 1 0 0        2 0 0 0
/// 1 1 1 1   ==>  2 0 2 0
/// 1 1 1 0        2 0 1 0
/// ```
/// for a left combine.
pub(crate) fn combine(grid: &mut Grid, scan: &Scan) {
    for line in 0..scan.lines {
        let mut curr = scan.start;
        while scan.can_pair(curr) {
            let here = scan.pos(line, curr);
            let next = scan.pos(line, curr + scan.step);
            let value: Cell = grid.at(here);

            if value != EMPTY && value == grid.at(next) {
                grid.put(here, value.saturating_mul(2));
                grid.put(next, EMPTY);
                // the partner is empty now
                curr += scan.step * 2;
            } else {
                curr += scan.step;
            }
        }
    }
}

/// Squash, combine, squash. No spawn.
pub(crate) fn shift(grid: &mut Grid, direction: Direction) {
    let scan = Scan::new(direction, grid.width(), grid.height());
    squash(grid, &scan);
    combine(grid, &scan);
    squash(grid, &scan);
}
