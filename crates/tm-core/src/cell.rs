//! Grid cell coordinates.
//!
//! The world is a square grid of `GRID_SIZE × GRID_SIZE` cells.  `x` grows
//! to the right and `y` grows downward, so [`Direction::Top`] is `y - 1`.
//!
//! Distances are Chebyshev (king-move) distances: every one of the eight
//! neighbours of a cell is at range 1.

use std::fmt;

use crate::{Direction, TmError, TmResult};

/// Width and height of the grid, in cells.
pub const GRID_SIZE: u8 = 50;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE as usize * GRID_SIZE as usize;

const MAX_COORD: i32 = GRID_SIZE as i32 - 1;

/// A grid coordinate.  Always within `0..GRID_SIZE` on both axes when built
/// through [`Cell::try_new`] or [`Cell::clamped`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    /// Construct a cell from in-bounds coordinates.
    ///
    /// # Panics
    /// Panics in debug builds if either coordinate is `>= GRID_SIZE`.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < GRID_SIZE && y < GRID_SIZE);
        Self { x, y }
    }

    /// Bounds-checked constructor for coordinates coming from outside the
    /// grid's own arithmetic.
    pub fn try_new(x: i32, y: i32) -> TmResult<Cell> {
        if Self::in_bounds(x, y) {
            Ok(Cell { x: x as u8, y: y as u8 })
        } else {
            Err(TmError::CellOutOfBounds { x, y })
        }
    }

    /// Construct a cell, clamping each coordinate into the grid.
    #[inline]
    pub fn clamped(x: i32, y: i32) -> Cell {
        Cell {
            x: x.clamp(0, MAX_COORD) as u8,
            y: y.clamp(0, MAX_COORD) as u8,
        }
    }

    #[inline]
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..=MAX_COORD).contains(&x) && (0..=MAX_COORD).contains(&y)
    }

    /// `true` for cells on the outer ring of the grid.
    #[inline]
    pub fn is_edge(self) -> bool {
        let max = GRID_SIZE - 1;
        self.x == 0 || self.y == 0 || self.x == max || self.y == max
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn range_to(self, other: Cell) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `true` if `other` is one of the eight neighbours (not `self`).
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.range_to(other) == 1
    }

    /// The neighbour in direction `dir`, or `None` if it falls off the grid.
    pub fn offset(self, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.delta();
        let x = self.x as i32 + dx as i32;
        let y = self.y as i32 + dy as i32;
        Cell::try_new(x, y).ok()
    }

    /// All in-bounds neighbours, in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Direction::ALL.into_iter().filter_map(move |d| self.offset(d))
    }

    /// Direction of a single step from `self` to `other`.
    ///
    /// Returns `None` unless `other` is adjacent.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        if !self.is_adjacent(other) {
            return None;
        }
        Direction::from_delta(
            other.x as i32 - self.x as i32,
            other.y as i32 - self.y as i32,
        )
    }

    /// The first cell on a king-move line from `self` toward `target`.
    /// Returns `self` when `target == self`.
    pub fn step_toward(self, target: Cell) -> Cell {
        let dx = (target.x as i32 - self.x as i32).signum();
        let dy = (target.y as i32 - self.y as i32).signum();
        Cell::clamped(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Row-major index `x + GRID_SIZE * y`, for dense per-cell arrays.
    #[inline(always)]
    pub fn packed(self) -> usize {
        self.x as usize + GRID_SIZE as usize * self.y as usize
    }

    /// Inverse of [`packed`](Self::packed).
    pub fn from_packed(index: usize) -> Option<Cell> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = GRID_SIZE as usize;
        Some(Cell { x: (index % size) as u8, y: (index / size) as u8 })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
