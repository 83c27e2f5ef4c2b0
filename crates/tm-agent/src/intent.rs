//! Movement intents an agent can register before a cycle is resolved.

use tm_core::{Cell, Direction};

/// Where an agent wants to go this cycle.
///
/// Registered through [`AgentStore::register_move`][crate::AgentStore::register_move],
/// which normalises it into a single requested cell next to the agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveTarget {
    /// One step in a compass direction.  Steps off the grid are clamped back
    /// onto it, which can leave the agent requesting its own cell.
    Direction(Direction),

    /// A cell anywhere on the grid.  Targets more than one step away are
    /// replaced by the first step toward them.
    Cell(Cell),
}

impl MoveTarget {
    /// The adjacent (or identical) cell an agent at `from` should request.
    pub fn requested_from(self, from: Cell) -> Cell {
        match self {
            MoveTarget::Direction(dir) => {
                let (dx, dy) = dir.delta();
                Cell::clamped(from.x as i32 + dx as i32, from.y as i32 + dy as i32)
            }
            MoveTarget::Cell(target) if from.range_to(target) <= 1 => target,
            MoveTarget::Cell(target) => from.step_toward(target),
        }
    }
}

impl From<Direction> for MoveTarget {
    fn from(dir: Direction) -> Self {
        MoveTarget::Direction(dir)
    }
}

impl From<Cell> for MoveTarget {
    fn from(cell: Cell) -> Self {
        MoveTarget::Cell(cell)
    }
}

/// Preferred operating region: cells within `range` (Chebyshev) of `anchor`.
///
/// Only used to order candidates; cells outside the area are still offered,
/// after every cell inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingArea {
    pub anchor: Cell,
    pub range:  u8,
}

impl WorkingArea {
    #[inline]
    pub fn new(anchor: Cell, range: u8) -> Self {
        Self { anchor, range }
    }

    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        self.anchor.range_to(cell) <= self.range
    }
}
