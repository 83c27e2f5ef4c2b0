//! Per-cell traversal costs.
//!
//! The resolver never sums costs; it only compares each neighbour's cost
//! against a threshold to decide whether the cell may be offered at all.
//! A cost of 255 therefore means "never enter" under the default threshold.

use tm_core::{CELL_COUNT, Cell};

use crate::{TerrainGrid, Tile};

/// Cost of a plain tile in [`CostMatrix::from_terrain`].
pub const PLAIN_COST: u8 = 1;
/// Cost of a swamp tile in [`CostMatrix::from_terrain`].
pub const SWAMP_COST: u8 = 5;
/// Cost that excludes a cell under the default threshold.
pub const BLOCKED_COST: u8 = u8::MAX;

/// Dense `u8` cost per cell, indexed by [`Cell::packed`].  All zero when
/// freshly constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    costs: Vec<u8>,
}

impl CostMatrix {
    pub fn new() -> Self {
        Self { costs: vec![0; CELL_COUNT] }
    }

    /// Costs derived from tile types: plain 1, swamp 5, wall 255.
    pub fn from_terrain(terrain: &TerrainGrid) -> Self {
        let costs = (0..CELL_COUNT)
            .map(|i| match Cell::from_packed(i).map(|c| terrain.tile(c)) {
                Some(Tile::Plain) => PLAIN_COST,
                Some(Tile::Swamp) => SWAMP_COST,
                Some(Tile::Wall) | None => BLOCKED_COST,
            })
            .collect();
        Self { costs }
    }

    /// Cost of `cell`.  Off-grid cells read as [`BLOCKED_COST`].
    #[inline]
    pub fn get(&self, cell: Cell) -> u8 {
        self.costs.get(cell.packed()).copied().unwrap_or(BLOCKED_COST)
    }

    #[inline]
    pub fn set(&mut self, cell: Cell, cost: u8) {
        if let Some(slot) = self.costs.get_mut(cell.packed()) {
            *slot = cost;
        }
    }

    /// Mark `cell` as never enterable.
    pub fn block(&mut self, cell: Cell) {
        self.set(cell, BLOCKED_COST);
    }
}

impl Default for CostMatrix {
    fn default() -> Self {
        Self::new()
    }
}
