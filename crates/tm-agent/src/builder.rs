//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use tm_agent::AgentStoreBuilder;
//! use tm_core::Cell;
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(Cell::new(10, 10))
//!     .spawn(Cell::new(10, 11))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use rustc_hash::FxHashMap;

use tm_core::{AgentId, Cell, TmError, TmResult};

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents receive sequential `AgentId`s in spawn order.
pub struct AgentStoreBuilder {
    seed:  u64,
    cells: Vec<Cell>,
}

impl AgentStoreBuilder {
    /// Create an empty builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, cells: Vec::new() }
    }

    /// Add one agent standing on `cell`.
    pub fn spawn(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Add one agent per cell, in iteration order.
    pub fn spawn_all(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.cells.extend(cells);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// # Errors
    ///
    /// [`TmError::CellOccupied`] if two agents were spawned on the same cell.
    pub fn build(self) -> TmResult<(AgentStore, AgentRngs)> {
        let mut seen: FxHashMap<Cell, AgentId> =
            FxHashMap::with_capacity_and_hasher(self.cells.len(), Default::default());
        for (i, &cell) in self.cells.iter().enumerate() {
            if let Some(&occupant) = seen.get(&cell) {
                return Err(TmError::CellOccupied { cell, occupant });
            }
            seen.insert(cell, AgentId(i as u32));
        }

        let rngs = AgentRngs::new(self.cells.len(), self.seed);
        let store = AgentStore::new(self.cells);
        Ok((store, rngs))
    }
}
