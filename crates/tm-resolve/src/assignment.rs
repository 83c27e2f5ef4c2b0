//! The per-cycle cell ↔ agent claim table.

use rustc_hash::FxHashMap;

use tm_core::{AgentId, Cell};

/// Which agent holds which cell during one resolve.
///
/// Kept in both directions so "who is on this cell" and "where is this
/// agent" are both O(1).  At every point each cell has at most one agent and
/// each agent at most one cell; claiming a new cell releases the agent's
/// previous one.
#[derive(Debug, Default)]
pub struct AssignmentMap {
    by_cell:  FxHashMap<Cell, AgentId>,
    by_agent: FxHashMap<AgentId, Cell>,
}

impl AssignmentMap {
    pub fn with_capacity(agents: usize) -> Self {
        Self {
            by_cell:  FxHashMap::with_capacity_and_hasher(agents, Default::default()),
            by_agent: FxHashMap::with_capacity_and_hasher(agents, Default::default()),
        }
    }

    /// Agent currently claiming `cell`.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<AgentId> {
        self.by_cell.get(&cell).copied()
    }

    /// Cell currently claimed by `agent`.
    #[inline]
    pub fn cell_of(&self, agent: AgentId) -> Option<Cell> {
        self.by_agent.get(&agent).copied()
    }

    /// Give `cell` to `agent`, releasing whatever cell it held before.
    ///
    /// The cell must be free or already held by `agent`; the search only
    /// claims a held cell after its holder has moved elsewhere.
    pub fn claim(&mut self, agent: AgentId, cell: Cell) {
        if let Some(previous) = self.by_agent.insert(agent, cell) {
            if previous != cell && self.by_cell.get(&previous) == Some(&agent) {
                self.by_cell.remove(&previous);
            }
        }
        let displaced = self.by_cell.insert(cell, agent);
        debug_assert!(
            displaced.is_none_or(|d| d == agent),
            "{cell} claimed by {agent} while still held by {displaced:?}",
        );
    }

    /// Drop `agent`'s claim and return the cell it held.
    pub fn release(&mut self, agent: AgentId) -> Option<Cell> {
        let cell = self.by_agent.remove(&agent)?;
        if self.by_cell.get(&cell) == Some(&agent) {
            self.by_cell.remove(&cell);
        }
        Some(cell)
    }

    /// Number of claimed cells.
    pub fn len(&self) -> usize {
        self.by_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }

    /// `(agent, cell)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Cell)> + '_ {
        self.by_agent.iter().map(|(&a, &c)| (a, c))
    }
}
