//! Per-agent candidate cells, in the order the search should try them.

use tm_agent::AgentStore;
use tm_core::{AgentId, AgentRng, Cell};
use tm_terrain::{CostMatrix, Terrain};

/// The terrain-side filter applied to every candidate cell.
pub struct Passability<'t, T: ?Sized> {
    pub terrain:   &'t T,
    /// `None` treats every cell as cheaper than `threshold`.
    pub costs:     Option<&'t CostMatrix>,
    pub threshold: u8,
}

impl<T: Terrain + ?Sized> Passability<'_, T> {
    /// `true` if the cell is walkable and cheaper than the threshold.
    #[inline]
    pub fn allows(&self, cell: Cell) -> bool {
        self.terrain.is_passable(cell)
            && self.costs.is_none_or(|m| m.get(cell) < self.threshold)
    }
}

/// Cells `agent` is willing to occupy this cycle, best first.
///
/// - immovable (obstacle or fatigued): `[current]`
/// - with a usable request: `[requested, current]`
/// - with an unusable request (impassable terrain, or its own cell): `[current]`
/// - otherwise: `[current]` followed by the shuffled in-range neighbours and
///   then the shuffled out-of-range neighbours (see [`neighbor_tiers`]).
///
/// The current cell is always present, so an agent displaced by nobody can
/// always fall back to staying.
pub fn candidates<T: Terrain + ?Sized>(
    agent:       AgentId,
    store:       &AgentStore,
    passability: &Passability<'_, T>,
    rng:         &mut AgentRng,
) -> Vec<Cell> {
    let here = store.current_cell[agent.index()];

    if store.is_immovable(agent) {
        return vec![here];
    }

    if let Some(requested) = store.requested_cell[agent.index()] {
        // Costs only rank exploration; an explicit request ignores them.
        if requested != here && passability.terrain.is_passable(requested) {
            return vec![requested, here];
        }
        return vec![here];
    }

    let (mut in_range, mut out_of_range) = neighbor_tiers(agent, store, passability);
    rng.shuffle(&mut in_range);
    rng.shuffle(&mut out_of_range);

    let mut cells = Vec::with_capacity(1 + in_range.len() + out_of_range.len());
    cells.push(here);
    cells.extend(in_range);
    cells.extend(out_of_range);
    cells
}

/// Walkable, non-edge neighbours of the agent's current cell, split into
/// those inside its working area and those outside it.  Unshuffled.
///
/// Without a working area every neighbour is in range.
pub fn neighbor_tiers<T: Terrain + ?Sized>(
    agent:       AgentId,
    store:       &AgentStore,
    passability: &Passability<'_, T>,
) -> (Vec<Cell>, Vec<Cell>) {
    let here = store.current_cell[agent.index()];
    let area = store.working_area[agent.index()];

    let mut in_range = Vec::with_capacity(8);
    let mut out_of_range = Vec::new();

    for cell in here.neighbors() {
        if cell.is_edge() || !passability.allows(cell) {
            continue;
        }
        match area {
            Some(area) if !area.contains(cell) => out_of_range.push(cell),
            _ => in_range.push(cell),
        }
    }

    (in_range, out_of_range)
}
