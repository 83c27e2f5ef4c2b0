//! Turning a resolved assignment into one-step move commands.

use tracing::warn;

use tm_agent::AgentStore;
use tm_core::{AgentId, Cell, Direction};

/// One agent stepping from `from` to the adjacent cell `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub agent:     AgentId,
    pub from:      Cell,
    pub to:        Cell,
    pub direction: Direction,
}

/// Moves for every agent in `area` whose `assigned_cell` differs from its
/// `current_cell`, in area order.  Agents staying put produce nothing.
pub fn emit_moves(store: &AgentStore, area: &[AgentId]) -> Vec<Move> {
    area.iter()
        .filter_map(|&agent| {
            let from = store.current_cell[agent.index()];
            let to = store.assigned_cell[agent.index()];
            if from == to {
                return None;
            }
            match from.direction_to(to) {
                Some(direction) => Some(Move { agent, from, to, direction }),
                None => {
                    warn!(%agent, %from, %to, "assigned cell is not adjacent; move dropped");
                    None
                }
            }
        })
        .collect()
}
