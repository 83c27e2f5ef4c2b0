//! Fluent builder for constructing a [`TrafficManager`].

use tm_agent::{AgentRngs, AgentStore, AgentStoreBuilder};
use tm_core::{Cell, Cycle, ResolverConfig};
use tm_terrain::{CostMatrix, Terrain};

use crate::{SimError, SimResult, TrafficManager};

/// Fluent builder for [`TrafficManager<T>`].
///
/// # Required inputs
///
/// - `T: Terrain`, the passability oracle (e.g. [`tm_terrain::TerrainGrid`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.config(c)`            | `ResolverConfig::default()`      |
/// | `.costs(m)`             | No cost matrix                   |
/// | `.spawn(cell)`          | No agents                        |
/// | `.agents(store, rngs)`  | Built from the spawned cells     |
///
/// Spawned agents get RNGs seeded from `config.seed`.  A prebuilt store
/// passed to `.agents` replaces any spawned cells.
///
/// # Example
///
/// ```rust
/// use tm_core::{Cell, Direction};
/// use tm_sim::{NoopObserver, TrafficManagerBuilder};
/// use tm_terrain::TerrainGrid;
///
/// let mut tm = TrafficManagerBuilder::new(TerrainGrid::walled())
///     .spawn(Cell::new(5, 5))
///     .build()
///     .unwrap();
///
/// let agent = tm.agents.agent_ids().next().unwrap();
/// tm.agents.register_move(agent, Direction::Right).unwrap();
/// let moves = tm.run_cycle(&mut NoopObserver).unwrap();
///
/// assert_eq!(moves.len(), 1);
/// assert_eq!(tm.agents.current_cell[0], Cell::new(6, 5));
/// ```
pub struct TrafficManagerBuilder<T: Terrain> {
    terrain: T,
    config:  ResolverConfig,
    costs:   Option<CostMatrix>,
    cells:   Vec<Cell>,
    agents:  Option<(AgentStore, AgentRngs)>,
}

impl<T: Terrain> TrafficManagerBuilder<T> {
    pub fn new(terrain: T) -> Self {
        Self {
            terrain,
            config: ResolverConfig::default(),
            costs:  None,
            cells:  Vec::new(),
            agents: None,
        }
    }

    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Per-cell costs.  Cells at or above `config.threshold` are never
    /// entered.
    pub fn costs(mut self, costs: CostMatrix) -> Self {
        self.costs = Some(costs);
        self
    }

    /// Add one agent standing on `cell`.
    pub fn spawn(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn spawn_all(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.cells.extend(cells);
        self
    }

    /// Use an already-built store and RNG table.
    pub fn agents(mut self, store: AgentStore, rngs: AgentRngs) -> Self {
        self.agents = Some((store, rngs));
        self
    }

    /// Validate inputs and return a ready-to-run [`TrafficManager`].
    pub fn build(self) -> SimResult<TrafficManager<T>> {
        if self.config.max_searches == Some(0) {
            return Err(SimError::Config(
                "max_searches of 0 would never move anyone; use None for no limit".into(),
            ));
        }

        let (agents, rngs) = match self.agents {
            Some(prebuilt) => prebuilt,
            None => AgentStoreBuilder::new(self.config.seed)
                .spawn_all(self.cells)
                .build()?,
        };

        if rngs.len() != agents.count {
            return Err(SimError::AgentCountMismatch {
                expected: agents.count,
                got:      rngs.len(),
                what:     "rngs",
            });
        }

        for agent in agents.agent_ids() {
            let cell = agents.current_cell[agent.index()];
            if !self.terrain.is_passable(cell) {
                return Err(SimError::AgentOnWall { agent, cell });
            }
        }

        Ok(TrafficManager {
            config:  self.config,
            cycle:   Cycle::ZERO,
            agents,
            rngs,
            terrain: self.terrain,
            costs:   self.costs,
        })
    }
}
