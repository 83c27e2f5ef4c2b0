//! The `TrafficManager` struct and its cycle loop.

use tracing::debug;

use tm_agent::{AgentRngs, AgentStore};
use tm_core::{AgentId, Cycle, ResolverConfig, TmResult};
use tm_resolve::{Move, Resolver, emit_moves};
use tm_terrain::{CostMatrix, Terrain};

use crate::{CycleObserver, SimResult};

/// Owns one traffic area and drives it cycle by cycle.
///
/// Each cycle runs four phases:
///
/// 1. **Resolve**: every agent's intent goes through the [`Resolver`]; the
///    result lands in `agents.assigned_cell`.
/// 2. **Emit**: agents whose assigned cell differs from their current cell
///    become [`Move`]s.
/// 3. **Apply**: each move is written to `agents.current_cell`.
/// 4. **Reset**: per-cycle intents are cleared and the cycle counter
///    advances.
///
/// Intents are registered between cycles directly on `agents`:
///
/// ```rust,ignore
/// tm.agents.register_move(agent, Direction::Top)?;
/// let moves = tm.run_cycle(&mut NoopObserver)?;
/// ```
///
/// Create via [`TrafficManagerBuilder`][crate::TrafficManagerBuilder].
pub struct TrafficManager<T: Terrain> {
    pub config: ResolverConfig,

    /// Cycle about to run.  Starts at [`Cycle::ZERO`].
    pub cycle: Cycle,

    /// Positions and intents (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub terrain: T,

    /// Optional per-cell costs checked against `config.threshold`.
    pub costs: Option<CostMatrix>,
}

impl<T: Terrain> TrafficManager<T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Resolve, emit, and apply one cycle for every agent, returning the
    /// moves that were applied.
    pub fn run_cycle<O: CycleObserver>(&mut self, observer: &mut O) -> SimResult<Vec<Move>> {
        let area: Vec<AgentId> = self.agents.agent_ids().collect();
        self.run_area(&area, observer)
    }

    /// Same as [`run_cycle`][Self::run_cycle] but only for the agents in
    /// `area`.  Everyone else keeps their cell; every agent's intents are
    /// still cleared at the end of the cycle.
    pub fn run_area<O: CycleObserver>(
        &mut self,
        area:     &[AgentId],
        observer: &mut O,
    ) -> SimResult<Vec<Move>> {
        let now = self.cycle;
        observer.on_cycle_start(now);

        // ── Resolve ───────────────────────────────────────────────────────
        let resolver = Resolver::from_config(&self.terrain, self.costs.as_ref(), &self.config);
        let report = resolver.resolve(&mut self.agents, &mut self.rngs, area)?;
        observer.on_resolved(now, &report);

        // ── Emit ──────────────────────────────────────────────────────────
        let moves = emit_moves(&self.agents, area);
        observer.on_moves(now, &moves);

        // ── Apply ─────────────────────────────────────────────────────────
        for m in &moves {
            self.agents.current_cell[m.agent.index()] = m.to;
        }
        for &agent in area {
            let i = agent.index();
            self.agents.assigned_cell[i] = self.agents.current_cell[i];
        }

        // ── Reset ─────────────────────────────────────────────────────────
        self.agents.clear_intents();

        debug!(
            cycle     = %now,
            agents    = area.len(),
            pending   = report.pending,
            satisfied = report.satisfied,
            moved     = moves.len(),
            "cycle complete",
        );

        observer.on_cycle_end(now, &self.agents);
        self.cycle = now.next();
        Ok(moves)
    }

    /// Run `n` cycles, calling `plan` before each one to register that
    /// cycle's intents.  Returns the total number of applied moves.
    pub fn run_cycles<P, O>(&mut self, n: u64, mut plan: P, observer: &mut O) -> SimResult<usize>
    where
        P: FnMut(Cycle, &mut AgentStore) -> TmResult<()>,
        O: CycleObserver,
    {
        let mut moved = 0;
        for _ in 0..n {
            plan(self.cycle, &mut self.agents)?;
            moved += self.run_cycle(observer)?.len();
        }
        Ok(moved)
    }
}
