//! Core agent storage: `AgentStore` (SoA intent data) and `AgentRngs`.
//!
//! # Why two structs?
//!
//! The resolver reads intents from `&AgentStore` while drawing shuffles from
//! `&mut AgentRngs`, and writes `assigned_cell` back only after a search is
//! finished.  Keeping the RNGs in their own struct lets both borrows coexist
//! without cloning the intent arrays:
//!
//! ```ignore
//! let rng = rngs.get_mut(agent);
//! let cells = candidates(agent, &store, &passability, rng);
//! ```

use tm_core::{AgentId, AgentRng, Cell, TmError, TmResult};

use crate::{MoveTarget, WorkingArea};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// resolver can hold `&AgentStore` and `&mut AgentRngs` at the same time.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every agent's position and intents.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let here = store.current_cell[agent.index()];
/// ```
///
/// Intent fields (`requested_cell`, `working_area`, `obstacle`) are written
/// through the registration methods before a cycle is resolved.  The
/// resolver only ever writes `assigned_cell`.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Position ──────────────────────────────────────────────────────────
    /// Cell the agent stands on at the start of the cycle.
    pub current_cell: Vec<Cell>,

    // ── Intents ───────────────────────────────────────────────────────────
    /// Adjacent cell the agent asked to move to this cycle, if any.
    pub requested_cell: Vec<Option<Cell>>,

    /// Soft preference for where exploratory moves should land.
    pub working_area: Vec<Option<WorkingArea>>,

    /// Immovable for this cycle: the agent offers only its own cell.
    pub obstacle: Vec<bool>,

    /// Movement cooldown.  Any non-zero value pins the agent in place.
    pub fatigue: Vec<u32>,

    // ── Resolver output ───────────────────────────────────────────────────
    /// Cell assigned by the last resolve.  Equals `current_cell` until then.
    pub assigned_cell: Vec<Cell>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    fn slot(&self, agent: AgentId) -> TmResult<usize> {
        if self.contains(agent) {
            Ok(agent.index())
        } else {
            Err(TmError::AgentNotFound(agent))
        }
    }

    // ── Registration API ──────────────────────────────────────────────────

    /// Record that `agent` wants to move toward `target` this cycle.
    ///
    /// The target is normalised to a cell at most one step from the agent's
    /// current cell (see [`MoveTarget`]); the normalised cell is returned.
    /// A later call in the same cycle overwrites the earlier one.
    pub fn register_move(&mut self, agent: AgentId, target: impl Into<MoveTarget>) -> TmResult<Cell> {
        let i = self.slot(agent)?;
        let cell = target.into().requested_from(self.current_cell[i]);
        self.requested_cell[i] = Some(cell);
        Ok(cell)
    }

    /// Prefer exploratory moves that stay within `range` of `anchor`.
    pub fn set_working_area(&mut self, agent: AgentId, anchor: Cell, range: u8) -> TmResult<()> {
        let i = self.slot(agent)?;
        self.working_area[i] = Some(WorkingArea::new(anchor, range));
        Ok(())
    }

    /// Mark `agent` as immovable (or movable again) for this cycle.
    pub fn set_obstacle(&mut self, agent: AgentId, is_obstacle: bool) -> TmResult<()> {
        let i = self.slot(agent)?;
        self.obstacle[i] = is_obstacle;
        Ok(())
    }

    pub fn set_fatigue(&mut self, agent: AgentId, fatigue: u32) -> TmResult<()> {
        let i = self.slot(agent)?;
        self.fatigue[i] = fatigue;
        Ok(())
    }

    /// Teleport `agent` to `cell` (initial placement or external movement).
    ///
    /// Does not check occupancy; callers that move agents outside of the
    /// resolver must keep start cells distinct themselves.
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> TmResult<()> {
        let i = self.slot(agent)?;
        self.current_cell[i] = cell;
        self.assigned_cell[i] = cell;
        Ok(())
    }

    /// Drop every per-cycle intent: requested cells, working areas, and
    /// obstacle flags.  Fatigue is state, not intent, and is kept.
    pub fn clear_intents(&mut self) {
        self.requested_cell.fill(None);
        self.working_area.fill(None);
        self.obstacle.fill(false);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn is_fatigued(&self, agent: AgentId) -> bool {
        self.fatigue[agent.index()] > 0
    }

    /// `true` if the agent offers only its own cell this cycle.
    #[inline]
    pub fn is_immovable(&self, agent: AgentId) -> bool {
        self.obstacle[agent.index()] || self.is_fatigued(agent)
    }

    /// `true` if the agent requested a cell other than the one it is on.
    #[inline]
    pub fn has_pending_move(&self, agent: AgentId) -> bool {
        let i = agent.index();
        self.requested_cell[i].is_some_and(|c| c != self.current_cell[i])
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        let count = cells.len();
        Self {
            count,
            assigned_cell:  cells.clone(),
            current_cell:   cells,
            requested_cell: vec![None; count],
            working_area:   vec![None; count],
            obstacle:       vec![false; count],
            fatigue:        vec![0; count],
        }
    }
}
