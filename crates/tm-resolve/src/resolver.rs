//! The augmenting-search resolver.
//!
//! # Scoring
//!
//! A search carries a running score down the chain of displaced agents:
//!
//! - landing an agent on its own requested cell adds 1;
//! - pushing an agent off the cell it requested subtracts 1.
//!
//! A chain is committed only when the agent at its end lands on a free cell
//! with a positive score.  Free cells that would leave the score at zero or
//! below are skipped, not taken: a displaced agent only moves when the whole
//! chain makes measurable progress.
//!
//! # Search shape
//!
//! Depth-first over candidate lists, first success wins, no backtracking
//! once a chain is committed.  The per-search visited set bounds the depth
//! by the number of agents in the area.  Frames live on an explicit stack so
//! large crowds cannot exhaust the native call stack.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use tm_agent::{AgentRngs, AgentStore};
use tm_core::{AgentId, Cell, ResolverConfig};
use tm_terrain::{CostMatrix, Terrain};

use crate::{AssignmentMap, Passability, ResolveError, ResolveResult, candidates};

// ── Public types ──────────────────────────────────────────────────────────────

/// Result of one augmenting search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A chain was committed; the score is always positive.
    Claimed(i32),
    /// No chain with a positive score exists from this agent.
    NoPath,
}

/// Counters for one resolve call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Agents in the area.
    pub agents:    usize,
    /// Agents whose requested cell differs from their current cell.
    pub pending:   usize,
    /// Augmenting searches started.
    pub searched:  usize,
    /// Searches that committed a chain.
    pub improved:  usize,
    /// Pending agents that ended on their requested cell.
    pub satisfied: usize,
    /// Agents left unsearched because the search budget ran out.
    pub deferred:  usize,
    /// Agents whose assigned cell differs from their current cell.
    pub moved:     usize,
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Resolves one area's intents into a collision-free assignment.
///
/// ```rust
/// use tm_agent::AgentStoreBuilder;
/// use tm_core::{AgentId, Cell, Direction};
/// use tm_resolve::Resolver;
/// use tm_terrain::OpenTerrain;
///
/// let (mut store, mut rngs) = AgentStoreBuilder::new(1)
///     .spawn(Cell::new(10, 10))
///     .build()
///     .unwrap();
/// store.register_move(AgentId(0), Direction::Right).unwrap();
///
/// let area: Vec<AgentId> = store.agent_ids().collect();
/// let report = Resolver::new(&OpenTerrain)
///     .resolve(&mut store, &mut rngs, &area)
///     .unwrap();
///
/// assert_eq!(store.assigned_cell[0], Cell::new(11, 10));
/// assert_eq!(report.satisfied, 1);
/// ```
pub struct Resolver<'t, T: ?Sized> {
    passability:  Passability<'t, T>,
    max_searches: Option<usize>,
}

impl<'t, T: Terrain + ?Sized> Resolver<'t, T> {
    /// Resolver with no cost matrix, the default threshold, and no budget.
    pub fn new(terrain: &'t T) -> Self {
        Self::from_config(terrain, None, &ResolverConfig::default())
    }

    pub fn from_config(terrain: &'t T, costs: Option<&'t CostMatrix>, config: &ResolverConfig) -> Self {
        Self {
            passability: Passability { terrain, costs, threshold: config.threshold },
            max_searches: config.max_searches,
        }
    }

    pub fn costs(mut self, costs: Option<&'t CostMatrix>) -> Self {
        self.passability.costs = costs;
        self
    }

    pub fn threshold(mut self, threshold: u8) -> Self {
        self.passability.threshold = threshold;
        self
    }

    pub fn max_searches(mut self, max_searches: Option<usize>) -> Self {
        self.max_searches = max_searches;
        self
    }

    /// Resolve the agents in `area` and write each one's result to
    /// `store.assigned_cell`.
    ///
    /// Agents outside `area` are pinned to their current cell: they block
    /// the cells they stand on and are never displaced, and their
    /// `assigned_cell` is not touched.
    ///
    /// # Errors
    ///
    /// Only for malformed input: an unknown or repeated agent in `area`, two
    /// agents of the store starting on the same cell, or an RNG table whose
    /// length differs from the store.  Failing to move an agent is not an
    /// error.
    pub fn resolve(
        &self,
        store: &mut AgentStore,
        rngs:  &mut AgentRngs,
        area:  &[AgentId],
    ) -> ResolveResult<ResolveReport> {
        validate(store, rngs, area)?;

        let mut report = ResolveReport { agents: area.len(), ..Default::default() };

        let map = {
            let mut ctx = ResolutionContext::new(store, rngs, &self.passability, area.len());
            ctx.seed(area);
            ctx.pin_outsiders(area);
            ctx.improve(area, self.max_searches, &mut report);
            ctx.map
        };

        for &agent in area {
            let i = agent.index();
            let cell = map.cell_of(agent).unwrap_or(store.current_cell[i]);
            store.assigned_cell[i] = cell;

            if cell != store.current_cell[i] {
                report.moved += 1;
            }
            if store.has_pending_move(agent) && store.requested_cell[i] == Some(cell) {
                report.satisfied += 1;
            }
        }

        debug!(
            agents    = report.agents,
            pending   = report.pending,
            searched  = report.searched,
            improved  = report.improved,
            satisfied = report.satisfied,
            deferred  = report.deferred,
            moved     = report.moved,
            "resolved traffic area",
        );
        Ok(report)
    }
}

fn validate(store: &AgentStore, rngs: &AgentRngs, area: &[AgentId]) -> ResolveResult<()> {
    if rngs.len() != store.count {
        return Err(ResolveError::AgentCountMismatch {
            expected: store.count,
            got:      rngs.len(),
            what:     "rngs",
        });
    }

    let mut seen: FxHashSet<AgentId> = FxHashSet::default();
    let mut starts: FxHashMap<Cell, AgentId> = FxHashMap::default();
    for &agent in area {
        if !store.contains(agent) {
            return Err(tm_core::TmError::AgentNotFound(agent).into());
        }
        if !seen.insert(agent) {
            return Err(ResolveError::DuplicateAgent(agent));
        }
        let cell = store.current_cell[agent.index()];
        if let Some(first) = starts.insert(cell, agent) {
            return Err(ResolveError::SharedStartCell { cell, first, second: agent });
        }
    }

    for agent in store.agent_ids().filter(|a| !seen.contains(a)) {
        let cell = store.current_cell[agent.index()];
        if let Some(first) = starts.insert(cell, agent) {
            return Err(ResolveError::SharedStartCell { cell, first, second: agent });
        }
    }
    Ok(())
}

// ── ResolutionContext ─────────────────────────────────────────────────────────

/// One suspended step of the depth-first search.
#[derive(Copy, Clone, Debug)]
struct Frame {
    agent:   AgentId,
    score:   i32,
    /// Index of the next candidate to try.
    next:    usize,
    /// Cell whose holder is being asked to make room for `agent`.
    pending: Option<Cell>,
}

/// All state scoped to a single `resolve` call.
struct ResolutionContext<'c, 't, T: ?Sized> {
    store:       &'c AgentStore,
    rngs:        &'c mut AgentRngs,
    passability: &'c Passability<'t, T>,
    map:         AssignmentMap,
    /// Agents visited by the current search.
    visited:     FxHashSet<AgentId>,
    /// Store agents outside the area.  Their cells are claimed but they are
    /// never asked to move.
    pinned:      FxHashSet<AgentId>,
    /// Candidate lists, generated at most once per agent per cycle.
    cache:       FxHashMap<AgentId, Vec<Cell>>,
    stack:       Vec<Frame>,
}

impl<'c, 't, T: Terrain + ?Sized> ResolutionContext<'c, 't, T> {
    fn new(
        store:       &'c AgentStore,
        rngs:        &'c mut AgentRngs,
        passability: &'c Passability<'t, T>,
        agents:      usize,
    ) -> Self {
        Self {
            store,
            rngs,
            passability,
            map:     AssignmentMap::with_capacity(agents),
            visited: FxHashSet::default(),
            pinned:  FxHashSet::default(),
            cache:   FxHashMap::default(),
            stack:   Vec::new(),
        }
    }

    /// Step 1: every agent holds the cell it stands on.
    fn seed(&mut self, area: &[AgentId]) {
        for &agent in area {
            self.map.claim(agent, self.store.current_cell[agent.index()]);
        }
    }

    /// Claim the cells of every store agent outside `area` and pin them.
    fn pin_outsiders(&mut self, area: &[AgentId]) {
        if area.len() == self.store.count {
            return;
        }
        let inside: FxHashSet<AgentId> = area.iter().copied().collect();
        for agent in self.store.agent_ids().filter(|a| !inside.contains(a)) {
            self.map.claim(agent, self.store.current_cell[agent.index()]);
            self.pinned.insert(agent);
        }
    }

    /// Step 2: one augmenting search per agent that still wants to move.
    fn improve(&mut self, area: &[AgentId], max_searches: Option<usize>, report: &mut ResolveReport) {
        for &agent in area {
            if self.store.has_pending_move(agent) {
                report.pending += 1;
            }

            let Some(requested) = self.store.requested_cell[agent.index()] else {
                continue;
            };
            if self.map.cell_of(agent) == Some(requested) {
                continue;
            }
            if max_searches.is_some_and(|max| report.searched >= max) {
                report.deferred += 1;
                continue;
            }
            report.searched += 1;

            let prior = self.map.release(agent);
            self.visited.clear();

            match self.augment(agent) {
                SearchOutcome::Claimed(score) => {
                    report.improved += 1;
                    trace!(%agent, score, "augmenting chain committed");
                }
                SearchOutcome::NoPath => {
                    if let Some(prior) = prior {
                        self.map.claim(agent, prior);
                    }
                    trace!(%agent, "no augmenting chain");
                }
            }
        }
    }

    /// Step 3: depth-first search for a chain of moves that lets `root` in.
    fn augment(&mut self, root: AgentId) -> SearchOutcome {
        self.stack.clear();
        self.enter(root, 0);

        let mut returned: Option<SearchOutcome> = None;

        while let Some(frame) = self.stack.last().copied() {
            let top = self.stack.len() - 1;

            match returned.take() {
                Some(SearchOutcome::Claimed(score)) => {
                    // The holder of `pending` has moved on; take its cell.
                    if let Some(cell) = frame.pending {
                        self.map.claim(frame.agent, cell);
                    }
                    self.stack.pop();
                    returned = Some(SearchOutcome::Claimed(score));
                    continue;
                }
                Some(SearchOutcome::NoPath) => self.stack[top].pending = None,
                None => {}
            }

            let Some(cell) = self.candidate_at(frame.agent, frame.next) else {
                self.stack.pop();
                returned = Some(SearchOutcome::NoPath);
                continue;
            };
            self.stack[top].next += 1;

            let incoming = frame.score + i32::from(self.requested(frame.agent) == Some(cell));

            match self.map.occupant(cell) {
                None if incoming > 0 => {
                    self.map.claim(frame.agent, cell);
                    self.stack.pop();
                    returned = Some(SearchOutcome::Claimed(incoming));
                }
                None => {}
                Some(holder)
                    if !self.visited.contains(&holder) && !self.pinned.contains(&holder) =>
                {
                    let displaced = incoming - i32::from(self.requested(holder) == Some(cell));
                    self.stack[top].pending = Some(cell);
                    self.enter(holder, displaced);
                }
                Some(_) => {}
            }
        }

        returned.unwrap_or(SearchOutcome::NoPath)
    }

    fn enter(&mut self, agent: AgentId, score: i32) {
        self.visited.insert(agent);
        if !self.cache.contains_key(&agent) {
            let cells = candidates(agent, self.store, self.passability, self.rngs.get_mut(agent));
            self.cache.insert(agent, cells);
        }
        self.stack.push(Frame { agent, score, next: 0, pending: None });
    }

    #[inline]
    fn candidate_at(&self, agent: AgentId, index: usize) -> Option<Cell> {
        self.cache.get(&agent).and_then(|cells| cells.get(index)).copied()
    }

    #[inline]
    fn requested(&self, agent: AgentId) -> Option<Cell> {
        self.store.requested_cell[agent.index()]
    }
}
