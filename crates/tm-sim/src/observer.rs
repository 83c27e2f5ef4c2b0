//! Cycle observer trait for progress reporting and data collection.

use tm_agent::AgentStore;
use tm_core::Cycle;
use tm_resolve::{Move, ResolveReport};

/// Callbacks invoked by [`TrafficManager::run_cycle`][crate::TrafficManager::run_cycle]
/// at key points in the cycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: stuck-agent counter
///
/// ```rust,ignore
/// struct Stuck { cycles_without_moves: u64 }
///
/// impl CycleObserver for Stuck {
///     fn on_moves(&mut self, _cycle: Cycle, moves: &[Move]) {
///         if moves.is_empty() {
///             self.cycles_without_moves += 1;
///         }
///     }
/// }
/// ```
pub trait CycleObserver {
    /// Called at the very start of each cycle, before anything is resolved.
    /// Intents registered for this cycle are already in the store.
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called once the assignment is written to `assigned_cell`.
    fn on_resolved(&mut self, _cycle: Cycle, _report: &ResolveReport) {}

    /// Called with the emitted moves, before they are applied.
    fn on_moves(&mut self, _cycle: Cycle, _moves: &[Move]) {}

    /// Called at the end of each cycle with the moved agents and cleared
    /// intents.
    fn on_cycle_end(&mut self, _cycle: Cycle, _agents: &AgentStore) {}
}

/// A [`CycleObserver`] that does nothing.
pub struct NoopObserver;

impl CycleObserver for NoopObserver {}

/// Running sums of every [`ResolveReport`] seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleTotals {
    pub cycles:    u64,
    pub pending:   usize,
    pub searched:  usize,
    pub improved:  usize,
    pub satisfied: usize,
    pub deferred:  usize,
    pub moved:     usize,
}

impl CycleObserver for CycleTotals {
    fn on_resolved(&mut self, _cycle: Cycle, report: &ResolveReport) {
        self.cycles    += 1;
        self.pending   += report.pending;
        self.searched  += report.searched;
        self.improved  += report.improved;
        self.satisfied += report.satisfied;
        self.deferred  += report.deferred;
        self.moved     += report.moved;
    }
}
