//! Cycle counter and resolver configuration.
//!
//! Resolution runs once per scheduling cycle.  Nothing inside the resolver
//! survives from one cycle to the next; the `Cycle` counter only exists so
//! drivers and observers can label their output.

use std::fmt;

/// Cost at or above which a cell is never entered.
pub const DEFAULT_COST_THRESHOLD: u8 = 255;

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing scheduling-cycle counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// The cycle after `self`.
    #[inline]
    pub fn next(self) -> Cycle {
        Cycle(self.0 + 1)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

// ── ResolverConfig ────────────────────────────────────────────────────────────

/// Tunables for one traffic area.
///
/// Typically built in code or deserialised (with the `serde` feature) by the
/// application and handed to the cycle driver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Neighbour cells whose cost is `>= threshold` are never offered as
    /// candidates.  Default: 255.
    pub threshold: u8,

    /// Master RNG seed.  The same seed always produces identical shuffles.
    pub seed: u64,

    /// Upper bound on augmenting searches started per cycle.  `None` means
    /// every pending agent gets one search.  Agents past the budget keep
    /// their current cell for the cycle.
    pub max_searches: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold:    DEFAULT_COST_THRESHOLD,
            seed:         0,
            max_searches: None,
        }
    }
}
