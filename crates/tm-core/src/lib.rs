//! `tm-core`: foundational types for the `rust_tm` grid traffic resolver.
//!
//! This crate is a dependency of every other `tm-*` crate.  It intentionally
//! has no `tm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, `GRID_SIZE`, Chebyshev range                  |
//! | [`direction`]   | `Direction` (the eight compass steps)                 |
//! | [`cycle`]       | `Cycle`, `ResolverConfig`                             |
//! | [`rng`]         | `AgentRng` (per-agent)                                |
//! | [`error`]       | `TmError`, `TmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod cycle;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CELL_COUNT, Cell, GRID_SIZE};
pub use cycle::{Cycle, DEFAULT_COST_THRESHOLD, ResolverConfig};
pub use direction::Direction;
pub use error::{TmError, TmResult};
pub use ids::AgentId;
pub use rng::AgentRng;
