//! `tm-resolve`: one-step, collision-free cell assignment for a crowd.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                          |
//! |-----------------|-------------------------------------------------------------------|
//! | [`candidates`]  | `candidates`, `neighbor_tiers`, `Passability`                     |
//! | [`assignment`]  | `AssignmentMap`: cell ↔ agent claims for one cycle               |
//! | [`resolver`]    | `Resolver`, `ResolveReport`, `SearchOutcome`                      |
//! | [`moves`]       | `Move`, `emit_moves`                                              |
//! | [`error`]       | `ResolveError`, `ResolveResult<T>`                                |
//!
//! # Resolution model
//!
//! 1. Every agent in the area claims the cell it stands on.  Agents of the
//!    store outside the area claim theirs too and are pinned there.
//! 2. Each agent with a pending request gives up its claim and runs an
//!    augmenting search: it tries its candidate cells in order, and when a
//!    cell is held by another agent, that agent is asked (transitively) to
//!    make room.  A chain is committed only if it nets a positive score,
//!    where reaching a requested cell is worth +1 and pushing an agent off
//!    its own requested cell costs 1.
//! 3. A failed search puts the agent back on the cell it held before.
//! 4. [`emit_moves`] turns the final assignment into one-step moves.
//!
//! The search is greedy and randomised.  It does not look for the assignment
//! that satisfies the most requests; it trades that for bounded work per
//! cycle (every search visits each agent at most once).

pub mod assignment;
pub mod candidates;
pub mod error;
pub mod moves;
pub mod resolver;


pub use assignment::AssignmentMap;
pub use candidates::{Passability, candidates, neighbor_tiers};
pub use error::{ResolveError, ResolveResult};
pub use moves::{Move, emit_moves};
pub use resolver::{ResolveReport, Resolver, SearchOutcome};
