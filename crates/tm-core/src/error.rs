//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TmError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{AgentId, Cell};

/// The top-level error type for `tm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TmError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("coordinate ({x}, {y}) is outside the grid")]
    CellOutOfBounds { x: i32, y: i32 },

    #[error("cell {cell} is already occupied by {occupant}")]
    CellOccupied { cell: Cell, occupant: AgentId },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tm-*` crates.
pub type TmResult<T> = Result<T, TmError>;
