//! Terrain-subsystem error type.

use thiserror::Error;

use tm_core::{Cell, TmError};

/// Errors produced by `tm-terrain`.
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("unknown tile character {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },

    #[error("{width}x{height} patch at {origin} does not fit on the grid")]
    PatchOutOfBounds { origin: Cell, width: usize, height: usize },

    #[error(transparent)]
    Core(#[from] TmError),
}

pub type TerrainResult<T> = Result<T, TerrainError>;
