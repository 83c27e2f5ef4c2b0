use thiserror::Error;

use tm_core::{AgentId, Cell, TmError};
use tm_resolve::ResolveError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("traffic manager configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{agent} starts on impassable cell {cell}")]
    AgentOnWall { agent: AgentId, cell: Cell },

    #[error(transparent)]
    Core(#[from] TmError),

    #[error("resolve failed: {0}")]
    Resolve(#[from] ResolveError),
}

pub type SimResult<T> = Result<T, SimError>;
