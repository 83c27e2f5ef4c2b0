use tm_core::{AgentId, Cell, TmError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("agent {0} appears more than once in the area")]
    DuplicateAgent(AgentId),

    #[error("agents {first} and {second} both start on {cell}")]
    SharedStartCell {
        cell:   Cell,
        first:  AgentId,
        second: AgentId,
    },

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] TmError),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
