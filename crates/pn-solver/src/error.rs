//! Error types for solver operations.

use pn_core::error::PnError;
use pn_graph::GraphError;
use thiserror::Error;

/// Errors that stop an analysis. No partial results accompany them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("No demand nodes: at least one node must draw a positive flow")]
    NoDemand,

    #[error("Demand node '{node}' has no path from the source")]
    Unreachable { node: String },

    #[error("Numeric failure: {0}")]
    Numeric(#[from] PnError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PnError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Graph(g) => g.into(),
            SolverError::Numeric(e) => e,
            other => PnError::Invariant {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_keep_their_message() {
        let err: SolverError = GraphError::NoSource.into();
        assert!(err.to_string().contains("No source node"));
        let core: PnError = err.into();
        assert!(matches!(core, PnError::Invariant { .. }));
    }
}
