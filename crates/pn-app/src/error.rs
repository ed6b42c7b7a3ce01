//! Error types for the pn-app service layer.

use pn_graph::GraphError;
use pn_project::ProjectError;
use pn_solver::SolverError;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network: {0}")]
    Project(#[from] ProjectError),

    #[error("Invalid network structure: {0}")]
    Structure(#[from] GraphError),

    #[error("Analysis failed: {0}")]
    Solver(#[from] SolverError),

    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}
