//! Shared application service layer for pipenet.
//!
//! Turns a network description into a pump sizing report: load, validate,
//! compile into a solver network, analyze, and shape the output. Frontends
//! (the CLI, or any transport adapter) only deal with the types here.

pub mod analysis_service;
pub mod compile;
pub mod error;
pub mod project_service;
pub mod report;

// Re-export key types for convenience
pub use analysis_service::{analyze_file, analyze_network, respond};
pub use compile::compile_network;
pub use error::{AppError, AppResult};
pub use project_service::{NetworkSummary, load_network, summarize};
pub use report::{AnalysisReport, ErrorReport, PathReport, PipeReport, PumpReport, Response};
