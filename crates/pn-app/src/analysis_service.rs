//! Analysis entry points for frontends.

use std::path::Path;

use pn_project::NetworkDef;
use pn_solver::{AnalysisOptions, analyze_with};
use tracing::warn;

use crate::compile::compile_network;
use crate::error::AppResult;
use crate::project_service::load_network;
use crate::report::{AnalysisReport, ErrorReport, Response};

/// Analyze an already loaded description.
pub fn analyze_network(def: &NetworkDef, options: &AnalysisOptions) -> AppResult<AnalysisReport> {
    let network = compile_network(def)?;
    let result = analyze_with(&network, options)?;
    Ok(AnalysisReport::from_result(&network, &result))
}

/// Load a description file and analyze it.
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> AppResult<AnalysisReport> {
    let def = load_network(path)?;
    analyze_network(&def, options)
}

/// Analyze and fold any failure into the `{error}` response shape.
pub fn respond(def: &NetworkDef, options: &AnalysisOptions) -> Response {
    match pn_project::validate_network(def)
        .map_err(|e| crate::AppError::from(pn_project::ProjectError::from(e)))
        .and_then(|()| analyze_network(def, options))
    {
        Ok(report) => Response::Report(report),
        Err(e) => {
            warn!(error = %e, "analysis rejected");
            Response::Error(ErrorReport {
                error: e.to_string(),
            })
        }
    }
}
