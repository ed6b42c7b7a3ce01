//! pn-project: network description file format and validation.
//!
//! A description lists nodes and pipes using external units (meters,
//! liters per second, millimeters). Files are YAML or JSON, picked by
//! extension.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_network};

use std::path::Path;

/// Newest description format version this crate reads.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization format of a description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn from_yaml_str(content: &str) -> ProjectResult<NetworkDef> {
    let network: NetworkDef = serde_yaml::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn from_json_str(content: &str) -> ProjectResult<NetworkDef> {
    let network: NetworkDef = serde_json::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

/// Load and validate a description, choosing the parser by extension.
pub fn load_network(path: &Path) -> ProjectResult<NetworkDef> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    match format {
        Format::Yaml => from_yaml_str(&content),
        Format::Json => from_json_str(&content),
    }
}

/// Validate and write a description, choosing the format by extension.
pub fn save_network(path: &Path, network: &NetworkDef) -> ProjectResult<()> {
    validate_network(network)?;
    let content = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(network)?,
        Format::Json => serde_json::to_string_pretty(network)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}
