//! Description validation logic.
//!
//! Checks what can be checked per record: unique ids, resolvable node
//! references, and physically meaningful numbers. Tree shape is checked
//! when the network is built.

use crate::schema::{NetworkDef, NodeDef, PipeDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    if network.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    let mut node_ids = HashSet::new();
    for node in &network.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        validate_node(node)?;
    }

    let mut pipe_ids = HashSet::new();
    for pipe in &network.pipes {
        if !pipe_ids.insert(pipe.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: pipe.id.clone(),
                context: "pipes".to_string(),
            });
        }
        validate_pipe(pipe, &node_ids)?;
    }

    Ok(())
}

fn validate_node(node: &NodeDef) -> Result<(), ValidationError> {
    require_finite(&format!("node '{}' elevation_m", node.id), node.elevation_m)?;
    require_finite(&format!("node '{}' demand_lps", node.id), node.demand_lps)?;
    if node.demand_lps < 0.0 {
        return Err(invalid(
            format!("node '{}' demand_lps", node.id),
            node.demand_lps,
            "demand must be non-negative",
        ));
    }
    Ok(())
}

fn validate_pipe(pipe: &PipeDef, node_ids: &HashSet<&str>) -> Result<(), ValidationError> {
    for (end, context) in [
        (&pipe.start_node_id, "start_node_id"),
        (&pipe.end_node_id, "end_node_id"),
    ] {
        if !node_ids.contains(end.as_str()) {
            return Err(ValidationError::MissingReference {
                id: end.clone(),
                context: format!("pipe '{}' {}", pipe.id, context),
            });
        }
    }

    require_finite(&format!("pipe '{}' length_m", pipe.id), pipe.length_m)?;
    if pipe.length_m <= 0.0 {
        return Err(invalid(
            format!("pipe '{}' length_m", pipe.id),
            pipe.length_m,
            "length must be positive",
        ));
    }

    // A zero bore is degenerate but allowed; it reports zero loss.
    require_finite(&format!("pipe '{}' diameter_mm", pipe.id), pipe.diameter_mm)?;
    if pipe.diameter_mm < 0.0 {
        return Err(invalid(
            format!("pipe '{}' diameter_mm", pipe.id),
            pipe.diameter_mm,
            "diameter must not be negative",
        ));
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field.to_string(), value, "must be finite"))
    }
}

fn invalid(field: String, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
