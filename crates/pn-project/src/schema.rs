//! Network description definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub pipes: Vec<PipeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    pub elevation_m: f64,
    /// Draw-off flow; omitted or zero for junctions and the source.
    #[serde(default)]
    pub demand_lps: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub id: String,
    pub start_node_id: String,
    pub end_node_id: String,
    pub length_m: f64,
    /// Inner diameter in millimeters.
    pub diameter_mm: f64,
    pub material: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fittings: Vec<String>,
}

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

impl NetworkDef {
    pub fn total_demand_lps(&self) -> f64 {
        self.nodes.iter().map(|n| n.demand_lps).sum()
    }
}
