//! Wire shapes of the data files, prior to interning. Unknown fields are
//! ignored so the loader keeps working as the graph builder grows.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::TransitKind;

/// `transit_graph.json`: node id -> neighbour id -> parallel edges.
pub type RawTransitGraph = HashMap<String, HashMap<String, Vec<RawEdge>>>;

/// `stops_metadata.json`: node id -> stop record.
pub type RawStopsMetadata = HashMap<String, RawStop>;

#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    pub service: String,
    #[serde(default)]
    pub direction: Option<i32>,
    #[serde(default)]
    pub distance: f64,
    pub weight: f64,
    /// Newer graph schema carries the kind explicitly; older files leave
    /// it to the service classifier.
    #[serde(default)]
    pub kind: Option<TransitKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStop {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub road: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, rename = "type")]
    pub stop_type: Option<String>,
}
