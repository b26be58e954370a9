use std::path::PathBuf;

/// Locations of the two data files the network is built from.
#[derive(Debug, Clone)]
pub struct TransitDataConfig {
    /// Adjacency data: `{ nodeId: { neighbourId: [edge, ...] } }`.
    pub graph_path: PathBuf,
    /// Stop metadata: `{ nodeId: { name, road, lat, lng } }`.
    pub stops_path: PathBuf,
}

impl TransitDataConfig {
    /// Conventional layout: both files side by side in one directory.
    pub fn from_data_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            graph_path: dir.join("transit_graph.json"),
            stops_path: dir.join("stops_metadata.json"),
        }
    }
}
