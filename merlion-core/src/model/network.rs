//! The interned transit graph and its read-only accessors.

use geo::{HaversineDistance, Point};
use hashbrown::HashMap;

use super::types::{Edge, StopInfo};
use crate::StopIndex;

/// The loaded transit network: every stop and station interned to a dense
/// index, a per-node adjacency list with explicit parallel edges, and the
/// stop metadata used for nearest-stop lookup and display names.
///
/// Built once at load time and never mutated afterwards; every routing
/// query borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    /// External string id of each interned node.
    pub node_ids: Vec<String>,
    /// Reverse lookup from external id to dense index.
    pub node_index: HashMap<String, StopIndex>,
    /// For each node, its neighbours and the parallel edges reaching them.
    pub adjacency: Vec<Vec<(StopIndex, Vec<Edge>)>>,
    /// Metadata per node; `None` for nodes the stops file does not cover.
    pub stops: Vec<Option<StopInfo>>,
}

impl TransitNetwork {
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|neighbours| neighbours.iter())
            .map(|(_, edges)| edges.len())
            .sum()
    }

    pub fn index_of(&self, id: &str) -> Option<StopIndex> {
        self.node_index.get(id).copied()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// External id of an interned node.
    ///
    /// # Panics
    ///
    /// If the index did not come from this network.
    pub fn node_id(&self, index: StopIndex) -> &str {
        &self.node_ids[index]
    }

    /// Outgoing neighbours of a node. Unknown indices get an empty slice
    /// rather than an error.
    pub fn neighbours(&self, index: StopIndex) -> &[(StopIndex, Vec<Edge>)] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }

    pub fn stop_info(&self, index: StopIndex) -> Option<&StopInfo> {
        self.stops.get(index).and_then(Option::as_ref)
    }

    pub fn metadata(&self, id: &str) -> Option<&StopInfo> {
        self.index_of(id).and_then(|index| self.stop_info(index))
    }

    pub fn stop_location(&self, index: StopIndex) -> Option<Point<f64>> {
        self.stop_info(index).map(|info| info.geometry)
    }

    /// Display name of a node, falling back to its id when the stops file
    /// has no entry for it.
    pub fn stop_name(&self, id: &str) -> String {
        self.metadata(id)
            .map_or_else(|| id.to_string(), |info| info.name.clone())
    }

    /// Stops within `max_radius_km` of a point, nearest first, at most
    /// `limit` of them. Distances are great-circle kilometres.
    pub fn find_nearby_nodes(
        &self,
        point: Point<f64>,
        max_radius_km: f64,
        limit: usize,
    ) -> Vec<(StopIndex, f64)> {
        let mut nearby: Vec<(StopIndex, f64)> = self
            .stops
            .iter()
            .enumerate()
            .filter_map(|(index, info)| {
                let info = info.as_ref()?;
                let distance_km = point.haversine_distance(&info.geometry) / 1000.0;
                (distance_km <= max_radius_km).then_some((index, distance_km))
            })
            .collect();
        nearby.sort_by(|a, b| a.1.total_cmp(&b.1));
        nearby.truncate(limit);
        nearby
    }
}
