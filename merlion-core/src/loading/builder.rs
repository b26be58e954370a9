use geo::Point;
use hashbrown::HashMap;
use log::{info, warn};

use super::config::TransitDataConfig;
use super::parser::deserialize_json_file;
use super::raw_types::{RawStopsMetadata, RawTransitGraph};
use crate::model::{Edge, StopInfo, TransitNetwork, classify_service};
use crate::{Error, StopIndex};

/// Loads the two data files and assembles the routable network.
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed.
pub fn create_transit_network(config: &TransitDataConfig) -> Result<TransitNetwork, Error> {
    info!("Loading transit graph: {}", config.graph_path.display());
    let graph: RawTransitGraph = deserialize_json_file(&config.graph_path)?;

    info!("Loading stop metadata: {}", config.stops_path.display());
    let stops: RawStopsMetadata = deserialize_json_file(&config.stops_path)?;

    let network = build_network(graph, stops);
    info!(
        "Transit network ready: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

/// Interns every node id and converts the raw maps into the dense
/// adjacency structure. Nodes that appear only in the stops file are
/// interned too, so coordinate endpoints can still snap to them.
pub fn build_network(graph: RawTransitGraph, stops: RawStopsMetadata) -> TransitNetwork {
    let mut node_ids: Vec<String> = Vec::with_capacity(graph.len());
    let mut node_index: HashMap<String, StopIndex> = HashMap::with_capacity(graph.len());

    for (from, neighbours) in &graph {
        intern(&mut node_ids, &mut node_index, from);
        for to in neighbours.keys() {
            intern(&mut node_ids, &mut node_index, to);
        }
    }
    for id in stops.keys() {
        intern(&mut node_ids, &mut node_index, id);
    }

    let mut adjacency: Vec<Vec<(StopIndex, Vec<Edge>)>> = vec![Vec::new(); node_ids.len()];
    for (from, neighbours) in graph {
        let from_index = node_index[from.as_str()];
        let entries = &mut adjacency[from_index];
        entries.reserve(neighbours.len());
        for (to, raw_edges) in neighbours {
            let to_index = node_index[to.as_str()];
            let edges = raw_edges
                .into_iter()
                .map(|raw| {
                    let weight = if raw.weight < 0.0 {
                        warn!(
                            "Negative weight {} on {from} -> {to} ({}), using 0",
                            raw.weight, raw.service
                        );
                        0.0
                    } else {
                        raw.weight
                    };
                    Edge {
                        kind: raw
                            .kind
                            .unwrap_or_else(|| classify_service(&raw.service)),
                        service: raw.service,
                        direction: raw.direction,
                        distance: raw.distance,
                        weight,
                    }
                })
                .collect();
            entries.push((to_index, edges));
        }
    }

    let mut stop_infos: Vec<Option<StopInfo>> = vec![None; node_ids.len()];
    for (id, raw) in stops {
        let index = node_index[id.as_str()];
        stop_infos[index] = Some(StopInfo {
            name: raw.name,
            road: raw.road,
            geometry: Point::new(raw.lng, raw.lat),
            stop_type: raw.stop_type,
        });
    }

    TransitNetwork {
        node_ids,
        node_index,
        adjacency,
        stops: stop_infos,
    }
}

fn intern(
    node_ids: &mut Vec<String>,
    node_index: &mut HashMap<String, StopIndex>,
    id: &str,
) -> StopIndex {
    if let Some(&index) = node_index.get(id) {
        return index;
    }
    let index = node_ids.len();
    node_ids.push(id.to_string());
    node_index.insert(id.to_string(), index);
    index
}
