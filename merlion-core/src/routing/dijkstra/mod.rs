//! Transfer-aware shortest-path search over the transit network.
//!
//! A Dijkstra variant with lazy deletion: the cost of leaving a node
//! depends on the edge that reached it (changing service costs extra), so
//! every parallel edge between two stops is costed individually at
//! relaxation time. Coordinate endpoints are linked in through virtual
//! source/sink nodes whose adjacency is synthesised on demand and never
//! materialised into the graph.

mod state;

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use geo::Point;
use hashbrown::HashMap;

use self::state::State;
use crate::model::{
    Edge, ExcludedModes, PathStep, RoutePoint, TransitKind, TransitNetwork, WALK_SERVICE,
};
use crate::{
    DESTINATION_DISPLAY_NAME, Error, MAX_HEAP_POPS, MAX_NEARBY_RADIUS_KM, MAX_NEARBY_STOPS,
    MAX_RECONSTRUCTION_STEPS, ORIGIN_DISPLAY_NAME, StopIndex, TRANSFER_PENALTY_SECS,
    WALK_SECS_PER_KM, WALK_WEIGHT_FACTOR,
};

/// Service labels of the synthetic legs that join coordinate endpoints to
/// the network.
const ACCESS_SERVICE: &str = "Start";
const EGRESS_SERVICE: &str = "End";

/// Tuning knobs for a single search.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingOptions {
    /// Extra seconds charged on top of the base transfer cost whenever the
    /// service changes. Used to bias a search toward direct routes.
    pub transfer_penalty: f64,
    pub excluded_modes: ExcludedModes,
}

/// A successful search result.
#[derive(Debug, Clone)]
pub struct RoutePath {
    pub steps: Vec<PathStep>,
    /// Wall-clock travel seconds: the sum of raw step weights. Transfer
    /// penalties and the walking multiplier only ever shape the search.
    pub total_duration: f64,
}

/// An edge chosen during relaxation. Graph edges are borrowed; access and
/// egress edges exist only for the duration of one search.
#[derive(Clone, Copy)]
enum TraversedEdge<'a> {
    Network(&'a Edge),
    Access {
        service: &'static str,
        distance_km: f64,
    },
}

impl<'a> TraversedEdge<'a> {
    fn kind(self) -> TransitKind {
        match self {
            Self::Network(edge) => edge.kind,
            Self::Access { .. } => TransitKind::Walk,
        }
    }

    fn service(self) -> &'a str {
        match self {
            Self::Network(edge) => &edge.service,
            Self::Access { service, .. } => service,
        }
    }

    fn direction(self) -> Option<i32> {
        match self {
            Self::Network(edge) => edge.direction,
            Self::Access { .. } => None,
        }
    }

    fn distance_km(self) -> f64 {
        match self {
            Self::Network(edge) => edge.distance,
            Self::Access { distance_km, .. } => distance_km,
        }
    }

    fn weight(self) -> f64 {
        match self {
            Self::Network(edge) => edge.weight,
            Self::Access { distance_km, .. } => distance_km * WALK_SECS_PER_KM,
        }
    }
}

enum Endpoint {
    Stop(StopIndex),
    /// Nearby stops and their great-circle distances, for a coordinate
    /// endpoint served through a virtual node.
    Virtual(Vec<(StopIndex, f64)>),
}

/// Finds the cheapest path between two endpoints under the given options.
///
/// # Errors
///
/// Fails when an endpoint cannot be resolved, no route exists, or the
/// search or reconstruction hits its safety bound.
pub fn find_path(
    network: &TransitNetwork,
    origin: &RoutePoint,
    destination: &RoutePoint,
    options: &RoutingOptions,
) -> Result<RoutePath, Error> {
    let origin_endpoint = resolve_origin(network, origin)?;
    let destination_endpoint = resolve_destination(network, destination)?;

    // Virtual endpoints take the two indices just past the node range.
    let node_count = network.node_count();
    let start_sentinel = node_count;
    let end_sentinel = node_count + 1;

    let (source, access) = match origin_endpoint {
        Endpoint::Stop(index) => (index, Vec::new()),
        Endpoint::Virtual(neighbours) => (start_sentinel, neighbours),
    };
    let (target, egress) = match destination_endpoint {
        Endpoint::Stop(index) => (index, HashMap::new()),
        Endpoint::Virtual(neighbours) => {
            let egress: HashMap<StopIndex, f64> = neighbours.into_iter().collect();
            (end_sentinel, egress)
        }
    };

    if source == target {
        // Explicitly routing a node to itself: nothing to travel.
        return Ok(RoutePath {
            steps: Vec::new(),
            total_duration: 0.0,
        });
    }

    let mut dist = vec![f64::INFINITY; node_count + 2];
    let mut prev: Vec<Option<(StopIndex, TraversedEdge)>> = vec![None; node_count + 2];
    let mut expanded = FixedBitSet::with_capacity(node_count + 2);
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    let mut pops = 0usize;
    while let Some(State { cost, node }) = heap.pop() {
        pops += 1;
        if pops > MAX_HEAP_POPS {
            return Err(Error::ComputationTimedOut);
        }

        // Stale duplicate left behind by a later improvement
        if cost > dist[node] {
            continue;
        }
        if node == target {
            break;
        }
        if expanded.put(node) {
            continue;
        }

        // The edge that reached this node decides transfer penalties for
        // everything leaving it. Final once the node is expanded.
        let incoming = prev[node].map(|(_, edge)| edge);

        if node == start_sentinel {
            for &(neighbour, distance_km) in &access {
                let edge = TraversedEdge::Access {
                    service: ACCESS_SERVICE,
                    distance_km,
                };
                let cost = edge_cost(edge, incoming, options.transfer_penalty);
                relax(&mut dist, &mut prev, &mut heap, node, neighbour, edge, cost);
            }
            continue;
        }

        for (neighbour, edges) in network.neighbours(node) {
            // Every parallel edge is costed in context; the cheapest wins.
            // Picking by raw weight alone would miss same-service edges
            // that dodge the transfer penalty.
            let mut best: Option<(f64, TraversedEdge)> = None;
            for edge in edges {
                if options.excluded_modes.contains(edge.kind) {
                    continue;
                }
                let traversed = TraversedEdge::Network(edge);
                let cost = edge_cost(traversed, incoming, options.transfer_penalty);
                if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                    best = Some((cost, traversed));
                }
            }
            if let Some((cost, edge)) = best {
                relax(&mut dist, &mut prev, &mut heap, node, *neighbour, edge, cost);
            }
        }

        if let Some(&distance_km) = egress.get(&node) {
            let edge = TraversedEdge::Access {
                service: EGRESS_SERVICE,
                distance_km,
            };
            let cost = edge_cost(edge, incoming, options.transfer_penalty);
            relax(
                &mut dist,
                &mut prev,
                &mut heap,
                node,
                end_sentinel,
                edge,
                cost,
            );
        }
    }

    if dist[target].is_infinite() {
        return Err(Error::NoPathFound);
    }

    reconstruct(network, &prev, source, target, start_sentinel, end_sentinel)
}

fn resolve_origin(network: &TransitNetwork, origin: &RoutePoint) -> Result<Endpoint, Error> {
    match origin {
        RoutePoint::Stop(id) => network
            .index_of(id)
            .map(Endpoint::Stop)
            .ok_or_else(|| Error::UnknownOriginNode(id.clone())),
        RoutePoint::Coord { lat, lng } => {
            let neighbours = network.find_nearby_nodes(
                Point::new(*lng, *lat),
                MAX_NEARBY_RADIUS_KM,
                MAX_NEARBY_STOPS,
            );
            if neighbours.is_empty() {
                return Err(Error::NoReachableOriginNodes);
            }
            Ok(Endpoint::Virtual(neighbours))
        }
    }
}

fn resolve_destination(
    network: &TransitNetwork,
    destination: &RoutePoint,
) -> Result<Endpoint, Error> {
    match destination {
        RoutePoint::Stop(id) => network
            .index_of(id)
            .map(Endpoint::Stop)
            .ok_or_else(|| Error::UnknownDestinationNode(id.clone())),
        RoutePoint::Coord { lat, lng } => {
            let neighbours = network.find_nearby_nodes(
                Point::new(*lng, *lat),
                MAX_NEARBY_RADIUS_KM,
                MAX_NEARBY_STOPS,
            );
            if neighbours.is_empty() {
                return Err(Error::NoReachableDestinationNodes);
            }
            Ok(Endpoint::Virtual(neighbours))
        }
    }
}

/// Scoring cost of taking `edge` after arriving over `incoming`.
fn edge_cost(edge: TraversedEdge, incoming: Option<TraversedEdge>, transfer_penalty: f64) -> f64 {
    // Walking is scored at a premium so transit wins where both exist
    let base = if edge.service() == WALK_SERVICE {
        edge.weight() * WALK_WEIGHT_FACTOR
    } else {
        edge.weight()
    };
    let penalty = match incoming {
        Some(previous) if previous.service() != edge.service() => {
            TRANSFER_PENALTY_SECS + transfer_penalty
        }
        _ => 0.0,
    };
    base + penalty
}

fn relax<'a>(
    dist: &mut [f64],
    prev: &mut [Option<(StopIndex, TraversedEdge<'a>)>],
    heap: &mut BinaryHeap<State>,
    from: StopIndex,
    to: StopIndex,
    edge: TraversedEdge<'a>,
    cost: f64,
) {
    let alt = dist[from] + cost;
    if alt < dist[to] {
        dist[to] = alt;
        prev[to] = Some((from, edge));
        heap.push(State {
            cost: alt,
            node: to,
        });
    }
}

fn reconstruct(
    network: &TransitNetwork,
    prev: &[Option<(StopIndex, TraversedEdge)>],
    source: StopIndex,
    target: StopIndex,
    start_sentinel: StopIndex,
    end_sentinel: StopIndex,
) -> Result<RoutePath, Error> {
    let label = |index: StopIndex| -> String {
        if index == start_sentinel {
            ORIGIN_DISPLAY_NAME.to_string()
        } else if index == end_sentinel {
            DESTINATION_DISPLAY_NAME.to_string()
        } else {
            network.node_id(index).to_string()
        }
    };

    let mut steps = Vec::new();
    let mut current = target;
    while current != source {
        if steps.len() >= MAX_RECONSTRUCTION_STEPS {
            return Err(Error::PathReconstructionFailed);
        }
        let Some((from, edge)) = prev[current] else {
            return Err(Error::PathReconstructionFailed);
        };
        steps.push(PathStep {
            from: label(from),
            to: label(current),
            kind: edge.kind(),
            service: edge.service().to_string(),
            direction: edge.direction(),
            distance: edge.distance_km(),
            weight: edge.weight(),
        });
        current = from;
    }
    steps.reverse();

    let total_duration = steps.iter().map(|step| step.weight).sum();
    Ok(RoutePath {
        steps,
        total_duration,
    })
}
