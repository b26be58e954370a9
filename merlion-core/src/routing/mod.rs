//! Route planning: pathfinding, alternatives, and itinerary expansion.

pub mod alternatives;
pub mod dijkstra;
pub mod itinerary;
pub mod ranking;
pub mod segments;

use serde::Serialize;

pub use alternatives::{RouteCandidate, find_route_candidates};
pub use dijkstra::{RoutePath, RoutingOptions, find_path};
pub use itinerary::{TripLeg, compact_legs};
pub use ranking::{SortOption, filter_and_rank, rank_routes};
pub use segments::{RouteSegment, build_segments, segments_to_geojson};

use crate::Error;
use crate::model::{ExcludedModes, PathStep, RoutePoint, TransitKind, TransitNetwork};

/// A fully-expanded route option ready for the host: the raw steps plus
/// the rider-facing legs and the renderable map segments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteItinerary {
    pub id: String,
    pub label: String,
    pub path: Vec<PathStep>,
    pub total_duration: f64,
    pub legs: Vec<TripLeg>,
    pub segments: Vec<RouteSegment>,
}

impl RouteItinerary {
    pub fn from_candidate(network: &TransitNetwork, candidate: RouteCandidate) -> Self {
        let legs = compact_legs(network, &candidate.path);
        let segments = build_segments(network, &candidate.path);
        Self {
            id: candidate.id,
            label: candidate.label,
            total_duration: candidate.total_duration,
            path: candidate.path,
            legs,
            segments,
        }
    }

    /// Service changes the rider makes: one less than the ride legs, never
    /// negative. Walking legs are not rides.
    pub fn transfer_count(&self) -> usize {
        self.legs
            .iter()
            .filter(|leg| leg.kind != TransitKind::Walk)
            .count()
            .saturating_sub(1)
    }

    /// Kilometres covered on foot.
    pub fn walking_distance(&self) -> f64 {
        self.path
            .iter()
            .filter(|step| step.kind == TransitKind::Walk)
            .map(|step| step.distance)
            .sum()
    }
}

/// The full pipeline behind one routing request: generate candidates,
/// expand each into legs and segments, then filter and rank.
///
/// # Errors
///
/// Fails when no fastest route can be found; see [`find_path`] for the
/// individual failure modes.
pub fn plan_routes(
    network: &TransitNetwork,
    origin: &RoutePoint,
    destination: &RoutePoint,
    excluded_modes: ExcludedModes,
    sort: SortOption,
) -> Result<Vec<RouteItinerary>, Error> {
    let candidates = find_route_candidates(network, origin, destination, excluded_modes)?;
    let routes = candidates
        .into_iter()
        .map(|candidate| RouteItinerary::from_candidate(network, candidate))
        .collect();
    Ok(filter_and_rank(routes, excluded_modes, sort))
}
