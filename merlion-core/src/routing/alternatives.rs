//! Generation of the fastest route and its direct-route alternative.

use log::debug;
use serde::Serialize;

use super::dijkstra::{RoutingOptions, find_path};
use crate::model::{ExcludedModes, PathStep, RoutePoint, TransitNetwork};
use crate::{DIRECT_ROUTE_PENALTY_SECS, Error};

/// One raw routing result, before leg and segment expansion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    pub id: String,
    pub label: String,
    pub path: Vec<PathStep>,
    pub total_duration: f64,
}

/// Runs the search twice: once plain for the fastest route, once with an
/// added per-transfer cost to surface a route with fewer service changes.
/// The alternative is kept only when it actually differs.
///
/// # Errors
///
/// Fails when the fastest search fails; a failed alternative search is
/// logged and dropped.
pub fn find_route_candidates(
    network: &TransitNetwork,
    origin: &RoutePoint,
    destination: &RoutePoint,
    excluded_modes: ExcludedModes,
) -> Result<Vec<RouteCandidate>, Error> {
    let fastest = find_path(
        network,
        origin,
        destination,
        &RoutingOptions {
            transfer_penalty: 0.0,
            excluded_modes,
        },
    )?;
    let mut candidates = vec![RouteCandidate {
        id: "fastest".to_string(),
        label: "Fastest".to_string(),
        total_duration: fastest.total_duration,
        path: fastest.steps,
    }];

    match find_path(
        network,
        origin,
        destination,
        &RoutingOptions {
            transfer_penalty: DIRECT_ROUTE_PENALTY_SECS,
            excluded_modes,
        },
    ) {
        Ok(direct) if !same_route(&direct.steps, &candidates[0].path) => {
            candidates.push(RouteCandidate {
                id: "direct".to_string(),
                label: "Less Transfers".to_string(),
                total_duration: direct.total_duration,
                path: direct.steps,
            });
        }
        Ok(_) => debug!("Direct-route search repeated the fastest route"),
        Err(e) => debug!("Direct-route search failed: {e}"),
    }

    Ok(candidates)
}

/// Structural equality: same steps over the same services. Direction does
/// not distinguish routes.
fn same_route(a: &[PathStep], b: &[PathStep]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.from == y.from && x.to == y.to && x.service == y.service)
}
