//! Message types exchanged with the host.

use serde::{Deserialize, Serialize};

use merlion_core::model::{RoutePoint, TransitKind};
use merlion_core::routing::{RouteItinerary, SortOption};

/// A message from the host.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "CALCULATE")]
    Calculate { payload: CalculatePayload },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePayload {
    pub start: RoutePoint,
    pub end: RoutePoint,
    /// Ride modes to avoid; walking is always allowed.
    #[serde(default)]
    pub excluded_modes: Vec<TransitKind>,
    #[serde(default)]
    pub sort_by: SortOption,
}

/// A message to the host. `Result` answers a request, successfully or
/// not; `Error` reports a problem outside the routing domain (malformed
/// message, worker failure).
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Response {
    #[serde(rename = "RESULT")]
    Result { result: CalculationResult },
    #[serde(rename = "ERROR")]
    Error { error: String },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Routes { routes: Vec<RouteItinerary> },
    Failed { error: String },
}

impl Response {
    /// A request-level routing failure, identified by its stable kind.
    pub fn routing_failure(kind: &str) -> Self {
        Response::Result {
            result: CalculationResult::Failed {
                error: kind.to_string(),
            },
        }
    }
}
