//! Core record types: edges, stop metadata, path steps and endpoints.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::service::TransitKind;

/// One directed connection between two adjacent stops. Several edges may
/// connect the same pair when multiple services run the same road or
/// track; they are kept separate so each can be costed in context.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub kind: TransitKind,
    /// Line code, bus number, or the literal `WALK`.
    pub service: String,
    /// Distinguishes outbound/inbound runs of the same service.
    pub direction: Option<i32>,
    /// Kilometres between the two stops.
    pub distance: f64,
    /// Travel seconds between the two stops, without any penalties.
    pub weight: f64,
}

/// Human-facing metadata for a stop or station.
#[derive(Debug, Clone, PartialEq)]
pub struct StopInfo {
    pub name: String,
    pub road: String,
    /// x = longitude, y = latitude.
    pub geometry: Point<f64>,
    pub stop_type: Option<String>,
}

/// A latitude/longitude pair in the order map layers expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// One traversed edge in a computed path. Endpoints are external node ids;
/// virtual endpoints have already been rewritten to their display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub kind: TransitKind,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<i32>,
    /// Kilometres covered by this step.
    pub distance: f64,
    /// Raw travel seconds, penalty-free.
    pub weight: f64,
}

/// Where a route starts or ends: a node already in the graph, or an
/// arbitrary coordinate to be linked in via nearby stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutePoint {
    Stop(String),
    Coord { lat: f64, lng: f64 },
}

impl RoutePoint {
    pub fn stop(id: impl Into<String>) -> Self {
        Self::Stop(id.into())
    }

    pub fn coord(lat: f64, lng: f64) -> Self {
        Self::Coord { lat, lng }
    }
}
