//! Conversion of path steps into renderable polyline segments.

use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde::Serialize;
use serde_json::json;

use crate::model::{LatLng, PathStep, TransitKind, TransitNetwork};

/// A maximal same-service polyline. Consecutive segments share a point so
/// the drawn route has no gaps at transfers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub kind: TransitKind,
    pub service: String,
    pub positions: Vec<LatLng>,
}

/// Builds the polyline series for a path. A step whose target stop has no
/// coordinates is skipped, never fatal; segments that end up with a single
/// point are dropped.
pub fn build_segments(network: &TransitNetwork, steps: &[PathStep]) -> Vec<RouteSegment> {
    let Some(first) = steps.first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut service = first.service.clone();
    let mut kind = first.kind;
    let mut points: Vec<LatLng> = Vec::new();
    if let Some(position) = stop_position(network, &first.from) {
        points.push(position);
    }

    for step in steps {
        if step.service != service {
            // A new service starts where the previous one ended
            let carry = points.last().copied();
            close_segment(&mut segments, kind, &service, std::mem::take(&mut points));
            service = step.service.clone();
            kind = step.kind;
            if let Some(position) = carry {
                points.push(position);
            }
        }
        if let Some(position) = stop_position(network, &step.to) {
            points.push(position);
        }
    }
    close_segment(&mut segments, kind, &service, points);
    segments
}

/// Renders segments as a GeoJSON `FeatureCollection`, one `LineString`
/// feature per segment, for map layers that consume GeoJSON directly.
pub fn segments_to_geojson(segments: &[RouteSegment]) -> FeatureCollection {
    let features = segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| {
            let line: LineString<f64> = segment
                .positions
                .iter()
                .map(|position| Coord {
                    x: position.lng,
                    y: position.lat,
                })
                .collect();
            let value = json!({
                "type": "Feature",
                "geometry": Geometry::new(GeoJsonValue::from(&line)),
                "properties": {
                    "segment_index": index,
                    "kind": segment.kind,
                    "service": segment.service,
                }
            });
            Feature::from_json_value(value).ok()
        })
        .collect();

    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

fn stop_position(network: &TransitNetwork, id: &str) -> Option<LatLng> {
    network.metadata(id).map(|info| info.geometry.into())
}

fn close_segment(
    segments: &mut Vec<RouteSegment>,
    kind: TransitKind,
    service: &str,
    points: Vec<LatLng>,
) {
    if points.len() > 1 {
        segments.push(RouteSegment {
            kind,
            service: service.to_string(),
            positions: points,
        });
    }
}
