//! Compaction of raw path steps into rider-facing trip legs.

use serde::Serialize;

use crate::model::{PathStep, TransitKind, TransitNetwork};
use crate::{DESTINATION_DISPLAY_NAME, ORIGIN_DISPLAY_NAME};

/// A maximal run of consecutive steps on one service: what the rider
/// experiences as "take bus 196 for 4 stops".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLeg {
    pub kind: TransitKind,
    pub service: String,
    pub start_stop_id: String,
    pub start_stop_name: String,
    pub end_stop_id: String,
    pub end_stop_name: String,
    pub stop_count: usize,
    /// Raw travel seconds over the leg's steps.
    pub duration: f64,
}

/// Collapses a step sequence into legs keyed by `(kind, service)`. Both
/// fields are compared: a bus number that collides with a rail code must
/// not merge across kinds.
pub fn compact_legs(network: &TransitNetwork, steps: &[PathStep]) -> Vec<TripLeg> {
    let Some(first) = steps.first() else {
        return Vec::new();
    };

    let mut legs = Vec::new();
    let mut leg = open_leg(network, first);

    for step in &steps[1..] {
        if step.kind == leg.kind && step.service == leg.service {
            leg.end_stop_id = step.to.clone();
            leg.end_stop_name = display_name(network, &step.to);
            leg.stop_count += 1;
            leg.duration += step.weight;
        } else {
            legs.push(leg);
            leg = open_leg(network, step);
        }
    }
    legs.push(leg);
    legs
}

fn open_leg(network: &TransitNetwork, step: &PathStep) -> TripLeg {
    TripLeg {
        kind: step.kind,
        service: step.service.clone(),
        start_stop_id: step.from.clone(),
        start_stop_name: display_name(network, &step.from),
        end_stop_id: step.to.clone(),
        end_stop_name: display_name(network, &step.to),
        stop_count: 1,
        duration: step.weight,
    }
}

/// Virtual endpoint names pass through untouched; graph nodes resolve to
/// their stop name, falling back to the raw id.
fn display_name(network: &TransitNetwork, id: &str) -> String {
    if id == ORIGIN_DISPLAY_NAME || id == DESTINATION_DISPLAY_NAME {
        return id.to_string();
    }
    network.stop_name(id)
}
