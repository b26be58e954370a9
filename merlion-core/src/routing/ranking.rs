//! Ordering and filtering of route options.

use serde::{Deserialize, Serialize};

use super::RouteItinerary;
use crate::model::{ExcludedModes, TransitKind};

/// The criterion a rider sorts route options by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOption {
    #[default]
    Fastest,
    LessTransfers,
    LessWalking,
}

/// Stable sort by the chosen criterion; the secondary criteria fall back
/// to total duration.
pub fn rank_routes(routes: &mut [RouteItinerary], sort: SortOption) {
    match sort {
        SortOption::Fastest => {
            routes.sort_by(|a, b| a.total_duration.total_cmp(&b.total_duration));
        }
        SortOption::LessTransfers => routes.sort_by(|a, b| {
            a.transfer_count()
                .cmp(&b.transfer_count())
                .then_with(|| a.total_duration.total_cmp(&b.total_duration))
        }),
        SortOption::LessWalking => routes.sort_by(|a, b| {
            a.walking_distance()
                .total_cmp(&b.walking_distance())
                .then_with(|| a.total_duration.total_cmp(&b.total_duration))
        }),
    }
}

/// Drops any route still riding an excluded mode, then ranks the rest.
/// The pathfinder already refuses excluded modes; this is the last line of
/// defence before results reach the host.
pub fn filter_and_rank(
    mut routes: Vec<RouteItinerary>,
    excluded_modes: ExcludedModes,
    sort: SortOption,
) -> Vec<RouteItinerary> {
    routes.retain(|route| {
        !route
            .segments
            .iter()
            .any(|segment| segment.kind != TransitKind::Walk && excluded_modes.contains(segment.kind))
    });
    rank_routes(&mut routes, sort);
    routes
}
