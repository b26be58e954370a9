// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{TransitDataConfig, build_network, create_transit_network};
pub use crate::model::{
    Edge, ExcludedModes, LatLng, PathStep, RoutePoint, StopInfo, TransitKind, TransitNetwork,
    WALK_SERVICE, classify_service,
};
pub use crate::routing::{
    RouteCandidate, RouteItinerary, RoutePath, RouteSegment, RoutingOptions, SortOption, TripLeg,
    build_segments, compact_legs, filter_and_rank, find_path, find_route_candidates, plan_routes,
    rank_routes, segments_to_geojson,
};

// Core scalar types and limits
pub use crate::StopIndex;
pub use crate::{
    DESTINATION_DISPLAY_NAME, DIRECT_ROUTE_PENALTY_SECS, MAX_NEARBY_RADIUS_KM, MAX_NEARBY_STOPS,
    ORIGIN_DISPLAY_NAME, TRANSFER_PENALTY_SECS, WALK_SECS_PER_KM, WALK_WEIGHT_FACTOR,
};
