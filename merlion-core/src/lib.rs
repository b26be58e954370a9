//! Routing core for the merlion transit planner.
//!
//! Holds the static multi-modal transit graph for Singapore (bus, MRT and
//! LRT services plus walking links), finds shortest paths with
//! transfer-aware costs, generates a direct-route alternative, and expands
//! raw paths into rider-facing trip legs and renderable map segments.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{TransitKind, TransitNetwork};
pub use routing::{RouteItinerary, SortOption, plan_routes};

/// Dense index of an interned node in the transit graph.
pub type StopIndex = usize;

/// Walking pace used to price synthetic access and egress edges, in seconds
/// per kilometre (5 km/h).
pub const WALK_SECS_PER_KM: f64 = 720.0;

/// Scoring multiplier applied to walking edges so the search prefers
/// transit where it exists. Never part of the reported duration.
pub const WALK_WEIGHT_FACTOR: f64 = 2.0;

/// Base cost in seconds charged whenever the service changes between two
/// consecutive edges.
pub const TRANSFER_PENALTY_SECS: f64 = 300.0;

/// Extra per-transfer cost used when searching for the "Less Transfers"
/// alternative.
pub const DIRECT_ROUTE_PENALTY_SECS: f64 = 600.0;

/// At most this many candidate stops are linked to a coordinate endpoint.
pub const MAX_NEARBY_STOPS: usize = 5;

/// Candidate stops further than this from a coordinate endpoint are not
/// considered reachable on foot.
pub const MAX_NEARBY_RADIUS_KM: f64 = 0.8;

/// Hard bound on heap pops per search; exceeding it means the input is
/// pathological and the search reports a timeout instead of spinning.
pub const MAX_HEAP_POPS: usize = 100_000;

/// Hard bound on steps walked while rebuilding a path from the predecessor
/// chain; a longer chain can only come from corrupted state.
pub const MAX_RECONSTRUCTION_STEPS: usize = 2_000;

/// Display id substituted for the virtual source before a path leaves the
/// core.
pub const ORIGIN_DISPLAY_NAME: &str = "Current Location";

/// Display id substituted for the virtual sink before a path leaves the
/// core.
pub const DESTINATION_DISPLAY_NAME: &str = "Destination";
