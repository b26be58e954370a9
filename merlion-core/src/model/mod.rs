//! Data model for the Singapore transit network.
//!
//! Contains the transport-kind taxonomy, the edge and stop records, and the
//! interned graph structure the routing algorithms run over.

pub mod network;
pub mod service;
pub mod types;

pub use network::TransitNetwork;
pub use service::{ExcludedModes, TransitKind, WALK_SERVICE, classify_service};
pub use types::{Edge, LatLng, PathStep, RoutePoint, StopInfo};
