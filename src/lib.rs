//! Worker boundary for the merlion routing core.
//!
//! Route computation is CPU-bound and must not stall the surface that
//! hosts it, so the core runs on a dedicated thread behind a pair of
//! channels. The host frames requests and responses as JSON messages;
//! requests are served strictly in order of receipt, one response per
//! request.

pub mod protocol;
pub mod worker;

pub use merlion_core::loading::TransitDataConfig;
pub use merlion_core::model::RoutePoint;
pub use merlion_core::{Error, SortOption, TransitKind};
pub use protocol::{CalculatePayload, CalculationResult, Request, Response};
pub use worker::RouterWorker;
