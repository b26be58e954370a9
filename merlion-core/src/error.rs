use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transit data has not been loaded")]
    GraphNotLoaded,
    #[error("Unknown origin node '{0}'")]
    UnknownOriginNode(String),
    #[error("Unknown destination node '{0}'")]
    UnknownDestinationNode(String),
    #[error("No transit stops within walking range of the origin")]
    NoReachableOriginNodes,
    #[error("No transit stops within walking range of the destination")]
    NoReachableDestinationNodes,
    #[error("No route found between origin and destination")]
    NoPathFound,
    #[error("Route search exceeded the iteration limit")]
    ComputationTimedOut,
    #[error("Route reconstruction produced an invalid chain")]
    PathReconstructionFailed,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Stable identifier for a routing failure crossing the host boundary.
    ///
    /// Loading problems have no wire kind of their own; the worker logs
    /// them once at startup and answers later queries with `GraphNotLoaded`.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Error::GraphNotLoaded => Some("GraphNotLoaded"),
            Error::UnknownOriginNode(_) => Some("UnknownOriginNode"),
            Error::UnknownDestinationNode(_) => Some("UnknownDestinationNode"),
            Error::NoReachableOriginNodes => Some("NoReachableOriginNodes"),
            Error::NoReachableDestinationNodes => Some("NoReachableDestinationNodes"),
            Error::NoPathFound => Some("NoPathFound"),
            Error::ComputationTimedOut => Some("ComputationTimedOut"),
            Error::PathReconstructionFailed => Some("PathReconstructionFailed"),
            Error::IoError(_) | Error::InvalidData(_) => None,
        }
    }
}
