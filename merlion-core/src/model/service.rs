//! Transport-kind taxonomy and service-code classification.

use serde::{Deserialize, Serialize};

/// Service id of walking links in the graph data.
pub const WALK_SERVICE: &str = "WALK";

/// MRT line codes as they prefix service ids in the graph data.
const MRT_LINE_PREFIXES: [&str; 6] = ["NSL", "EWL", "NEL", "CCL", "DTL", "TEL"];

/// Markers that identify an LRT service anywhere in the service id.
const LRT_MARKERS: [&str; 4] = ["BPLrt", "SKLrt", "PGLrt", "LRT"];

/// Kind of transport an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransitKind {
    Bus,
    Mrt,
    Lrt,
    Walk,
    Transfer,
}

/// Derive the transport kind from a service id.
///
/// Used as the fallback for graph data that predates the explicit `kind`
/// field. The MRT prefix test runs before the LRT substring test: line
/// codes are unambiguous, while "LRT" can appear anywhere in a branch
/// name.
pub fn classify_service(service: &str) -> TransitKind {
    if service == WALK_SERVICE {
        return TransitKind::Walk;
    }
    if MRT_LINE_PREFIXES
        .iter()
        .any(|prefix| service.starts_with(prefix))
    {
        return TransitKind::Mrt;
    }
    if LRT_MARKERS.iter().any(|marker| service.contains(marker)) {
        return TransitKind::Lrt;
    }
    TransitKind::Bus
}

/// Ride modes a rider has opted out of. Walking and in-station transfers
/// are never excludable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExcludedModes {
    pub bus: bool,
    pub mrt: bool,
    pub lrt: bool,
}

impl ExcludedModes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(self, kind: TransitKind) -> bool {
        match kind {
            TransitKind::Bus => self.bus,
            TransitKind::Mrt => self.mrt,
            TransitKind::Lrt => self.lrt,
            TransitKind::Walk | TransitKind::Transfer => false,
        }
    }

    pub fn exclude(mut self, kind: TransitKind) -> Self {
        match kind {
            TransitKind::Bus => self.bus = true,
            TransitKind::Mrt => self.mrt = true,
            TransitKind::Lrt => self.lrt = true,
            TransitKind::Walk | TransitKind::Transfer => {}
        }
        self
    }
}

impl FromIterator<TransitKind> for ExcludedModes {
    fn from_iter<I: IntoIterator<Item = TransitKind>>(kinds: I) -> Self {
        kinds
            .into_iter()
            .fold(Self::default(), |modes, kind| modes.exclude(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_literal() {
        assert_eq!(classify_service("WALK"), TransitKind::Walk);
        // Case-sensitive on purpose; the data never lowercases it
        assert_eq!(classify_service("walk"), TransitKind::Bus);
    }

    #[test]
    fn mrt_line_prefixes() {
        for service in ["NSL", "EWL-1", "NEL", "CCL2", "DTL", "TEL"] {
            assert_eq!(classify_service(service), TransitKind::Mrt, "{service}");
        }
    }

    #[test]
    fn lrt_markers() {
        for service in ["BPLrt", "SKLrt-East", "PGLrt-West", "SengkangLRT"] {
            assert_eq!(classify_service(service), TransitKind::Lrt, "{service}");
        }
    }

    #[test]
    fn mrt_prefix_wins_over_lrt_marker() {
        // A line code prefix outranks an LRT substring later in the id
        assert_eq!(classify_service("NELRT"), TransitKind::Mrt);
    }

    #[test]
    fn bus_numbers_fall_through() {
        for service in ["10", "196", "901M", "NR7"] {
            assert_eq!(classify_service(service), TransitKind::Bus, "{service}");
        }
    }

    #[test]
    fn excluded_modes_never_cover_walking() {
        let modes: ExcludedModes = [TransitKind::Bus, TransitKind::Walk, TransitKind::Transfer]
            .into_iter()
            .collect();
        assert!(modes.contains(TransitKind::Bus));
        assert!(!modes.contains(TransitKind::Walk));
        assert!(!modes.contains(TransitKind::Transfer));
        assert!(!modes.contains(TransitKind::Mrt));
    }
}
