//! Plain records handed across the FFI boundary.

use chrono::{DateTime, Utc};
use metro_watch_core::closure::{ClosureRecord, ReasonCategory};
use metro_watch_core::routing::{Advisory, EndpointStatus, RouteDecision};
use metro_watch_core::transit::{PathResult, Station};

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct StationInfo {
    pub id: String,
    pub name: String,
    pub line: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Station> for StationInfo {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.to_string(),
            line: station.line.to_string(),
            latitude: station.latitude(),
            longitude: station.longitude(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct PathInfo {
    pub stations: Vec<StationInfo>,
    /// `None` when no path exists
    pub total_cost: Option<f64>,
}

impl From<&PathResult> for PathInfo {
    fn from(path: &PathResult) -> Self {
        Self {
            stations: path.path.iter().map(StationInfo::from).collect(),
            total_cost: path.is_reachable().then_some(path.total_cost),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum AdvisoryKind {
    None,
    SoftWarning { alternative_available: bool },
    HardBlock,
    Unreachable,
}

impl From<&Advisory> for AdvisoryKind {
    fn from(advisory: &Advisory) -> Self {
        match advisory {
            Advisory::None => Self::None,
            Advisory::SoftWarning {
                alternative_available,
                ..
            } => Self::SoftWarning {
                alternative_available: *alternative_available,
            },
            Advisory::HardBlock { .. } => Self::HardBlock,
            Advisory::Unreachable { .. } => Self::Unreachable,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct RouteInfo {
    pub primary: PathInfo,
    pub alternative: Option<PathInfo>,
    pub advisory: AdvisoryKind,
    /// Names of the stations the advisory is about
    pub flagged_stations: Vec<String>,
    pub is_hard_blocked: bool,
    /// Banner text for the advisory
    pub message: Option<String>,
}

impl From<&RouteDecision> for RouteInfo {
    fn from(decision: &RouteDecision) -> Self {
        Self {
            primary: PathInfo::from(&decision.primary_path),
            alternative: decision.alternative_path.as_ref().map(PathInfo::from),
            advisory: AdvisoryKind::from(&decision.advisory),
            flagged_stations: decision.advisory.stations().to_vec(),
            is_hard_blocked: decision.is_hard_blocked,
            message: decision.message(),
        }
    }
}

/// One entry of the closure feed as the app receives it
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ClosureInput {
    pub station_id: String,
    /// Free-text reason; "Alta actividad de reportes" marks a soft closure
    pub reason: String,
    /// Unix epoch milliseconds
    pub closed_at_ms: Option<i64>,
}

impl From<ClosureInput> for ClosureRecord {
    fn from(input: ClosureInput) -> Self {
        let record = ClosureRecord::new(input.station_id, ReasonCategory::from_reason(&input.reason));
        match input.closed_at_ms.and_then(DateTime::<Utc>::from_timestamp_millis) {
            Some(closed_at) => record.with_closed_at(closed_at),
            None => record,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum EndpointState {
    Open,
    Delayed,
    Closed,
}

impl From<EndpointStatus> for EndpointState {
    fn from(status: EndpointStatus) -> Self {
        match status {
            EndpointStatus::Open => Self::Open,
            EndpointStatus::Delayed => Self::Delayed,
            EndpointStatus::Closed => Self::Closed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct EndpointReport {
    pub state: EndpointState,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_input_conversion() {
        let record = ClosureRecord::from(ClosureInput {
            station_id: "Pino Suárez - Línea 2".to_owned(),
            reason: "Alta actividad de reportes".to_owned(),
            closed_at_ms: Some(1_700_000_000_000),
        });

        assert_eq!(record.reason, ReasonCategory::HighReportVolume);
        assert_eq!(
            record.closed_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_000)
        );

        let record = ClosureRecord::from(ClosureInput {
            station_id: "Pino Suárez - Línea 2".to_owned(),
            reason: "Falla en la vía".to_owned(),
            closed_at_ms: None,
        });
        assert_eq!(record.reason, ReasonCategory::OtherClosure);
        assert_eq!(record.closed_at, None);
    }

    #[test]
    fn test_unreachable_path_has_no_cost() {
        let info = PathInfo::from(&PathResult::unreachable());
        assert!(info.stations.is_empty());
        assert_eq!(info.total_cost, None);
    }
}
