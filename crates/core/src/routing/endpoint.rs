use metro_watch_transit::StationIdentifier;
use serde::{Deserialize, Serialize};

use crate::closure::{ClosureSnapshot, ReasonCategory};

/// State of a route's origin or destination, checked before routing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointStatus {
    #[default]
    Open,
    /// Soft closure; routing still goes through
    Delayed,
    /// Hard closure
    Closed,
}

impl EndpointStatus {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn message(self, station_name: &str) -> Option<String> {
        match self {
            Self::Open => None,
            Self::Delayed => Some(format!(
                "Delays reported on the line at {station_name}. Take precautions."
            )),
            Self::Closed => Some(format!(
                "{station_name} is closed or failing. There are no routes to display."
            )),
        }
    }
}

pub fn endpoint_status(closures: &ClosureSnapshot, id: &StationIdentifier) -> EndpointStatus {
    match closures.reason(id) {
        None => EndpointStatus::Open,
        Some(ReasonCategory::HighReportVolume) => EndpointStatus::Delayed,
        Some(ReasonCategory::OtherClosure) => EndpointStatus::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::ClosureRecord;

    #[test]
    fn test_endpoint_status() {
        let closures = ClosureSnapshot::from_records([
            ClosureRecord::high_report_volume("Balderas - Línea 1"),
            ClosureRecord::closed("Salto del Agua - Línea 1"),
        ]);

        assert_eq!(
            endpoint_status(&closures, &"Balderas - Línea 1".into()),
            EndpointStatus::Delayed
        );
        assert_eq!(
            endpoint_status(&closures, &"Salto del Agua - Línea 1".into()),
            EndpointStatus::Closed
        );
        assert!(endpoint_status(&closures, &"Isabel la Católica - Línea 1".into()).is_open());
    }

    #[test]
    fn test_messages() {
        assert_eq!(EndpointStatus::Open.message("Balderas"), None);
        assert!(
            EndpointStatus::Delayed
                .message("Balderas")
                .unwrap()
                .contains("Balderas")
        );
        assert!(
            EndpointStatus::Closed
                .message("Balderas")
                .unwrap()
                .contains("no routes")
        );
    }
}
