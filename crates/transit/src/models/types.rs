//! Core data types for the metro network.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

/// Travel cost of an edge (minutes, stop count, ...). Always finite and non-negative.
pub type Cost = f64;

// ============================================================================
// Data Structures
// ============================================================================

/// A single metro stop on a single line.
///
/// `location` stores longitude in `x` and latitude in `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub line: LineIdentifier,
    pub location: Point,
}

impl Station {
    pub fn new(
        id: StationIdentifier,
        name: impl Into<Arc<str>>,
        line: LineIdentifier,
        location: Point,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            line,
            location,
        }
    }

    /// Station whose id follows the `"<name> - <line>"` convention
    pub fn on_line(name: &str, line: &str, latitude: f64, longitude: f64) -> Self {
        Self::new(
            StationIdentifier::from_parts(name, line),
            name,
            LineIdentifier::new(line),
            Point::new(longitude, latitude),
        )
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

/// Directed weighted edge to another station
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub to: StationIdentifier,
    pub cost: Cost,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Station not found: {0}")]
    UnknownStation(StationIdentifier),

    #[error("Station defined twice: {0}")]
    DuplicateStation(StationIdentifier),

    #[error("Connection {from} -> {to} references a station that does not exist")]
    GraphInconsistency {
        from: StationIdentifier,
        to: StationIdentifier,
    },

    #[error("Connection {from} -> {to} has invalid cost {cost}")]
    InvalidCost {
        from: StationIdentifier,
        to: StationIdentifier,
        cost: Cost,
    },

    #[error("Search from {start} to {end} exceeded its deadline after expanding {expanded} stations")]
    SearchTimedOut {
        start: StationIdentifier,
        end: StationIdentifier,
        expanded: usize,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_on_line() {
        let station = Station::on_line("Balderas", "Línea 1", 19.4273, -99.1490);

        assert_eq!(station.id.as_str(), "Balderas - Línea 1");
        assert_eq!(&*station.name, "Balderas");
        assert_eq!(station.line.as_str(), "Línea 1");
        assert_eq!(station.latitude(), 19.4273);
        assert_eq!(station.longitude(), -99.1490);
    }

    #[test]
    fn test_error_messages() {
        let err = TransitError::GraphInconsistency {
            from: "A".into(),
            to: "Z".into(),
        };
        assert_eq!(
            err.to_string(),
            "Connection A -> Z references a station that does not exist"
        );
        assert_eq!(
            TransitError::UnknownStation("Q".into()).to_string(),
            "Station not found: Q"
        );
    }
}
