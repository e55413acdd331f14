//! Static station/line dataset loaded once at startup.
//!
//! ```json
//! {
//!   "stations": [
//!     { "name": "Pantitlán", "line": "Línea 1", "latitude": 19.4153, "longitude": -99.0722 }
//!   ],
//!   "connections": [
//!     { "from": "Pantitlán - Línea 1", "to": "Zaragoza - Línea 1", "cost": 2.0 }
//!   ]
//! }
//! ```

use std::io::Read;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::graph::StationGraph;
use crate::identifiers::*;
use crate::models::types::*;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StationDataset {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationRecord {
    /// Defaults to `"<name> - <line>"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StationIdentifier>,
    pub name: String,
    pub line: LineIdentifier,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub from: StationIdentifier,
    pub to: StationIdentifier,
    pub cost: Cost,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl StationRecord {
    fn into_station(self) -> Station {
        let id = self
            .id
            .unwrap_or_else(|| StationIdentifier::from_parts(&self.name, self.line.as_str()));
        Station::new(
            id,
            self.name,
            self.line,
            Point::new(self.longitude, self.latitude),
        )
    }
}

impl StationDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TransitError::SerializationError(e.to_string()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| TransitError::SerializationError(e.to_string()))
    }

    /// Build and validate the graph; dangling connections fail the load
    pub fn into_graph(self) -> Result<StationGraph> {
        let mut builder = StationGraph::builder();

        for record in self.stations {
            if !record.latitude.is_finite() || !record.longitude.is_finite() {
                return Err(TransitError::InvalidData(format!(
                    "station {} has non-finite coordinates",
                    record.name
                )));
            }
            builder.add_station(record.into_station());
        }

        for connection in self.connections {
            if connection.bidirectional {
                builder.connect_both(connection.from, connection.to, connection.cost);
            } else {
                builder.connect(connection.from, connection.to, connection.cost);
            }
        }

        builder.build()
    }
}
