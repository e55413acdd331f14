//! Construction and load-time validation of a [`StationGraph`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::StationGraph;
use crate::identifiers::StationIdentifier;
use crate::models::types::*;

/// Collects stations and connections, then validates them all at once in
/// [`StationGraphBuilder::build`]. Connections may reference stations that are
/// added later.
#[derive(Debug, Default)]
pub struct StationGraphBuilder {
    stations: Vec<Station>,
    connections: Vec<(StationIdentifier, Connection)>,
}

impl StationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&mut self, station: Station) -> &mut Self {
        self.stations.push(station);
        self
    }

    /// One-way connection
    pub fn connect(
        &mut self,
        from: impl Into<StationIdentifier>,
        to: impl Into<StationIdentifier>,
        cost: Cost,
    ) -> &mut Self {
        self.connections.push((
            from.into(),
            Connection {
                to: to.into(),
                cost,
            },
        ));
        self
    }

    /// Connection in both directions with the same cost
    pub fn connect_both(
        &mut self,
        a: impl Into<StationIdentifier>,
        b: impl Into<StationIdentifier>,
        cost: Cost,
    ) -> &mut Self {
        let a = a.into();
        let b = b.into();
        self.connect(a.clone(), b.clone(), cost);
        self.connect(b, a, cost)
    }

    /// Validate and freeze the topology.
    ///
    /// Fails on duplicate station ids, edges whose endpoints are unknown, and
    /// costs that are negative or not finite. Every station starts active.
    pub fn build(&mut self) -> Result<StationGraph> {
        let stations = std::mem::take(&mut self.stations);
        let connections = std::mem::take(&mut self.connections);

        let mut index = HashMap::with_capacity(stations.len());
        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id.clone(), i).is_some() {
                return Err(TransitError::DuplicateStation(station.id.clone()));
            }
        }

        let mut adjacency: Vec<Vec<Connection>> = vec![Vec::new(); stations.len()];
        for (from, connection) in connections {
            let (Some(&from_idx), true) = (index.get(&from), index.contains_key(&connection.to))
            else {
                return Err(TransitError::GraphInconsistency {
                    from,
                    to: connection.to,
                });
            };

            if !connection.cost.is_finite() || connection.cost < 0.0 {
                return Err(TransitError::InvalidCost {
                    from,
                    to: connection.to,
                    cost: connection.cost,
                });
            }

            adjacency[from_idx].push(connection);
        }

        Ok(StationGraph::from_parts(
            stations.into_iter().map(Arc::new).collect(),
            index,
            adjacency,
        ))
    }
}
