//! In-memory station graph with per-station active flags.
//!
//! Topology is frozen once built; only the active flags change, and only
//! through [`StationGraph::set_active`] / [`StationGraph::set_all_active`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use geo::Point;
use rstar::RTree;

use crate::graph::StationGraphBuilder;
use crate::identifiers::StationIdentifier;
use crate::models::{traits::*, types::*};
use crate::spatial::index::StationNode;

/// Metro network graph.
///
/// Cloning copies the flags and adjacency, while station data stays shared
/// behind `Arc`s.
#[derive(Clone)]
pub struct StationGraph {
    // Core data
    stations: Vec<Arc<Station>>,
    connections: Vec<Vec<Connection>>,
    active: Vec<bool>,

    // Lookup map
    index: HashMap<StationIdentifier, usize>,

    // Spatial index
    station_tree: RTree<StationNode>,
}

impl StationGraph {
    pub fn builder() -> StationGraphBuilder {
        StationGraphBuilder::new()
    }

    pub(crate) fn from_parts(
        stations: Vec<Arc<Station>>,
        index: HashMap<StationIdentifier, usize>,
        connections: Vec<Vec<Connection>>,
    ) -> Self {
        let station_tree = RTree::bulk_load(
            stations
                .iter()
                .map(|s| StationNode::new(s.location, s.clone()))
                .collect(),
        );

        Self {
            active: vec![true; stations.len()],
            stations,
            connections,
            index,
            station_tree,
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in load order
    pub fn stations(&self) -> impl Iterator<Item = &Arc<Station>> + '_ {
        self.stations.iter()
    }

    pub fn set_active(&mut self, id: &StationIdentifier, active: bool) -> Result<()> {
        let idx = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| TransitError::UnknownStation(id.clone()))?;
        self.active[idx] = active;
        Ok(())
    }

    pub fn set_all_active(&mut self, active: bool) {
        self.active.fill(active);
    }

    /// Ids of every station currently closed for routing, in load order
    pub fn inactive_stations(&self) -> Vec<StationIdentifier> {
        self.stations
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| !**active)
            .map(|(station, _)| station.id.clone())
            .collect()
    }

    /// Outgoing edges whose target is active.
    ///
    /// Edges to inactive stations stay in storage and reappear once the
    /// target is reactivated.
    pub fn neighbors<'a>(
        &'a self,
        id: &StationIdentifier,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections(id)
            .iter()
            .filter(move |connection| self.is_active(&connection.to))
    }

    /// Case-insensitive substring match over station names and ids
    pub fn search_by_name(&self, query: &str) -> Vec<Arc<Station>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.stations
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&query)
                    || s.id.as_str().to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

impl fmt::Debug for StationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationGraph")
            .field("stations", &self.stations.len())
            .field(
                "connections",
                &self.connections.iter().map(Vec::len).sum::<usize>(),
            )
            .field("inactive", &self.inactive_stations())
            .finish()
    }
}

impl TransitNetwork for StationGraph {
    fn station(&self, id: &StationIdentifier) -> Option<&Arc<Station>> {
        self.index.get(id).map(|&idx| &self.stations[idx])
    }

    fn is_active(&self, id: &StationIdentifier) -> bool {
        self.index.get(id).is_some_and(|&idx| self.active[idx])
    }

    fn connections(&self, id: &StationIdentifier) -> &[Connection] {
        match self.index.get(id) {
            Some(&idx) => &self.connections[idx],
            None => &[],
        }
    }

    fn all_stations(&self) -> Vec<Arc<Station>> {
        self.stations.clone()
    }

    fn stations_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Station>> {
        use crate::spatial::queries::{haversine_distance, meters_to_degrees_approx};

        // Validate radius is positive
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        // A degree of longitude shrinks with latitude, so widen the
        // Euclidean prefilter accordingly.
        let shrink = point.y().to_radians().cos().abs().max(0.01);
        let radius_deg = meters_to_degrees_approx(radius_m) / shrink;

        self.station_tree
            .locate_within_distance([point.x(), point.y()], radius_deg * radius_deg)
            .filter(|node| haversine_distance(point, node.station.location) <= radius_m)
            .map(|node| node.station.clone())
            .collect()
    }

    fn nearest_stations(&self, point: Point, n: usize) -> Vec<Arc<Station>> {
        self.station_tree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .take(n)
            .map(|node| node.station.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> StationGraph {
        StationGraph::builder()
            .add_station(Station::on_line("Zócalo", "Línea 2", 19.4326, -99.1332))
            .add_station(Station::on_line("Allende", "Línea 2", 19.4355, -99.1374))
            .add_station(Station::on_line("Bellas Artes", "Línea 2", 19.4363, -99.1413))
            .add_station(Station::on_line("Chapultepec", "Línea 1", 19.4204, -99.1760))
            .connect_both("Zócalo - Línea 2", "Allende - Línea 2", 1.0)
            .connect_both("Allende - Línea 2", "Bellas Artes - Línea 2", 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = StationGraph::builder().build().unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.all_stations().len(), 0);
        assert!(graph.nearest_stations(Point::new(0.0, 0.0), 3).is_empty());
    }

    #[test]
    fn test_lookups() {
        let graph = sample_graph();
        let id = StationIdentifier::new("Allende - Línea 2");

        assert!(graph.contains(&id));
        assert_eq!(graph.station(&id).map(|s| &*s.name), Some("Allende"));
        assert!(!graph.contains(&"Allende - Línea 3".into()));
        assert!(graph.connections(&"Nowhere".into()).is_empty());
    }

    #[test]
    fn test_set_active_filters_neighbors_without_removing_edges() {
        let mut graph = sample_graph();
        let allende = StationIdentifier::new("Allende - Línea 2");
        let bellas_artes = StationIdentifier::new("Bellas Artes - Línea 2");

        graph.set_active(&bellas_artes, false).unwrap();

        let neighbors: Vec<_> = graph.neighbors(&allende).map(|c| c.to.as_str()).collect();
        assert_eq!(neighbors, vec!["Zócalo - Línea 2"]);
        assert_eq!(graph.connections(&allende).len(), 2);
        assert_eq!(graph.inactive_stations(), vec![bellas_artes.clone()]);

        graph.set_active(&bellas_artes, true).unwrap();
        assert_eq!(graph.neighbors(&allende).count(), 2);
        assert!(graph.inactive_stations().is_empty());
    }

    #[test]
    fn test_set_active_unknown_station() {
        let mut graph = sample_graph();
        let result = graph.set_active(&"Ghost - Línea 9".into(), false);
        assert!(matches!(result, Err(TransitError::UnknownStation(_))));
    }

    #[test]
    fn test_set_all_active() {
        let mut graph = sample_graph();
        graph.set_all_active(false);
        assert_eq!(graph.inactive_stations().len(), 4);
        assert!(!graph.is_active(&"Zócalo - Línea 2".into()));

        graph.set_all_active(true);
        assert!(graph.inactive_stations().is_empty());
    }

    #[test]
    fn test_search_by_name() {
        let graph = sample_graph();

        let hits = graph.search_by_name("bellas");
        assert_eq!(hits.len(), 1);
        assert_eq!(&*hits[0].name, "Bellas Artes");

        assert_eq!(graph.search_by_name("línea 2").len(), 3);
        assert!(graph.search_by_name("   ").is_empty());
    }

    #[test]
    fn test_stations_near() {
        let graph = sample_graph();
        let zocalo = Point::new(-99.1332, 19.4326);

        let nearby = graph.stations_near(zocalo, 600.0);
        let mut names: Vec<&str> = nearby.iter().map(|s| &*s.name).collect();
        names.sort();
        assert_eq!(names, vec!["Allende", "Zócalo"]);

        assert!(graph.stations_near(zocalo, -5.0).is_empty());
    }

    #[test]
    fn test_nearest_stations() {
        let graph = sample_graph();
        let nearest = graph.nearest_stations(Point::new(-99.1760, 19.4204), 1);
        assert_eq!(nearest.len(), 1);
        assert_eq!(&*nearest[0].name, "Chapultepec");
    }
}
