//! Result of a single shortest path search.

use crate::identifiers::StationIdentifier;
use crate::models::types::{Cost, Station};

/// Ordered stations from start to end (inclusive) and the accumulated cost.
///
/// Stations are snapshot copies, not live graph nodes. An unreachable result
/// has an empty path and an infinite cost.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    pub path: Vec<Station>,
    pub total_cost: Cost,
}

impl PathResult {
    pub fn new(path: Vec<Station>, total_cost: Cost) -> Self {
        Self { path, total_cost }
    }

    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_cost: Cost::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.total_cost.is_finite()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn first(&self) -> Option<&Station> {
        self.path.first()
    }

    pub fn last(&self) -> Option<&Station> {
        self.path.last()
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &StationIdentifier> + '_ {
        self.path.iter().map(|station| &station.id)
    }

    pub fn station_names(&self) -> Vec<String> {
        self.path.iter().map(|station| station.name.to_string()).collect()
    }

    /// True when both results visit the same stations in the same order
    pub fn same_stations(&self, other: &PathResult) -> bool {
        self.station_ids().eq(other.station_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(names: &[&str], cost: Cost) -> PathResult {
        PathResult::new(
            names
                .iter()
                .map(|name| Station::on_line(name, "Línea 1", 0.0, 0.0))
                .collect(),
            cost,
        )
    }

    #[test]
    fn test_unreachable() {
        let result = PathResult::unreachable();
        assert!(!result.is_reachable());
        assert!(result.is_empty());
        assert!(result.total_cost.is_infinite());
    }

    #[test]
    fn test_same_stations_ignores_cost() {
        let a = path_of(&["A", "B", "C"], 3.0);
        let b = path_of(&["A", "B", "C"], 7.0);
        let c = path_of(&["A", "C"], 3.0);

        assert!(a.same_stations(&b));
        assert!(!a.same_stations(&c));
    }

    #[test]
    fn test_station_names() {
        let result = path_of(&["Hidalgo", "Juárez"], 1.0);
        assert_eq!(result.station_names(), vec!["Hidalgo", "Juárez"]);
        assert_eq!(result.first().map(|s| s.id.as_str()), Some("Hidalgo - Línea 1"));
        assert_eq!(result.last().map(|s| s.id.as_str()), Some("Juárez - Línea 1"));
    }
}
