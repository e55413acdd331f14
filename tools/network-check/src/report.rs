use std::collections::HashSet;

use metro_watch_core::closure::ClosureSnapshot;
use metro_watch_core::routing::{endpoint_status, RouteDecision};
use metro_watch_core::transit::{PathResult, StationGraph, StationIdentifier, TransitNetwork};

/// Shape of a loaded network
#[derive(Debug, Default)]
pub struct NetworkSummary {
    pub station_count: usize,
    pub line_count: usize,
    pub connection_count: usize,
    /// Stations with no outgoing connection
    pub dead_ends: Vec<StationIdentifier>,
}

impl NetworkSummary {
    pub fn of(graph: &StationGraph) -> Self {
        let mut summary = Self {
            station_count: graph.len(),
            ..Self::default()
        };
        let mut lines = HashSet::new();

        for station in graph.stations() {
            lines.insert(station.line.clone());
            let connections = graph.connections(&station.id);
            summary.connection_count += connections.len();
            if connections.is_empty() {
                summary.dead_ends.push(station.id.clone());
            }
        }

        summary.line_count = lines.len();
        summary.dead_ends.sort();
        summary
    }

    pub fn log(&self) {
        log::info!(
            "  {} stations on {} lines, {} directed connections",
            self.station_count,
            self.line_count,
            self.connection_count
        );
        for id in &self.dead_ends {
            log::warn!("  {id} has no outgoing connections");
        }
    }
}

pub fn print_endpoints<'a>(
    graph: &StationGraph,
    closures: &ClosureSnapshot,
    endpoints: impl IntoIterator<Item = &'a StationIdentifier>,
) {
    for id in endpoints {
        let Some(station) = graph.station(id) else {
            continue;
        };
        if let Some(message) = endpoint_status(closures, id).message(&station.name) {
            println!("! {message}");
        }
    }
}

pub fn print_decision(decision: &RouteDecision) {
    if let Some(message) = decision.message() {
        println!("{message}");
        println!();
    }

    print_path("Route", &decision.primary_path);
    if let Some(alternative) = &decision.alternative_path {
        print_path("Alternative", alternative);
    }
}

fn print_path(label: &str, path: &PathResult) {
    if !path.is_reachable() {
        println!("{label}: none");
        return;
    }

    println!("{label} (cost {:.1}, {} stations):", path.total_cost, path.len());
    for station in &path.path {
        println!("  {} ({})", station.name, station.line);
    }
}
