//! # metro-watch-transit
//!
//! Metro network model and shortest path search.
//!
//! ## Features
//!
//! - **Station graph**: stations as nodes, weighted connections as edges, and a
//!   per-station active flag that reflects the current closures
//! - **Dijkstra search**: closures and explicit exclusions are applied at
//!   traversal time, so a search never mutates the graph
//! - **Spatial queries**: R-tree backed nearest/radius station lookups
//! - **Dataset loading**: JSON station/line data, validated at load time
//!   (`dataset` feature)
//!
//! ## Example
//!
//! ```
//! use metro_watch_transit::prelude::*;
//!
//! let mut graph = StationGraph::builder()
//!     .add_station(Station::on_line("Hidalgo", "Línea 2", 19.4375, -99.1470))
//!     .add_station(Station::on_line("Bellas Artes", "Línea 2", 19.4363, -99.1413))
//!     .add_station(Station::on_line("Allende", "Línea 2", 19.4355, -99.1374))
//!     .connect_both("Hidalgo - Línea 2", "Bellas Artes - Línea 2", 1.0)
//!     .connect_both("Bellas Artes - Línea 2", "Allende - Línea 2", 1.0)
//!     .build()
//!     .unwrap();
//!
//! let hidalgo = StationIdentifier::from_parts("Hidalgo", "Línea 2");
//! let allende = StationIdentifier::from_parts("Allende", "Línea 2");
//!
//! let route = shortest_path(&graph, &hidalgo, &allende, &SearchConstraints::restricted()).unwrap();
//! assert_eq!(route.station_names(), ["Hidalgo", "Bellas Artes", "Allende"]);
//!
//! // Closing the middle station cuts the line
//! graph.set_active(&StationIdentifier::from_parts("Bellas Artes", "Línea 2"), false).unwrap();
//! let route = shortest_path(&graph, &hidalgo, &allende, &SearchConstraints::restricted()).unwrap();
//! assert!(!route.is_reachable());
//! ```

pub mod graph;
pub mod identifiers;
pub mod models;
pub mod search;
pub mod spatial;

#[cfg(feature = "dataset")]
pub mod dataset;

// Re-exports for convenience
pub mod prelude {
    pub use crate::graph::{StationGraph, StationGraphBuilder};
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*, PathResult};
    pub use crate::search::{shortest_path, SearchConstraints};
    pub use geo::Point;

    #[cfg(feature = "dataset")]
    pub use crate::dataset::{ConnectionRecord, StationDataset, StationRecord};
}

pub use prelude::*;
