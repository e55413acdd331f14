//! Route search over the station graph.

pub mod dijkstra;

pub use dijkstra::{shortest_path, SearchConstraints};
