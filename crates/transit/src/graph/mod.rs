//! Station graph storage and construction.

pub mod builder;
pub mod station_graph;

pub use builder::StationGraphBuilder;
pub use station_graph::StationGraph;
