//! Core traits for the metro network.
//!
//! The search engine and the routing policy only see the network through
//! [`TransitNetwork`], so alternative storages can be plugged in.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;
use crate::models::types::*;

/// Read-only view of a station graph with per-station active flags
pub trait TransitNetwork: Send + Sync {
    // ---- Lookups ----
    fn station(&self, id: &StationIdentifier) -> Option<&Arc<Station>>;

    fn contains(&self, id: &StationIdentifier) -> bool {
        self.station(id).is_some()
    }

    /// Whether the station is currently open for routing.
    /// Unknown stations are never active.
    fn is_active(&self, id: &StationIdentifier) -> bool;

    /// Every outgoing edge as stored, regardless of active flags
    fn connections(&self, id: &StationIdentifier) -> &[Connection];

    // ---- Collections ----
    fn all_stations(&self) -> Vec<Arc<Station>>;

    // ---- Spatial queries ----

    /// Find stations within radius (meters)
    fn stations_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Station>>;

    /// Find the N nearest stations to a point
    fn nearest_stations(&self, point: Point, n: usize) -> Vec<Arc<Station>>;
}
