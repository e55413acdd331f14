//! R-tree nodes for spatial indexing.
//!
//! Wraps stations with geometric data for efficient spatial queries.
//!
//! ## Two-Stage Filtering
//!
//! Radius queries first filter with Euclidean distance in degrees inside the
//! R-tree, then apply the Haversine distance on the surviving candidates.

use std::sync::Arc;

use geo::Point;
use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::types::Station;

#[derive(Clone)]
pub struct StationNode {
    pub station: Arc<Station>,
    point: [f64; 2],
}

impl StationNode {
    pub fn new(location: Point, station: Arc<Station>) -> Self {
        Self {
            station,
            point: [location.x(), location.y()],
        }
    }
}

impl RTreeObject for StationNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}
