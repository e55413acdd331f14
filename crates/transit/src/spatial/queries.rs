//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Convert meters to degrees at equator (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / 111_320.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Zócalo to Chapultepec is roughly 5.8 km
        let zocalo = Point::new(-99.1332, 19.4326);
        let chapultepec = Point::new(-99.1870, 19.4204);

        let dist = haversine_distance(zocalo, chapultepec);
        assert!((dist - 5_800.0).abs() < 500.0);
    }

    #[test]
    fn test_meters_to_degrees() {
        assert!((meters_to_degrees_approx(111_320.0) - 1.0).abs() < 1e-9);
    }
}
