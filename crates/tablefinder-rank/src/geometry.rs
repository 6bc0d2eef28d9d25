//! Planar distances between coordinates, in degrees.
//!
//! These treat latitude and longitude as a flat plane, which only holds over
//! small spans such as a single city.

use tablefinder_core::Coordinate;

/// Squared Euclidean distance. Monotonic in [`distance`], so it is used
/// wherever only relative order matters.
#[must_use]
pub fn squared_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    dlat * dlat + dlng * dlng
}

#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    squared_distance(a, b).sqrt()
}
