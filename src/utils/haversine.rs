//! Great-circle distance between two coordinates.

use crate::location::Coordinate;

/// Mean Earth radius (IUGG), in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Returns the haversine distance between `from` and `to` in
/// kilometers.
///
/// The haversine term is clamped to [0, 1] so rounding cannot push
/// `sqrt` or `atan2` outside of their domain for identical or antipodal
/// points.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat_from = from.latitude().to_radians();
    let lat_to = to.latitude().to_radians();
    let d_lat = lat_to - lat_from;
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
