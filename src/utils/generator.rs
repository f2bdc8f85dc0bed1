//! Generates random carriers around a location.

use rand::Rng;

use crate::{carrier::CarrierRecord, haversine::EARTH_RADIUS_KM, location::Coordinate};

/// Generate `capacity` carriers scattered uniformly within `radius_km`
/// of `center`.
///
/// Every generated carrier has a valid coordinate. Names are
/// `carrier_<n>`, starting at 0.
pub fn generate_carriers_near(
    center: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Vec<CarrierRecord> {
    let mut rng = rand::thread_rng();
    (0..capacity)
        .map(|i| {
            // sqrt keeps the density uniform over the disc area.
            let distance_km = radius_km * rng.gen::<f64>().sqrt();
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let (latitude, longitude) = destination(center, distance_km, bearing);
            CarrierRecord {
                name: format!("carrier_{}", i),
                state: "generated".to_string(),
                ..CarrierRecord::at("", latitude, longitude)
            }
        })
        .collect()
}

/// Point reached by travelling `distance_km` from `start` along the
/// initial `bearing` (radians, clockwise from north).
fn destination(start: &Coordinate, distance_km: f64, bearing: f64) -> (f64, f64) {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat1 = start.latitude().to_radians();
    let lon1 = start.longitude().to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    let longitude = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (lat2.to_degrees().clamp(-90.0, 90.0), longitude)
}
