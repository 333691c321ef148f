//! Great-circle distance.

use crate::constants::EARTH_RADIUS_KM;
use triage_types::GeoPoint;

/// Haversine distance between two coordinates, in kilometres.
///
/// Symmetric and non-negative; zero (within floating tolerance) for
/// identical points.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude().to_radians().cos() * b.latitude().to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
