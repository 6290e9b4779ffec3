//! Spherical-geodesy kernels.
//!
//! Everything here treats the Earth as a sphere of radius
//! [`EARTH_RADIUS_M`]. That is accurate to a few permille, plenty for
//! target selection and for moving sources by local offsets.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two geographic points, in metres.
///
/// Haversine formula, numerically stable for small separations.
pub fn distance_m(alat: f64, alon: f64, blat: f64, blon: f64) -> f64 {
    let la1 = alat.to_radians();
    let la2 = blat.to_radians();
    let dlat = (blat - alat).to_radians();
    let dlon = (blon - alon).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + la1.cos() * la2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}

/// Shift a geographic point by local north/east offsets in metres.
///
/// First-order approximation, adequate for offsets small compared to the
/// Earth radius. Near the poles the east offset degenerates and the
/// longitude is left unchanged.
pub fn ne_to_latlon(lat: f64, lon: f64, north_m: f64, east_m: f64) -> (f64, f64) {
    let dlat = (north_m / EARTH_RADIUS_M).to_degrees();
    let coslat = lat.to_radians().cos();
    let dlon = if coslat.abs() < 1e-9 {
        0.0
    } else {
        (east_m / (EARTH_RADIUS_M * coslat)).to_degrees()
    };
    (lat + dlat, lon + dlon)
}

/// Destination point after travelling `distance_m` along the great
/// circle leaving (`lat`, `lon`) at the given azimuth (degrees,
/// clockwise from north).
///
/// Exact on the sphere: [`distance_m`] between origin and destination
/// recovers the input distance.
pub fn latlon_at(lat: f64, lon: f64, azimuth_deg: f64, distance_m: f64) -> (f64, f64) {
    let la1 = lat.to_radians();
    let az = azimuth_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let la2 = (la1.sin() * delta.cos() + la1.cos() * delta.sin() * az.cos()).asin();
    let dlon = (az.sin() * delta.sin() * la1.cos()).atan2(delta.cos() - la1.sin() * la2.sin());
    (la2.to_degrees(), lon + dlon.to_degrees())
}
