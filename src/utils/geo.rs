//! Spherical-Earth geodesy helpers

/// Mean Earth radius in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Wrap a longitude in degrees into `[-180, 180)`
///
/// NaN stays NaN.
pub fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Great-circle distance in kilometers between two lat/lon positions in degrees
///
/// Uses the haversine formula on a sphere of [`EARTH_MEAN_RADIUS_KM`].
/// Longitudes do not need to share a domain: the formula only depends on
/// `sin²(Δλ/2)`, which is periodic in 360°.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    haversine_radians(
        lat1,
        lon1.to_radians(),
        lat1.cos(),
        lat2,
        lon2.to_radians(),
        lat2.cos(),
    )
}

/// Haversine distance in kilometers for positions already in radians
///
/// Takes the latitude cosines precomputed, so that an index can store them
/// once per reference entry.
#[inline]
pub fn haversine_radians(
    lat1: f64,
    lon1: f64,
    cos_lat1: f64,
    lat2: f64,
    lon2: f64,
    cos_lat2: f64,
) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat * 0.5).sin().powi(2) + cos_lat1 * cos_lat2 * (d_lon * 0.5).sin().powi(2);

    // Clamp against rounding slightly above 1 for antipodal points
    2.0 * EARTH_MEAN_RADIUS_KM * a.min(1.0).sqrt().asin()
}

/// Meridional lower bound of the great-circle distance, in kilometers
///
/// Never exceeds [`haversine_radians`] for the same positions, so it can
/// reject entries before the full evaluation.
#[inline]
pub fn meridional_km(lat1: f64, lat2: f64) -> f64 {
    (lat2 - lat1).abs() * EARTH_MEAN_RADIUS_KM
}
