use crate::domain::GeoPoint;

/// Great-circle distance between two points on a sphere, in the unit of `radius`.
pub fn surface_distance(from: &GeoPoint, to: &GeoPoint, radius: f64) -> f64 {
    let (from_lat, from_lon) = from.to_radians();
    let (to_lat, to_lon) = to.to_radians();

    let delta_lat = to_lat - from_lat;
    let delta_lon = to_lon - from_lon;

    let a = (delta_lat / 2.0).sin().powi(2) + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 near antipodal points, NaN passes through
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}
