use crate::domain::{GeoPoint, Hypocenter, Station, TravelResult, ValidationError, VelocityModel};
use crate::travel_time::haversine::surface_distance;
use tracing::{instrument, trace, warn};

/// Slant distance from the hypocenter to the station and the travel times of both phases along it.
///
/// Inputs are not validated: out-of-range coordinates give geometrically meaningless but defined numbers and NaN
/// propagates to every output. Use [`calculate_strict`] to reject such inputs instead.
pub fn calculate(hypocenter: &Hypocenter, station: &Station, model: &VelocityModel) -> TravelResult {
    let surface_distance_km = surface_distance(&hypocenter.location, &station.location, model.earth_radius_km());
    let vertical_difference_km = station.elevation_km - hypocenter.elevation_km();
    let distance_km = (surface_distance_km.powi(2) + vertical_difference_km.powi(2)).sqrt();

    trace!(
        station = station.name.as_str(),
        surface_distance_km, vertical_difference_km, distance_km, "Computed slant distance"
    );

    TravelResult::new(distance_km, distance_km / model.vp_km_s(), distance_km / model.vs_km_s())
}

/// Same as [`calculate`], but rejects out-of-range coordinates, invalid depths or elevations and unusable models.
#[instrument(skip_all, fields(station = station.name.as_str()))]
pub fn calculate_strict(hypocenter: &Hypocenter, station: &Station, model: &VelocityModel) -> Result<TravelResult, ValidationError> {
    let validation = model
        .validate()
        .and_then(|_| hypocenter.validate())
        .and_then(|_| station.validate());

    if let Err(err) = validation {
        warn!("⚠️ Rejected input: {}", err);
        return Err(err);
    }

    Ok(calculate(hypocenter, station, model))
}

/// Flat form of [`calculate`] with the default velocity model.
///
/// Returns `(distance_km, p_wave_time_s, s_wave_time_s)`.
pub fn calculate_distance_and_pwave_time(
    hypo_lat: f64,
    hypo_lon: f64,
    hypo_depth: f64,
    station_lat: f64,
    station_lon: f64,
    station_height: f64,
) -> (f64, f64, f64) {
    let hypocenter = Hypocenter::new(GeoPoint::new(hypo_lat, hypo_lon), hypo_depth);
    let station = Station::new(String::new(), GeoPoint::new(station_lat, station_lon), station_height);

    let result = calculate(&hypocenter, &station, &VelocityModel::default());
    (result.distance_km, result.p_time_s, result.s_time_s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation_error::Wave;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn petrinja() -> Hypocenter {
        Hypocenter::new(GeoPoint::new(45.41629, 16.20806), 13.64)
    }

    fn zagreb() -> Station {
        Station::new("Zagreb", GeoPoint::new(45.827084, 15.98687), 0.179)
    }

    fn assert_relative(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test_log::test]
    fn reproduces_the_petrinja_reference_scenario() {
        let result = calculate(&petrinja(), &zagreb(), &VelocityModel::default());

        assert_relative(result.distance_km, 50.72826582417411);
        assert_relative(result.p_time_s, 8.746252728305882);
        assert_relative(result.s_time_s, 14.5770878805098);

        assert_eq!(format!("{:.2}", result.distance_km), "50.73");
        assert_eq!(format!("{:.2}", result.p_time_s), "8.75");
        assert_eq!(format!("{:.2}", result.s_time_s), "14.58");
        assert_eq!(format!("{:.2}", result.lead_time()), "5.83");
    }

    #[test]
    fn same_point_on_the_surface_is_zero() {
        let hypocenter = Hypocenter::new(GeoPoint::new(45.0, 16.0), 0.0);
        let station = Station::new("epicenter", GeoPoint::new(45.0, 16.0), 0.0);

        let result = calculate(&hypocenter, &station, &VelocityModel::default());

        assert_eq!(result, TravelResult::new(0.0, 0.0, 0.0));
    }

    #[rstest]
    #[case::shallow(5.0, 0.0, 5.0)]
    #[case::doubled(10.0, 0.0, 10.0)]
    #[case::with_elevation(10.0, 0.5, 10.5)]
    #[case::below_sea_level(10.0, -0.5, 9.5)]
    fn distance_is_the_vertical_difference_above_the_hypocenter(#[case] depth_km: f64, #[case] elevation_km: f64, #[case] expected: f64) {
        let hypocenter = Hypocenter::new(GeoPoint::new(45.0, 16.0), depth_km);
        let station = Station::new("above", GeoPoint::new(45.0, 16.0), elevation_km);

        let result = calculate(&hypocenter, &station, &VelocityModel::default());

        assert_relative(result.distance_km, expected);
    }

    #[test]
    fn slant_distance_is_pythagorean() {
        let hypocenter = petrinja();
        let station = zagreb();
        let model = VelocityModel::default();

        let result = calculate(&hypocenter, &station, &model);
        let surface = surface_distance(&hypocenter.location, &station.location, model.earth_radius_km());
        let vertical = station.elevation_km + hypocenter.depth_km;

        assert_relative(result.distance_km.powi(2), surface.powi(2) + vertical.powi(2));
        assert!(result.distance_km >= vertical.abs());
    }

    #[rstest]
    #[case(GeoPoint::new(45.0, 16.0), GeoPoint::new(45.1, 16.1), 0.0)]
    #[case(GeoPoint::new(-33.0, 151.0), GeoPoint::new(35.7, 139.7), 30.0)]
    #[case(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0), 700.0)]
    fn p_wave_arrives_before_s_wave(#[case] epicenter: GeoPoint, #[case] station: GeoPoint, #[case] depth_km: f64) {
        let result = calculate(
            &Hypocenter::new(epicenter, depth_km),
            &Station::new("any", station, 0.0),
            &VelocityModel::default(),
        );

        assert!(result.distance_km > 0.0);
        assert!(result.p_time_s > 0.0);
        assert!(result.p_time_s < result.s_time_s);
    }

    #[test]
    fn swapping_positions_keeps_the_distance() {
        let model = VelocityModel::default();
        let a = GeoPoint::new(45.41629, 16.20806);
        let b = GeoPoint::new(45.827084, 15.98687);

        let forward = calculate(&Hypocenter::new(a, 10.0), &Station::new("b", b, 0.0), &model);
        let backward = calculate(&Hypocenter::new(b, 10.0), &Station::new("a", a, 0.0), &model);

        assert_relative(forward.distance_km, backward.distance_km);
    }

    #[test]
    fn uses_the_velocities_of_the_given_model() {
        let model = VelocityModel::new(8.0, 4.0, 6371.0);
        let hypocenter = Hypocenter::new(GeoPoint::new(0.0, 0.0), 40.0);
        let station = Station::new("above", GeoPoint::new(0.0, 0.0), 0.0);

        let result = calculate(&hypocenter, &station, &model);

        assert_eq!(result, TravelResult::new(40.0, 5.0, 10.0));
    }

    #[test]
    fn antipodal_station_does_not_produce_nan() {
        let hypocenter = Hypocenter::new(GeoPoint::new(0.0, 0.0), 0.0);
        let station = Station::new("antipode", GeoPoint::new(0.0, 180.0), 0.0);

        let result = calculate(&hypocenter, &station, &VelocityModel::default());

        assert!(result.distance_km.is_finite());
        assert_relative(result.distance_km, std::f64::consts::PI * 6371.0);
    }

    #[test]
    fn out_of_range_input_is_not_rejected() {
        let hypocenter = Hypocenter::new(GeoPoint::new(120.0, 400.0), -5.0);

        let result = calculate(&hypocenter, &zagreb(), &VelocityModel::default());

        assert!(result.distance_km.is_finite());
    }

    #[test]
    fn nan_input_propagates() {
        let hypocenter = Hypocenter::new(GeoPoint::new(f64::NAN, 16.0), 10.0);

        let result = calculate(&hypocenter, &zagreb(), &VelocityModel::default());

        assert!(result.distance_km.is_nan());
        assert!(result.p_time_s.is_nan());
        assert!(result.s_time_s.is_nan());
    }

    #[test_log::test]
    fn strict_mode_accepts_valid_input() {
        let result = calculate_strict(&petrinja(), &zagreb(), &VelocityModel::default());

        assert_eq!(result, Ok(calculate(&petrinja(), &zagreb(), &VelocityModel::default())));
    }

    #[test_log::test]
    fn strict_mode_rejects_an_invalid_hypocenter() {
        let hypocenter = Hypocenter::new(GeoPoint::new(45.0, 190.0), 10.0);

        let result = calculate_strict(&hypocenter, &zagreb(), &VelocityModel::default());

        assert_eq!(result, Err(ValidationError::InvalidLongitude(190.0)));
    }

    #[test_log::test]
    fn strict_mode_rejects_an_invalid_station() {
        let station = Station::new("Zagreb", GeoPoint::new(-95.0, 15.98687), 0.179);

        let result = calculate_strict(&petrinja(), &station, &VelocityModel::default());

        assert_eq!(result, Err(ValidationError::InvalidLatitude(-95.0)));
    }

    #[test_log::test]
    fn strict_mode_rejects_an_invalid_model() {
        let model = VelocityModel::new(-5.8, 3.48, 6371.0);

        let result = calculate_strict(&petrinja(), &zagreb(), &model);

        assert_eq!(result, Err(ValidationError::InvalidVelocity { wave: Wave::P, value: -5.8 }));
    }

    #[test]
    fn flat_signature_matches_the_structured_one() {
        let (distance, p_time, s_time) = calculate_distance_and_pwave_time(45.41629, 16.20806, 13.64, 45.827084, 15.98687, 0.179);
        let expected = calculate(&petrinja(), &zagreb(), &VelocityModel::default());

        assert_eq!((distance, p_time, s_time), (expected.distance_km, expected.p_time_s, expected.s_time_s));
    }
}
