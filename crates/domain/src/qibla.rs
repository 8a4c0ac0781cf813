//! Qibla direction: initial great-circle bearing toward the Kaaba.

use common::{Bearing, GeoPoint};

/// Location of the Kaaba in Mecca.
pub const KAABA: GeoPoint = GeoPoint::new(21.422487, 39.826206);

/// Returns the bearing from `from` toward the Kaaba.
pub fn qibla_bearing(from: GeoPoint) -> Bearing {
    initial_bearing(from, KAABA)
}

/// Initial bearing (forward azimuth) from `from` toward `to`.
///
/// This uses the `tan(lat_to)` form of the spherical formula rather than the
/// more common `sin(lat_to)` one. Existing clients compare against values
/// produced by this exact expression, so it must not be "corrected".
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> Bearing {
    let lat1 = from.lat_radians();
    let lat2 = to.lat_radians();
    let dlon = to.lon_radians() - from.lon_radians();

    let y = dlon.sin();
    let x = lat1.cos() * lat2.tan() - lat1.sin() * dlon.cos();

    Bearing::from_degrees(y.atan2(x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn bearing_from_near_the_kaaba_is_stable() {
        let bearing = qibla_bearing(GeoPoint::new(21.3891, 39.8579));
        assert_close(bearing.degrees(), 318.535_260_869);
    }

    #[test]
    fn bearing_from_known_cities() {
        assert_close(
            qibla_bearing(GeoPoint::new(51.5074, -0.1278)).degrees(),
            118.987_223_992,
        );
        assert_close(
            qibla_bearing(GeoPoint::new(40.7128, -74.0060)).degrees(),
            58.481_706_046,
        );
        assert_close(
            qibla_bearing(GeoPoint::new(-33.8688, 151.2093)).degrees(),
            277.499_578_955,
        );
    }

    #[test]
    fn bearing_at_the_kaaba_is_defined() {
        let bearing = qibla_bearing(KAABA).degrees();
        assert!(bearing.is_finite());
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn bearing_at_the_poles_is_defined() {
        for lat in [90.0, -90.0] {
            let bearing = qibla_bearing(GeoPoint::new(lat, 0.0)).degrees();
            assert!(bearing.is_finite());
            assert!((0.0..360.0).contains(&bearing));
        }
    }

    #[test]
    fn bearing_is_always_in_range() {
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let bearing = qibla_bearing(GeoPoint::new(lat, lon)).degrees();
                assert!(
                    (0.0..360.0).contains(&bearing),
                    "bearing {bearing} out of range at ({lat}, {lon})"
                );
                lon += 7.5;
            }
            lat += 2.5;
        }
    }

    #[test]
    fn out_of_range_input_still_yields_a_bearing() {
        let bearing = qibla_bearing(GeoPoint::new(135.0, 500.0)).degrees();
        assert!((0.0..360.0).contains(&bearing));
    }
}
