use serde::Serialize;

use crate::CoordinateError;

/// Which half of a coordinate pair a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Short name, matching the query parameter the value is read from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Latitude => "lat",
            Axis::Longitude => "lon",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the globe in decimal degrees.
///
/// Ranges are not enforced: latitude is nominally in [-90, 90] and longitude
/// in [-180, 180], but out-of-range values are carried through untouched and
/// simply yield whatever the trigonometry makes of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parses a point from raw textual latitude and longitude.
    ///
    /// Only the numeric parse is checked (plus finiteness); no range
    /// validation happens here.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, CoordinateError> {
        let lat = parse_component(Axis::Latitude, lat)?;
        let lon = parse_component(Axis::Longitude, lon)?;
        Ok(Self { lat, lon })
    }

    /// Latitude in radians.
    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

fn parse_component(axis: Axis, raw: Option<&str>) -> Result<f64, CoordinateError> {
    let raw = raw.ok_or(CoordinateError::Missing { axis })?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| CoordinateError::NotANumber {
            axis,
            input: raw.to_string(),
            reason: e.to_string(),
        })?;

    if !value.is_finite() {
        return Err(CoordinateError::NotFinite {
            axis,
            input: raw.to_string(),
        });
    }
    Ok(value)
}

/// Compass bearing in degrees, clockwise from true north, in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Bearing(f64);

impl Bearing {
    /// Normalizes an angle in degrees (as returned by `atan2`) into [0, 360).
    pub fn from_degrees(degrees: f64) -> Self {
        Self((degrees + 360.0) % 360.0)
    }

    /// Returns the bearing in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl From<Bearing> for f64 {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}
