//! Observer location on the Earth.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HouseError;

/// Equatorial radius of the Earth in metres (IAU 1976).
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

/// Polar-to-equatorial axis ratio b/a (IAU 1976 flattening 1/298.257).
pub const EARTH_AXIS_RATIO: f64 = 1.0 - 1.0 / 298.257;

/// Geographic observer location.
///
/// Deserialization applies the range checks of [`GeoCoordinate::with_altitude`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    longitude_deg: f64,
    /// Height above sea level in metres.
    altitude_m: f64,
}

#[derive(Deserialize)]
struct GeoFields {
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(default)]
    altitude_m: f64,
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let f = GeoFields::deserialize(deserializer)?;
        Self::with_altitude(f.latitude_deg, f.longitude_deg, f.altitude_m)
            .map_err(serde::de::Error::custom)
    }
}

impl GeoCoordinate {
    /// Create a sea-level location, rejecting out-of-range or non-finite
    /// values.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, HouseError> {
        Self::with_altitude(latitude_deg, longitude_deg, 0.0)
    }

    /// Create a location with an explicit altitude.
    pub fn with_altitude(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, HouseError> {
        check_range("latitude", latitude_deg, 90.0)?;
        check_range("longitude", longitude_deg, 180.0)?;
        if !altitude_m.is_finite() {
            return Err(HouseError::InvalidCoordinate {
                field: "altitude",
                value: altitude_m,
            });
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    /// Geocentric latitude of this location in degrees.
    pub fn geocentric_latitude_deg(&self) -> f64 {
        geocentric_latitude_deg(self.latitude_deg, self.altitude_m)
    }
}

fn check_range(field: &'static str, value: f64, max_abs: f64) -> Result<(), HouseError> {
    if !value.is_finite() || value.abs() > max_abs {
        return Err(HouseError::InvalidCoordinate { field, value });
    }
    Ok(())
}

/// Geocentric latitude φ′ for geodetic latitude φ and height H.
///
/// Meeus, "Astronomical Algorithms" (2nd ed), Chapter 11:
/// `tan u = (b/a) tan φ`
/// `ρ sin φ′ = (b/a) sin u + (H/a) sin φ`
/// `ρ cos φ′ = cos u + (H/a) cos φ`
pub fn geocentric_latitude_deg(latitude_deg: f64, altitude_m: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let h = altitude_m / EARTH_EQUATORIAL_RADIUS_M;
    let rho_sin = EARTH_AXIS_RATIO * u.sin() + h * phi.sin();
    let rho_cos = u.cos() + h * phi.cos();
    f64::atan2(rho_sin, rho_cos).to_degrees()
}
