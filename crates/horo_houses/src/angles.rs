//! Ascendant, Midheaven, and the shared ecliptic projections.
//!
//! All functions take and return radians. θ is the RAMC (local sidereal
//! time as an angle), φ the latitude, ε the obliquity.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 14;
//! standard spherical astronomy (Montenbruck & Pfleger).

use horo_math::normalize_rad;

/// Ecliptic longitude of the Ascendant.
///
/// `Asc = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))`
pub fn ascendant_rad(ramc: f64, lat: f64, eps: f64) -> f64 {
    let y = ramc.cos();
    let x = -(ramc.sin() * eps.cos() + lat.tan() * eps.sin());
    normalize_rad(f64::atan2(y, x))
}

/// Ecliptic longitude of the Midheaven.
///
/// `MC = atan2(sin θ, cos θ cos ε)`
pub fn midheaven_rad(ramc: f64, eps: f64) -> f64 {
    normalize_rad(f64::atan2(ramc.sin(), ramc.cos() * eps.cos()))
}

/// Ecliptic longitude where the great circle through the north and south
/// horizon points with pole height `pole`, crossing the equator at `ra`,
/// meets the ecliptic.
///
/// `λ = atan2(sin R, cos R cos ε − tan P sin ε)`
///
/// With `ra = θ + 90°` and `pole = φ` this is the Ascendant.
pub fn cusp_from_ra_pole(ra: f64, pole: f64, eps: f64) -> f64 {
    let y = ra.sin();
    let x = ra.cos() * eps.cos() - pole.tan() * eps.sin();
    normalize_rad(f64::atan2(y, x))
}

/// Ecliptic longitude of the ecliptic point with right ascension `ra`.
///
/// `tan λ = tan α / cos ε`
pub fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    normalize_rad(f64::atan2(ra.sin(), ra.cos() * eps.cos()))
}

/// Ecliptic longitude of the equator point with right ascension `ra`
/// (zero declination), rotated onto the ecliptic.
pub fn ecliptic_longitude_of_equator_point(ra: f64, eps: f64) -> f64 {
    normalize_rad(f64::atan2(ra.sin() * eps.cos(), ra.cos()))
}

/// Declination of the ecliptic point at longitude `lon` (zero latitude).
pub fn ecliptic_declination(lon: f64, eps: f64) -> f64 {
    (eps.sin() * lon.sin()).asin()
}
