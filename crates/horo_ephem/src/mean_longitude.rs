//! Closed-form longitude series for the ten bodies.
//!
//! These are low-order approximations, accurate to a fraction of a degree
//! for the Sun and Moon and only to the mean-element level for the planets:
//!
//! - Sun: geometric mean longitude + equation of the centre
//!   (Meeus, "Astronomical Algorithms" 2nd ed, Chapter 25).
//! - Moon: mean longitude + the six largest periodic terms of Table 47.A.
//! - Mercury..Neptune: mean longitude referred to the mean equinox of date,
//!   Table 31.A (heliocentric mean elements).
//! - Pluto: linear mean longitude from the JPL approximate elements
//!   (Standish, valid 1800–2050).
//!
//! `t` is Julian centuries since J2000.0 throughout.

use horo_math::Longitude;

use crate::body::Body;
use crate::error::EphemError;

/// Mean longitude polynomial coefficients `[a0, a1, a2, a3]` (degrees,
/// per century^n) for the planets.
#[rustfmt::skip]
const PLANET_MEAN_LONGITUDE: [(Body, [f64; 4]); 8] = [
    (Body::Mercury, [252.250_906, 149_474.072_249_1, 0.000_303_50,  0.000_000_018]),
    (Body::Venus,   [181.979_801,  58_519.213_030_2, 0.000_310_14,  0.000_000_015]),
    (Body::Mars,    [355.433_000,  19_141.696_447_1, 0.000_310_52,  0.000_000_016]),
    (Body::Jupiter, [ 34.351_519,   3_036.302_774_8, 0.000_223_30,  0.000_000_037]),
    (Body::Saturn,  [ 50.077_444,   1_223.511_068_6, 0.000_519_08, -0.000_000_030]),
    (Body::Uranus,  [314.055_005,     429.864_056_1, 0.000_303_90,  0.000_000_026]),
    (Body::Neptune, [304.348_665,     219.883_309_2, 0.000_308_82,  0.000_000_018]),
    (Body::Pluto,   [238.929_038_33,  145.207_805_15, 0.0,          0.0]),
];

const SUN_L0: [f64; 3] = [280.466_46, 36_000.769_83, 0.000_303_2];
const SUN_M: [f64; 3] = [357.529_11, 35_999.050_29, -0.000_153_7];

const MOON_L: [f64; 5] = [218.316_447_7, 481_267.881_234_21, -0.001_578_6, 1.0 / 538_841.0, -1.0 / 65_194_000.0];
const MOON_D: [f64; 5] = [297.850_192_1, 445_267.111_403_4, -0.001_881_9, 1.0 / 545_868.0, -1.0 / 113_065_000.0];
const MOON_M: [f64; 5] = [357.529_109_2, 35_999.050_290_9, -0.000_153_6, 1.0 / 24_490_000.0, 0.0];
const MOON_MP: [f64; 5] = [134.963_396_4, 477_198.867_505_5, 0.008_741_4, 1.0 / 69_699.0, -1.0 / 14_712_000.0];
const MOON_F: [f64; 5] = [93.272_095_0, 483_202.017_523_3, -0.003_653_9, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0];

/// Evaluate `c[0] + c[1]·t + c[2]·t² + …` by Horner's rule.
fn poly(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Sun: geometric mean longitude plus the equation of the centre.
fn sun_longitude_deg(t: f64) -> f64 {
    let l0 = poly(&SUN_L0, t);
    let m = poly(&SUN_M, t);
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_289 * sin_deg(3.0 * m);
    l0 + c
}

/// Moon: mean longitude plus the six dominant periodic terms.
fn moon_longitude_deg(t: f64) -> f64 {
    let l = poly(&MOON_L, t);
    let d = poly(&MOON_D, t);
    let m = poly(&MOON_M, t);
    let mp = poly(&MOON_MP, t);
    let f = poly(&MOON_F, t);

    let periodic = 6.288_774 * sin_deg(mp)
        + 1.274_027 * sin_deg(2.0 * d - mp)
        + 0.658_314 * sin_deg(2.0 * d)
        + 0.213_618 * sin_deg(2.0 * mp)
        - 0.185_116 * sin_deg(m)
        - 0.114_332 * sin_deg(2.0 * f);
    l + periodic
}

fn planet_coefficients(body: Body) -> Option<&'static [f64; 4]> {
    PLANET_MEAN_LONGITUDE
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, c)| c)
}

/// Linear coefficient of the body's series, in degrees per Julian century.
pub(crate) fn linear_rate_deg_per_century(body: Body) -> f64 {
    match body {
        Body::Sun => SUN_L0[1],
        Body::Moon => MOON_L[1],
        _ => planet_coefficients(body).map_or(0.0, |c| c[1]),
    }
}

/// Approximate ecliptic longitude of `body` at `t` Julian centuries since
/// J2000.0.
///
/// Named for the mean-element series it is built from; the Sun and Moon
/// include their leading periodic corrections.
pub fn mean_longitude(body: Body, t: f64) -> Longitude {
    let deg = match body {
        Body::Sun => sun_longitude_deg(t),
        Body::Moon => moon_longitude_deg(t),
        _ => planet_coefficients(body).map_or(f64::NAN, |c| poly(c, t)),
    };
    Longitude::new(deg)
}

/// [`mean_longitude`] keyed by body name.
///
/// Fails with [`EphemError::UnsupportedBody`] for unrecognized names.
pub fn mean_longitude_by_name(name: &str, t: f64) -> Result<Longitude, EphemError> {
    let body: Body = name.parse()?;
    Ok(mean_longitude(body, t))
}
