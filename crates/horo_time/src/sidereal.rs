//! Greenwich and Local Mean Sidereal Time.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.
//! Valid for any instant; the input Julian Day is taken as UT.

use horo_math::normalize_deg;

use crate::instant::Instant;
use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn greenwich_sidereal_time_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(theta)
}

/// Local Mean Sidereal Time in degrees, [0, 360).
///
/// `east_longitude_deg` is positive east of Greenwich.
pub fn local_sidereal_time_deg(jd: f64, east_longitude_deg: f64) -> f64 {
    normalize_deg(greenwich_sidereal_time_deg(jd) + east_longitude_deg)
}

/// Local Mean Sidereal Time for an [`Instant`].
pub fn local_sidereal_time_at(instant: Instant, east_longitude_deg: f64) -> f64 {
    local_sidereal_time_deg(instant.jd(), east_longitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: 13h10m46.3668s = 197.693195°
        let gmst = greenwich_sidereal_time_deg(2_446_895.5);
        assert_abs_diff_eq!(gmst, 197.693_195, epsilon = 1e-5);
    }

    #[test]
    fn gmst_meeus_example_12b() {
        // 1987 April 10, 19h21m00s UT: 128.7378734°
        let gmst = greenwich_sidereal_time_deg(2_446_896.306_25);
        assert_abs_diff_eq!(gmst, 128.737_873_4, epsilon = 1e-5);
    }

    #[test]
    fn gmst_j2000_noon() {
        assert_abs_diff_eq!(greenwich_sidereal_time_deg(J2000_JD), 280.460_618_37, epsilon = 1e-9);
    }

    #[test]
    fn gmst_advances_about_one_degree_per_day() {
        let g1 = greenwich_sidereal_time_deg(2_460_000.5);
        let g2 = greenwich_sidereal_time_deg(2_460_001.5);
        let diff = normalize_deg(g2 - g1);
        assert_abs_diff_eq!(diff, 0.985_647, epsilon = 1e-4);
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let gmst = greenwich_sidereal_time_deg(jd);
        assert_abs_diff_eq!(
            local_sidereal_time_deg(jd, 77.209),
            normalize_deg(gmst + 77.209),
            epsilon = 1e-12
        );
        let west = local_sidereal_time_deg(jd, -122.4);
        assert!((0.0..360.0).contains(&west));
    }

    #[test]
    fn lst_for_instant_matches_jd_form() {
        let i = Instant::from_calendar(1987, 4, 10, 19, 21, 0.0).unwrap();
        assert_abs_diff_eq!(
            local_sidereal_time_at(i, -77.065_611),
            normalize_deg(128.737_873_4 - 77.065_611),
            epsilon = 1e-4
        );
    }
}
