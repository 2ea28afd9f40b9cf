//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU 1980).

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn obliquity_deg(t: f64) -> f64 {
    let arcsec = 46.815_0 * t + 0.000_59 * t * t - 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG - arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn obliquity_at_j2000() {
        assert_abs_diff_eq!(obliquity_deg(0.0), 23.439_291, epsilon = 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, T = -0.127296372348: ε₀ = 23°26′27.407″
        let eps = obliquity_deg(-0.127_296_372_348);
        assert_abs_diff_eq!(eps, 23.0 + 26.0 / 60.0 + 27.407 / 3600.0, epsilon = 1e-6);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(obliquity_deg(1.0) < obliquity_deg(0.0));
    }
}
