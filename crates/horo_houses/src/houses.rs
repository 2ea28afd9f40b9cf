//! House cusp computation for 8 house division methods.
//!
//! Implements Placidus, Koch, Equal, Porphyry, Regiomontanus, Campanus,
//! Morinus and Topocentric. Every system shares the Ascendant and
//! Midheaven from [`crate::angles`]; they differ in how the remaining cusps
//! are interpolated.
//!
//! Sources: standard spherical astronomy (Meeus, Montenbruck & Pfleger),
//! Koch's birthplace method as tabulated by the Swiss Ephemeris house
//! documentation.

use std::f64::consts::{FRAC_PI_2, PI};

use horo_ephem::obliquity_deg;
use horo_math::{Longitude, directed_separation_deg, normalize_deg};
use horo_time::{Instant, local_sidereal_time_at};
use tracing::{debug, warn};

use crate::angles::{
    ascendant_rad, cusp_from_ra_pole, ecliptic_declination, ecliptic_longitude_of_equator_point,
    ecliptic_longitude_of_ra, midheaven_rad,
};
use crate::error::HouseError;
use crate::geo::{GeoCoordinate, geocentric_latitude_deg};
use crate::house_types::{HouseCuspSet, HouseCusps, HouseOptions, HouseSystem};

/// Iteration cap for the Placidus semi-arc fixed point.
const PLACIDUS_MAX_ITERATIONS: usize = 100;

/// Convergence threshold on right ascension for Placidus, in radians.
const PLACIDUS_TOLERANCE_RAD: f64 = 1e-12;

/// Adjacent cusps closer than this are degenerate.
pub const MIN_CUSP_SEPARATION_DEG: f64 = 1e-9;

/// Allowed deviation of the summed house widths from 360°.
pub const CLOSURE_TOLERANCE_DEG: f64 = 1e-6;

const DEG_30: f64 = PI / 6.0;

/// Solve the 12 cusps of `system`.
///
/// `lst_deg` is the local sidereal time as an angle (the RAMC),
/// `latitude_deg` the geodetic latitude and `obliquity_deg` the obliquity
/// of the ecliptic, all in degrees.
///
/// Latitudes outside the system's domain, and solutions whose cusps are
/// not finite or not in cyclic order, fail with
/// [`HouseError::LatitudeDomain`]. Nothing is clamped.
pub fn solve(
    system: HouseSystem,
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
    options: &HouseOptions,
) -> Result<HouseCusps, HouseError> {
    check_inputs(lst_deg, latitude_deg, obliquity_deg)?;
    options.validate().map_err(HouseError::InvalidOptions)?;
    debug!(
        system = %system,
        lst_deg,
        latitude_deg,
        obliquity_deg,
        "solving house cusps"
    );

    let max_abs_deg = options.limits.max_abs_latitude_deg(system, obliquity_deg);
    let outside = if system == HouseSystem::Equal {
        latitude_deg.abs() >= max_abs_deg
    } else {
        latitude_deg.abs() > max_abs_deg
    };
    if outside {
        warn!(
            system = %system,
            latitude_deg,
            max_abs_deg,
            "latitude outside house system domain"
        );
        return Err(HouseError::LatitudeDomain {
            system,
            latitude_deg,
            max_abs_deg,
        });
    }

    let effective_lat_deg = if system == HouseSystem::Topocentric {
        geocentric_latitude_deg(latitude_deg, options.altitude_m)
    } else {
        latitude_deg
    };

    let ramc_deg = normalize_deg(lst_deg);
    let ramc = ramc_deg.to_radians();
    let lat = effective_lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = ascendant_rad(ramc, lat, eps);
    let mc = midheaven_rad(ramc, eps);

    let to_deg = |c: [f64; 12]| c.map(|r| normalize_deg(r.to_degrees()));
    // Equal cusps never leave degrees, so they match `equal_cusps` bit for bit.
    let cusps_deg = match system {
        HouseSystem::Equal => Some(equal_cusps(Longitude::from_rad(asc)).map(Longitude::deg)),
        HouseSystem::Porphyry => Some(to_deg(porphyry_cusps(asc, mc))),
        HouseSystem::Placidus | HouseSystem::Topocentric => {
            placidus_cusps(asc, mc, ramc, lat, eps).map(to_deg)
        }
        HouseSystem::Koch => Some(to_deg(koch_cusps(asc, mc, ramc, lat, eps))),
        HouseSystem::Regiomontanus => Some(to_deg(regiomontanus_cusps(asc, mc, ramc, lat, eps))),
        HouseSystem::Campanus => Some(to_deg(campanus_cusps(asc, mc, ramc, lat, eps))),
        HouseSystem::Morinus => Some(to_deg(morinus_cusps(ramc, eps))),
    };
    let valid = cusps_deg.filter(|c| asc.is_finite() && mc.is_finite() && cusps_in_cyclic_order(c));
    let Some(cusps_deg) = valid else {
        warn!(
            system = %system,
            latitude_deg,
            "house cusps degenerate at this latitude"
        );
        return Err(HouseError::LatitudeDomain {
            system,
            latitude_deg,
            max_abs_deg,
        });
    };

    let houses = HouseCusps {
        system,
        cusps: cusps_deg.map(Longitude::new),
        ascendant: Longitude::from_rad(asc),
        midheaven: Longitude::from_rad(mc),
        ramc_deg,
    };
    debug!(
        system = %system,
        ascendant = houses.ascendant.deg(),
        midheaven = houses.midheaven.deg(),
        "house cusps solved"
    );
    Ok(houses)
}

/// Cast houses for an instant and place.
///
/// Takes the local sidereal time from the instant and the geographic
/// longitude, and the mean obliquity of date. The altitude of `geo`
/// replaces `options.altitude_m`.
pub fn houses_for(
    system: HouseSystem,
    instant: Instant,
    geo: &GeoCoordinate,
    options: &HouseOptions,
) -> Result<HouseCuspSet, HouseError> {
    let lst_deg = local_sidereal_time_at(instant, geo.longitude_deg());
    let eps_deg = obliquity_deg(instant.centuries());
    let options = HouseOptions {
        altitude_m: geo.altitude_m(),
        ..*options
    };
    let houses = solve(system, lst_deg, geo.latitude_deg(), eps_deg, &options)?;
    Ok(HouseCuspSet {
        houses,
        instant,
        geo: *geo,
        lst_deg,
        obliquity_deg: eps_deg,
    })
}

/// Equal houses from `start`: cusp k = start + 30°·(k − 1).
pub fn equal_cusps(start: Longitude) -> [Longitude; 12] {
    std::array::from_fn(|i| start.offset(30.0 * i as f64))
}

/// True when the cusps are finite, no two neighbours coincide, and the
/// forward widths add up to one full turn.
pub fn cusps_in_cyclic_order(cusps_deg: &[f64; 12]) -> bool {
    if cusps_deg.iter().any(|c| !c.is_finite()) {
        return false;
    }
    let mut total = 0.0;
    for i in 0..12 {
        let width = directed_separation_deg(cusps_deg[i], cusps_deg[(i + 1) % 12]);
        if width < MIN_CUSP_SEPARATION_DEG {
            return false;
        }
        total += width;
    }
    (total - 360.0).abs() <= CLOSURE_TOLERANCE_DEG
}

fn check_inputs(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> Result<(), HouseError> {
    if !lst_deg.is_finite() {
        return Err(HouseError::InvalidCoordinate {
            field: "lst",
            value: lst_deg,
        });
    }
    if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
        return Err(HouseError::InvalidCoordinate {
            field: "latitude",
            value: latitude_deg,
        });
    }
    if !obliquity_deg.is_finite() || obliquity_deg.abs() >= 90.0 {
        return Err(HouseError::InvalidCoordinate {
            field: "obliquity",
            value: obliquity_deg,
        });
    }
    Ok(())
}

/// Assemble a quadrant system from its angles and the four intermediate
/// cusps east of the meridian. Cusps 5, 6, 8, 9 are the opposites of
/// 11, 12, 2, 3.
fn quadrant_cusps(asc: f64, mc: f64, c2: f64, c3: f64, c11: f64, c12: f64) -> [f64; 12] {
    [
        asc,
        c2,
        c3,
        mc + PI,
        c11 + PI,
        c12 + PI,
        asc + PI,
        c2 + PI,
        c3 + PI,
        mc,
        c11,
        c12,
    ]
}

/// Porphyry: trisect the four quadrant arcs between Asc, IC, Desc and MC.
fn porphyry_cusps(asc: f64, mc: f64) -> [f64; 12] {
    let angles = [asc, mc + PI, asc + PI, mc];
    let mut cusps = [0.0; 12];
    for q in 0..4 {
        let from = angles[q];
        let arc = directed_separation_deg(from.to_degrees(), angles[(q + 1) % 4].to_degrees())
            .to_radians();
        for j in 0..3 {
            cusps[3 * q + j] = from + arc * j as f64 / 3.0;
        }
    }
    cusps
}

/// Placidus: each intermediate cusp sits at a fixed fraction of its own
/// diurnal (houses 11, 12) or nocturnal (houses 2, 3) semi-arc.
///
/// `None` if a semi-arc is undefined or the fixed point does not settle.
fn placidus_cusps(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> Option<[f64; 12]> {
    let c11 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true)?;
    let c12 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true)?;
    let c2 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false)?;
    let c3 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false)?;
    Some(quadrant_cusps(asc, mc, c2, c3, c11, c12))
}

/// One Placidus cusp by fixed-point iteration on right ascension.
///
/// Above the horizon: `RA = RAMC + f·DSA`.
/// Below the horizon: `RA = RAMC + DSA + f·(180° − DSA)`.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, diurnal: bool) -> Option<f64> {
    let offset = |dsa: f64| {
        if diurnal {
            fraction * dsa
        } else {
            dsa + fraction * (PI - dsa)
        }
    };

    let mut ra = ramc + offset(FRAC_PI_2);
    for _ in 0..PLACIDUS_MAX_ITERATIONS {
        let dec = ecliptic_declination(ecliptic_longitude_of_ra(ra, eps), eps);
        let next = ramc + offset(diurnal_semi_arc(dec, lat)?);
        if (next - ra).abs() < PLACIDUS_TOLERANCE_RAD {
            return Some(ecliptic_longitude_of_ra(next, eps));
        }
        ra = next;
    }
    None
}

/// Diurnal semi-arc `acos(−tan φ tan δ)`; `None` for circumpolar points.
fn diurnal_semi_arc(dec: f64, lat: f64) -> Option<f64> {
    let cos_h = -(lat.tan() * dec.tan());
    (-1.0..=1.0).contains(&cos_h).then(|| cos_h.acos())
}

/// Koch: the birthplace Ascendant cast at RAMC offsets built from a third
/// of the MC degree's ascensional difference.
///
/// `sin AD = tan φ tan δ_MC`
fn koch_cusps(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let dec_mc = ecliptic_declination(mc, eps);
    let ad3 = (lat.tan() * dec_mc.tan()).asin() / 3.0;
    quadrant_cusps(
        asc,
        mc,
        cusp_from_ra_pole(ramc + 4.0 * DEG_30 + ad3, lat, eps),
        cusp_from_ra_pole(ramc + 5.0 * DEG_30 + 2.0 * ad3, lat, eps),
        cusp_from_ra_pole(ramc + DEG_30 - 2.0 * ad3, lat, eps),
        cusp_from_ra_pole(ramc + 2.0 * DEG_30 - ad3, lat, eps),
    )
}

/// Regiomontanus: equator divided from the meridian, `R = RAMC + H`,
/// pole height `tan P = tan φ sin H`.
fn regiomontanus_cusps(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let cusp = |steps: f64| {
        let h = steps * DEG_30;
        let pole = (lat.tan() * h.sin()).atan();
        cusp_from_ra_pole(ramc + h, pole, eps)
    };
    quadrant_cusps(asc, mc, cusp(4.0), cusp(5.0), cusp(1.0), cusp(2.0))
}

/// Campanus: prime vertical divided from the zenith by A, carried to the
/// equator at `R = RAMC + atan2(sin A cos φ, cos A)` with pole height
/// `sin P = sin φ sin A`.
fn campanus_cusps(asc: f64, mc: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let cusp = |steps: f64| {
        let a = steps * DEG_30;
        let ra = ramc + f64::atan2(a.sin() * lat.cos(), a.cos());
        let pole = (lat.sin() * a.sin()).asin();
        cusp_from_ra_pole(ra, pole, eps)
    };
    quadrant_cusps(asc, mc, cusp(4.0), cusp(5.0), cusp(1.0), cusp(2.0))
}

/// Morinus: equator points at RAMC + 90° + 30°·k rotated onto the ecliptic.
fn morinus_cusps(ramc: f64, eps: f64) -> [f64; 12] {
    std::array::from_fn(|k| {
        ecliptic_longitude_of_equator_point(ramc + FRAC_PI_2 + DEG_30 * k as f64, eps)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS_DEG: f64 = 23.439_291;

    fn solve_default(system: HouseSystem, lst: f64, lat: f64) -> Result<HouseCusps, HouseError> {
        solve(system, lst, lat, EPS_DEG, &HouseOptions::default())
    }

    #[test]
    fn equal_cusps_from_zero_exact() {
        let cusps = equal_cusps(Longitude::ZERO);
        for (i, c) in cusps.iter().enumerate() {
            assert_eq!(c.deg(), 30.0 * i as f64);
        }
    }

    #[test]
    fn equal_cusps_wrap_around() {
        let cusps = equal_cusps(Longitude::new(350.0));
        assert_abs_diff_eq!(cusps[0].deg(), 350.0, epsilon = 1e-10);
        assert_abs_diff_eq!(cusps[1].deg(), 20.0, epsilon = 1e-10);
        assert_abs_diff_eq!(cusps[11].deg(), 320.0, epsilon = 1e-10);
    }

    #[test]
    fn quadrant_systems_anchor_asc_and_mc() {
        for &sys in HouseSystem::all() {
            if !sys.is_quadrant() || sys == HouseSystem::Topocentric {
                continue;
            }
            let h = solve_default(sys, 75.0, 35.0).unwrap();
            assert_eq!(h.cusps[0], h.ascendant, "{sys} cusp 1");
            assert_eq!(h.cusps[9], h.midheaven, "{sys} cusp 10");
            assert_abs_diff_eq!(h.cusps[6].deg(), h.ascendant.opposite().deg(), epsilon = 1e-9);
            assert_abs_diff_eq!(h.cusps[3].deg(), h.midheaven.opposite().deg(), epsilon = 1e-9);
        }
    }

    #[test]
    fn porphyry_trisects_quadrants() {
        let cusps = porphyry_cusps(FRAC_PI_2, 0.0).map(|r| normalize_deg(r.to_degrees()));
        let expected = [90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 0.0, 30.0, 60.0];
        for (c, e) in cusps.iter().zip(expected) {
            assert_abs_diff_eq!(*c, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn equator_without_obliquity_is_equal_houses() {
        // φ = 0 and ε = 0 collapse every system onto RAMC + 30°·k.
        for &sys in HouseSystem::all() {
            let h = solve(sys, 40.0, 0.0, 0.0, &HouseOptions::default()).unwrap();
            for i in 0..12 {
                let expected = normalize_deg(40.0 + 90.0 + 30.0 * i as f64);
                assert_abs_diff_eq!(h.cusps[i].deg(), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn quadrant_systems_agree_on_equator() {
        // With φ = 0 every semi-arc is 90° and every pole height is zero.
        let p = solve_default(HouseSystem::Placidus, 222.0, 0.0).unwrap();
        for sys in [HouseSystem::Koch, HouseSystem::Regiomontanus, HouseSystem::Campanus] {
            let h = solve_default(sys, 222.0, 0.0).unwrap();
            for i in 0..12 {
                assert_abs_diff_eq!(h.cusps[i].deg(), p.cusps[i].deg(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn placidus_semi_arc_fixed_point() {
        // Cusp 12 at λ = 180°: δ = 0, DSA = 90°, RA = 120° + 60° = 180°.
        let h = solve(HouseSystem::Placidus, 120.0, 40.0, 23.4, &HouseOptions::default()).unwrap();
        assert_abs_diff_eq!(h.cusps[11].deg(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(h.cusps[5].deg(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn semi_arc_equator_equinox() {
        assert_abs_diff_eq!(diurnal_semi_arc(0.0, 0.0).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn semi_arc_circumpolar_is_none() {
        let lat = 80.0_f64.to_radians();
        let dec = 20.0_f64.to_radians();
        assert!(diurnal_semi_arc(dec, lat).is_none());
    }

    #[test]
    fn koch_differs_from_placidus_off_equator() {
        let p = solve_default(HouseSystem::Placidus, 200.0, 48.0).unwrap();
        let k = solve_default(HouseSystem::Koch, 200.0, 48.0).unwrap();
        assert!(p.cusps[1].distance_to(k.cusps[1]) > 0.1);
        assert_eq!(p.ascendant, k.ascendant);
    }

    #[test]
    fn morinus_independent_of_latitude() {
        let a = solve_default(HouseSystem::Morinus, 300.0, 10.0).unwrap();
        let b = solve_default(HouseSystem::Morinus, 300.0, 55.0).unwrap();
        assert_eq!(a.cusps, b.cusps);
    }

    #[test]
    fn topocentric_uses_geocentric_latitude() {
        let topo = solve_default(HouseSystem::Topocentric, 120.0, 40.0).unwrap();
        let phi_geo = geocentric_latitude_deg(40.0, 0.0);
        let plac = solve_default(HouseSystem::Placidus, 120.0, phi_geo).unwrap();
        for i in 0..12 {
            assert_abs_diff_eq!(topo.cusps[i].deg(), plac.cusps[i].deg(), epsilon = 1e-9);
        }
    }

    #[test]
    fn time_based_reject_above_limit() {
        for sys in [HouseSystem::Placidus, HouseSystem::Koch, HouseSystem::Morinus, HouseSystem::Topocentric] {
            assert_eq!(
                solve_default(sys, 10.0, -61.0),
                Err(HouseError::LatitudeDomain {
                    system: sys,
                    latitude_deg: -61.0,
                    max_abs_deg: 60.0
                })
            );
        }
    }

    #[test]
    fn custom_limit_widens_domain() {
        let mut options = HouseOptions::default();
        options.limits.time_based_max_deg = 65.0;
        assert!(solve(HouseSystem::Placidus, 10.0, 62.0, EPS_DEG, &options).is_ok());
    }

    #[test]
    fn polar_bounded_reject_inside_polar_circle() {
        for sys in [HouseSystem::Porphyry, HouseSystem::Regiomontanus, HouseSystem::Campanus] {
            assert!(solve_default(sys, 10.0, 65.0).is_ok(), "{sys} at 65");
            assert!(
                matches!(solve_default(sys, 10.0, 67.0), Err(HouseError::LatitudeDomain { .. })),
                "{sys} at 67"
            );
        }
    }

    #[test]
    fn equal_accepts_high_latitude_but_not_pole() {
        assert!(solve_default(HouseSystem::Equal, 10.0, 89.0).is_ok());
        assert_eq!(
            solve_default(HouseSystem::Equal, 10.0, 90.0),
            Err(HouseError::LatitudeDomain {
                system: HouseSystem::Equal,
                latitude_deg: 90.0,
                max_abs_deg: 90.0
            })
        );
    }

    #[test]
    fn invalid_inputs_rejected() {
        assert!(matches!(
            solve_default(HouseSystem::Equal, f64::NAN, 10.0),
            Err(HouseError::InvalidCoordinate { field: "lst", .. })
        ));
        assert!(matches!(
            solve_default(HouseSystem::Equal, 10.0, 91.0),
            Err(HouseError::InvalidCoordinate { field: "latitude", .. })
        ));
        assert!(matches!(
            solve(HouseSystem::Equal, 10.0, 10.0, f64::INFINITY, &HouseOptions::default()),
            Err(HouseError::InvalidCoordinate { field: "obliquity", .. })
        ));
    }

    #[test]
    fn invalid_options_rejected() {
        let mut options = HouseOptions::default();
        options.limits.time_based_max_deg = -1.0;
        assert!(matches!(
            solve(HouseSystem::Placidus, 10.0, 10.0, EPS_DEG, &options),
            Err(HouseError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cyclic_order_detects_reversal_and_collapse() {
        let good: [f64; 12] = std::array::from_fn(|i| 30.0 * i as f64);
        assert!(cusps_in_cyclic_order(&good));
        let mut swapped = good;
        swapped.swap(3, 4);
        assert!(!cusps_in_cyclic_order(&swapped));
        let mut collapsed = good;
        collapsed[5] = collapsed[4];
        assert!(!cusps_in_cyclic_order(&collapsed));
        let mut nan = good;
        nan[7] = f64::NAN;
        assert!(!cusps_in_cyclic_order(&nan));
    }

    #[test]
    fn negative_lst_normalized() {
        let a = solve_default(HouseSystem::Regiomontanus, -30.0, 20.0).unwrap();
        let b = solve_default(HouseSystem::Regiomontanus, 330.0, 20.0).unwrap();
        assert_abs_diff_eq!(a.ramc_deg, 330.0, epsilon = 1e-12);
        for i in 0..12 {
            assert_abs_diff_eq!(a.cusps[i].deg(), b.cusps[i].deg(), epsilon = 1e-9);
        }
    }
}
