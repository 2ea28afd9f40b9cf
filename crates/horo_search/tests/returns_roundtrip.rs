//! Return solver checks against the built-in series.

use horo_ephem::{Body, EphemerisSource, MeanEphemeris, mean_longitude};
use horo_houses::GeoCoordinate;
use horo_search::{ReturnConfig, SearchError, search_returns, solve_return};
use horo_time::{Instant, SECONDS_PER_DAY};
use proptest::prelude::*;

fn at(y: i32, m: u32, d: u32, h: u32) -> Instant {
    Instant::from_calendar(y, m, d, h, 0, 0.0).unwrap()
}

fn greenwich() -> GeoCoordinate {
    GeoCoordinate::new(51.4769, 0.0).unwrap()
}

#[test]
fn sun_return_within_a_minute() {
    let known = at(2025, 6, 15, 12);
    let target = mean_longitude(Body::Sun, known.centuries());
    let ev = solve_return(
        &MeanEphemeris,
        Body::Sun,
        target,
        at(2025, 3, 1, 0),
        at(2026, 2, 1, 0),
        &greenwich(),
        &ReturnConfig::default(),
    )
    .unwrap();
    let off_s = (ev.instant.jd() - known.jd()).abs() * SECONDS_PER_DAY;
    assert!(off_s < 60.0, "off by {off_s} s");
    assert!(ev.iterations <= 5);
    assert_eq!(ev.target, target);
}

#[test]
fn moon_return_within_a_minute() {
    let known = at(2025, 6, 15, 12);
    let target = mean_longitude(Body::Moon, known.centuries());
    let ev = solve_return(
        &MeanEphemeris,
        Body::Moon,
        target,
        known.add_days(-10.0).unwrap(),
        known.add_days(15.0).unwrap(),
        &greenwich(),
        &ReturnConfig::default(),
    )
    .unwrap();
    let off_s = (ev.instant.jd() - known.jd()).abs() * SECONDS_PER_DAY;
    assert!(off_s < 60.0, "off by {off_s} s");
}

#[test]
fn tighter_tolerance_is_honoured() {
    let known = at(2030, 1, 10, 6);
    let target = mean_longitude(Body::Mars, known.centuries());
    let config = ReturnConfig {
        tolerance_seconds: 1.0,
        ..ReturnConfig::default()
    };
    let ev = solve_return(
        &MeanEphemeris,
        Body::Mars,
        target,
        known.add_days(-30.0).unwrap(),
        known.add_days(30.0).unwrap(),
        &greenwich(),
        &config,
    )
    .unwrap();
    let speed = MeanEphemeris
        .speed_deg_per_day(Body::Mars, ev.instant.centuries())
        .unwrap();
    assert!(ev.residual_deg.abs() < speed.abs() / SECONDS_PER_DAY * 1.01);
}

#[test]
fn three_solar_returns_in_three_years() {
    let events = search_returns(
        &MeanEphemeris,
        Body::Sun,
        horo_math::Longitude::new(100.0),
        at(2024, 1, 1, 0),
        at(2027, 1, 1, 0),
        &greenwich(),
        &ReturnConfig::default(),
    )
    .unwrap();
    assert_eq!(events.len(), 3);
    for (ev, year) in events.iter().zip(2024..) {
        let cal = ev.instant.to_calendar();
        assert_eq!((cal.year, cal.month), (year, 7));
    }
}

#[test]
fn lunar_returns_are_a_sidereal_month_apart() {
    let events = search_returns(
        &MeanEphemeris,
        Body::Moon,
        horo_math::Longitude::new(45.0),
        at(2025, 1, 1, 0),
        at(2026, 1, 1, 0),
        &greenwich(),
        &ReturnConfig::default(),
    )
    .unwrap();
    assert!((13..=14).contains(&events.len()), "{} returns", events.len());
    for pair in events.windows(2) {
        let gap = pair[1].instant.days_since(pair[0].instant);
        assert!((26.5..28.5).contains(&gap), "gap {gap}");
    }
}

#[test]
fn search_rejects_reversed_window() {
    let err = search_returns(
        &MeanEphemeris,
        Body::Sun,
        horo_math::Longitude::ZERO,
        at(2025, 1, 1, 0),
        at(2024, 1, 1, 0),
        &greenwich(),
        &ReturnConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidWindow { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sun_round_trip(days in 0.0f64..3650.0) {
        let base = at(2020, 1, 1, 0);
        let known = base.add_days(days).unwrap();
        let target = mean_longitude(Body::Sun, known.centuries());
        let ev = solve_return(
            &MeanEphemeris,
            Body::Sun,
            target,
            known.add_days(-100.0).unwrap(),
            known.add_days(100.0).unwrap(),
            &greenwich(),
            &ReturnConfig::default(),
        )
        .unwrap();
        let off_s = (ev.instant.jd() - known.jd()).abs() * SECONDS_PER_DAY;
        prop_assert!(off_s < 60.0);
    }
}
