//! Return solver: the instant a body comes back to a target longitude.
//!
//! Algorithm:
//! 1. First guess from the window start, advanced by the directed arc to the
//!    target over the body's mean daily motion
//! 2. Newton–Raphson on the signed longitude residual, with the rate taken as
//!    a central difference of the source longitude
//! 3. Accept once the residual is smaller than the arc covered in
//!    `tolerance_seconds`, and only if the instant lies in the window

use horo_ephem::{Body, EphemerisSource};
use horo_houses::GeoCoordinate;
use horo_math::{Longitude, directed_separation_deg, signed_separation_deg};
use horo_time::{Instant, SECONDS_PER_DAY, julian_centuries};
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::return_types::{ReturnConfig, ReturnEvent};

/// Longitude residual and rate at one Julian Day.
struct Sample {
    residual_deg: f64,
    speed_deg_per_day: f64,
}

fn sample<S: EphemerisSource + ?Sized>(
    source: &S,
    body: Body,
    target: Longitude,
    jd: f64,
    step_days: f64,
) -> Result<Sample, SearchError> {
    let lon = source.longitude(body, julian_centuries(jd))?;
    let before = source.longitude(body, julian_centuries(jd - step_days))?;
    let after = source.longitude(body, julian_centuries(jd + step_days))?;
    Ok(Sample {
        residual_deg: signed_separation_deg(target.deg(), lon.deg()),
        speed_deg_per_day: signed_separation_deg(before.deg(), after.deg()) / (2.0 * step_days),
    })
}

/// Find the instant in `[window_start, window_end]` at which `body` reaches
/// `target`.
///
/// The event carries `geo` so the return chart can be cast for it.
pub fn solve_return<S: EphemerisSource + ?Sized>(
    source: &S,
    body: Body,
    target: Longitude,
    window_start: Instant,
    window_end: Instant,
    geo: &GeoCoordinate,
    config: &ReturnConfig,
) -> Result<ReturnEvent, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_window(window_start, window_end)?;
    debug!(
        body = %body,
        target_deg = target.deg(),
        start_jd = window_start.jd(),
        end_jd = window_end.jd(),
        "solving return"
    );
    let result = newton(source, body, target, window_start, window_end, geo, config);
    match &result {
        Ok(event) => debug!(
            body = %body,
            jd = event.instant.jd(),
            iterations = event.iterations,
            residual_deg = event.residual_deg,
            "return solved"
        ),
        Err(SearchError::ConvergenceFailure {
            iterations,
            residual_deg,
            ..
        }) => warn!(
            body = %body,
            iterations,
            residual_deg,
            "return did not converge"
        ),
        Err(_) => {}
    }
    result
}

/// Every return of `body` to `target` inside `[window_start, window_end]`,
/// in time order.
///
/// The window is cut into sub-windows one mean period long and each is solved
/// on its own. Sub-windows without a return are skipped. A return sitting on
/// a sub-window boundary is reported once.
pub fn search_returns<S: EphemerisSource + ?Sized>(
    source: &S,
    body: Body,
    target: Longitude,
    window_start: Instant,
    window_end: Instant,
    geo: &GeoCoordinate,
    config: &ReturnConfig,
) -> Result<Vec<ReturnEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    check_window(window_start, window_end)?;

    let period = body.mean_period_days();
    let mut events: Vec<ReturnEvent> = Vec::new();
    let mut sub_start = window_start;
    while sub_start < window_end {
        let sub_end = match sub_start.add_days(period)? {
            e if e < window_end => e,
            _ => window_end,
        };
        match newton(source, body, target, sub_start, sub_end, geo, config) {
            Ok(event) => {
                let repeat = events
                    .last()
                    .is_some_and(|prev| event.instant.days_since(prev.instant) < 0.5 * period);
                if !repeat {
                    events.push(event);
                }
            }
            Err(SearchError::ConvergenceFailure { .. }) => {
                debug!(
                    body = %body,
                    start_jd = sub_start.jd(),
                    end_jd = sub_end.jd(),
                    "no return in sub-window"
                );
            }
            Err(e) => return Err(e),
        }
        sub_start = sub_end;
    }
    debug!(body = %body, count = events.len(), "return search finished");
    Ok(events)
}

fn check_window(start: Instant, end: Instant) -> Result<(), SearchError> {
    if end.jd() <= start.jd() {
        return Err(SearchError::InvalidWindow {
            start_jd: start.jd(),
            end_jd: end.jd(),
        });
    }
    Ok(())
}

fn newton<S: EphemerisSource + ?Sized>(
    source: &S,
    body: Body,
    target: Longitude,
    window_start: Instant,
    window_end: Instant,
    geo: &GeoCoordinate,
    config: &ReturnConfig,
) -> Result<ReturnEvent, SearchError> {
    let start_lon = source.longitude(body, window_start.centuries())?;
    let ahead = directed_separation_deg(start_lon.deg(), target.deg());
    let mut jd = window_start.jd() + ahead / body.mean_daily_motion_deg();
    let mut state = sample(source, body, target, jd, config.derivative_step_days)?;

    let failure = |iterations: u32, residual_deg: f64| SearchError::ConvergenceFailure {
        body,
        iterations,
        residual_deg,
    };

    for iteration in 1..=config.max_iterations {
        let speed = state.speed_deg_per_day;
        if !speed.is_finite() || speed == 0.0 {
            return Err(failure(iteration, state.residual_deg));
        }
        jd -= state.residual_deg / speed;
        if !jd.is_finite() {
            return Err(failure(iteration, state.residual_deg));
        }
        state = sample(source, body, target, jd, config.derivative_step_days)?;
        trace!(
            iteration,
            jd,
            residual_deg = state.residual_deg,
            speed_deg_per_day = state.speed_deg_per_day,
            "newton step"
        );

        let tolerance_deg = speed.abs() * config.tolerance_seconds / SECONDS_PER_DAY;
        if state.residual_deg.abs() < tolerance_deg {
            if jd < window_start.jd() || jd > window_end.jd() {
                return Err(failure(iteration, state.residual_deg));
            }
            return Ok(ReturnEvent {
                body,
                target,
                window_start,
                window_end,
                instant: Instant::from_jd(jd)?,
                iterations: iteration,
                residual_deg: state.residual_deg,
                geo: *geo,
            });
        }
    }
    Err(failure(config.max_iterations, state.residual_deg))
}
