//! High-level chart functions over the built-in ephemeris.

use std::cmp::Ordering;

use horo_aspects::{AspectPoint, AspectRecord, ChartPoint, aspect_grid};
use horo_config::ChartConfig;
use horo_ephem::{ALL_BODIES, Body, BodyPosition, EphemerisSource, MeanEphemeris, body_positions};
use horo_houses::{GeoCoordinate, HouseCuspSet, HouseCusps, HouseOptions, HouseSystem, houses_for};
use horo_math::circular_midpoint;
use horo_search::{ReturnConfig, ReturnEvent, solve_return};
use horo_time::{CalendarTime, Instant};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HoroError;

/// Days either side of the birthday anniversary searched for a solar return.
const SOLAR_RETURN_HALF_WINDOW_DAYS: f64 = 5.0;

/// A cast chart: positions, houses and the aspects among them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub instant: Instant,
    /// All ten bodies in [`ALL_BODIES`] order.
    pub positions: Vec<BodyPosition>,
    pub houses: HouseCuspSet,
    /// Aspects among the bodies, the Ascendant and the Midheaven.
    pub aspects: Vec<AspectRecord>,
}

impl Chart {
    /// House (1-12) occupied by `body`.
    pub fn house_of(&self, body: Body) -> Option<u8> {
        self.positions
            .iter()
            .find(|p| p.body == body)
            .map(|p| self.houses.houses.house_of(p.longitude))
    }
}

/// Positions of all ten bodies at a calendar time.
pub fn positions_at(time: &CalendarTime) -> Result<Vec<BodyPosition>, HoroError> {
    let instant = Instant::from_calendar_time(time)?;
    Ok(body_positions(&MeanEphemeris, instant, &ALL_BODIES)?)
}

/// House cusps at a calendar time and place.
pub fn houses_at(
    system: HouseSystem,
    time: &CalendarTime,
    geo: &GeoCoordinate,
    options: &HouseOptions,
) -> Result<HouseCuspSet, HoroError> {
    let instant = Instant::from_calendar_time(time)?;
    Ok(houses_for(system, instant, geo, options)?)
}

/// Aspect points for `positions` plus the chart's Ascendant and Midheaven.
pub fn chart_points(positions: &[BodyPosition], houses: &HouseCusps) -> Vec<AspectPoint> {
    positions
        .iter()
        .map(|p| AspectPoint::new(p.body, p.longitude, p.speed_deg_per_day))
        .chain([
            AspectPoint::fixed(ChartPoint::Ascendant, houses.ascendant),
            AspectPoint::fixed(ChartPoint::Midheaven, houses.midheaven),
        ])
        .collect()
}

/// Cast a chart with the system, limits and orbs from `config`.
pub fn natal_chart(
    time: &CalendarTime,
    geo: &GeoCoordinate,
    config: &ChartConfig,
) -> Result<Chart, HoroError> {
    config.validate()?;
    let instant = Instant::from_calendar_time(time)?;
    let positions = body_positions(&MeanEphemeris, instant, &ALL_BODIES)?;
    let houses = houses_for(config.house_system, instant, geo, &config.houses)?;
    let aspects = aspect_grid(&chart_points(&positions, &houses.houses), &config.aspects);
    Ok(Chart {
        instant,
        positions,
        houses,
        aspects,
    })
}

/// Composite positions: the circular midpoint of each body present in both
/// charts, in the order of `a`.
///
/// Speeds are averaged and the instant is the midpoint of the two instants.
pub fn composite_positions(
    a: &[BodyPosition],
    b: &[BodyPosition],
) -> Result<Vec<BodyPosition>, HoroError> {
    let mut out = Vec::with_capacity(a.len());
    for pa in a {
        let Some(pb) = b.iter().find(|pb| pb.body == pa.body) else {
            continue;
        };
        out.push(BodyPosition {
            body: pa.body,
            longitude: circular_midpoint(pa.longitude, pb.longitude),
            speed_deg_per_day: 0.5 * (pa.speed_deg_per_day + pb.speed_deg_per_day),
            instant: pa.instant.add_days(0.5 * pb.instant.days_since(pa.instant))?,
        });
    }
    Ok(out)
}

/// The Sun's return to its natal longitude in calendar year `year` (UT).
///
/// Searched within a few days of the birthday anniversary. When the root lands
/// in a neighbouring year the window moves one mean year towards `year`. A
/// birth close to New Year can leave a year without any return, reported as
/// [`HoroError::NoSolarReturn`].
pub fn solar_return(
    natal: Instant,
    year: i32,
    geo: &GeoCoordinate,
    config: &ReturnConfig,
) -> Result<ReturnEvent, HoroError> {
    let target = MeanEphemeris.longitude(Body::Sun, natal.centuries())?;
    let period = Body::Sun.mean_period_days();
    let years = f64::from(year) - f64::from(natal.to_calendar().year);
    let mut anniversary = natal.add_days(years * period)?;
    let mut shifted = false;
    loop {
        let start = anniversary.add_days(-SOLAR_RETURN_HALF_WINDOW_DAYS)?;
        let end = anniversary.add_days(SOLAR_RETURN_HALF_WINDOW_DAYS)?;
        let event = solve_return(&MeanEphemeris, Body::Sun, target, start, end, geo, config)?;
        let found = event.instant.to_calendar().year;
        let step = match found.cmp(&year) {
            Ordering::Equal => return Ok(event),
            Ordering::Less => period,
            Ordering::Greater => -period,
        };
        if shifted {
            return Err(HoroError::NoSolarReturn { year });
        }
        debug!(year, found, "solar return outside the requested year, shifting window");
        anniversary = anniversary.add_days(step)?;
        shifted = true;
    }
}

/// The first return of the Moon to its natal longitude at or after `after`.
pub fn lunar_return(
    natal: Instant,
    after: Instant,
    geo: &GeoCoordinate,
    config: &ReturnConfig,
) -> Result<ReturnEvent, HoroError> {
    let target = MeanEphemeris.longitude(Body::Moon, natal.centuries())?;
    let end = after.add_days(1.1 * Body::Moon.mean_period_days())?;
    Ok(solve_return(
        &MeanEphemeris,
        Body::Moon,
        target,
        after,
        end,
        geo,
        config,
    )?)
}
