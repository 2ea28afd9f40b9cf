//! Convenience entry points for chart geometry.
//!
//! Accepts calendar fields directly and wires the built-in ephemeris, the
//! house solver, aspect detection and the return solver together, so callers
//! do not have to thread Julian Days, sidereal time and obliquity by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use horo_rs::*;
//!
//! let birth = CalendarTime::new(1990, 4, 12, 8, 30, 0.0)?;
//! let geo = GeoCoordinate::new(48.8566, 2.3522)?;
//! let chart = natal_chart(&birth, &geo, &ChartConfig::default())?;
//! for rec in &chart.aspects {
//!     println!("{} {} {} ({:+.2}°)", rec.a, rec.kind, rec.b, rec.orb_deg);
//! }
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    Chart, chart_points, composite_positions, houses_at, lunar_return, natal_chart, positions_at,
    solar_return,
};
pub use error::HoroError;

pub use horo_aspects::{
    AspectKind, AspectPoint, AspectRecord, ChartPoint, OrbTable, aspect_grid, find_aspect,
    synastry_aspects,
};
pub use horo_config::ChartConfig;
pub use horo_ephem::{Body, BodyPosition, EphemerisSource, MeanEphemeris};
pub use horo_houses::{GeoCoordinate, HouseCuspSet, HouseCusps, HouseOptions, HouseSystem};
pub use horo_math::{Longitude, circular_midpoint};
pub use horo_search::{ReturnConfig, ReturnEvent};
pub use horo_time::{CalendarTime, Instant};
