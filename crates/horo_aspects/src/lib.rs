//! Aspect detection for horoscope charts.
//!
//! This crate provides:
//! - The 11 named aspects and a caller-supplied [`OrbTable`]
//! - Pairwise detection with an explicit applying/separating flag
//! - Aspect grids within one chart and synastry lists across two

pub mod aspect;
pub mod aspect_types;
pub mod error;

pub use aspect::{
    aspect_grid, find_aspect, find_aspect_between, match_separation, separation_rate,
    synastry_aspects,
};
pub use aspect_types::{
    ALL_ASPECT_KINDS, AspectDefinition, AspectKind, AspectMatch, AspectPoint, AspectRecord,
    ChartPoint, OrbTable,
};
pub use error::AspectError;
