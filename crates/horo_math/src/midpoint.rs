//! Circular midpoints for composite charts.
//!
//! The midpoint of two longitudes is taken on the short arc between them.
//! When the raw difference exceeds a half turn the pair straddles the
//! 0°/360° seam, so the smaller value is lifted by a full turn first.

use crate::angle::{FULL_TURN_DEG, HALF_TURN_DEG, Longitude, normalize_deg};

/// Midpoint of two longitudes in degrees, [0, 360).
///
/// Commutative, and `circular_midpoint_deg(a, a) == normalize_deg(a)`.
/// Points exactly opposite each other resolve to the arithmetic mean of the
/// normalized inputs, which is the same for either argument order.
pub fn circular_midpoint_deg(a: f64, b: f64) -> f64 {
    let a = normalize_deg(a);
    let b = normalize_deg(b);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    if hi - lo <= HALF_TURN_DEG {
        normalize_deg((lo + hi) / 2.0)
    } else {
        normalize_deg((lo + FULL_TURN_DEG + hi) / 2.0)
    }
}

/// [`circular_midpoint_deg`] over [`Longitude`] values.
pub fn circular_midpoint(a: Longitude, b: Longitude) -> Longitude {
    Longitude::new(circular_midpoint_deg(a.deg(), b.deg()))
}
