//! Aspect detection between chart points.
//!
//! A pair is in aspect when its shortest separation lies within the orb of
//! a table entry. When several entries match, the tightest |orb| wins and
//! ties fall to table order. Motion is an explicit input: the applying flag
//! comes from each point's daily speed, never from longitude alone.

use horo_math::{HALF_TURN_DEG, Longitude, signed_separation_deg};

use crate::aspect_types::{AspectMatch, AspectPoint, AspectRecord, OrbTable};

/// Match a shortest separation in [0, 180] against `table`.
///
/// The orb boundary is inclusive.
pub fn match_separation(separation_deg: f64, table: &OrbTable) -> Option<AspectMatch> {
    let mut best: Option<AspectMatch> = None;
    for def in table.definitions() {
        let orb = separation_deg - def.angle_deg;
        if orb.abs() > def.orb_deg {
            continue;
        }
        if best.is_none_or(|b| orb.abs() < b.orb_deg.abs()) {
            best = Some(AspectMatch {
                kind: def.kind,
                separation_deg,
                orb_deg: orb,
            });
        }
    }
    best
}

/// Aspect between two fixed longitudes.
pub fn find_aspect_between(a: Longitude, b: Longitude, table: &OrbTable) -> Option<AspectMatch> {
    match_separation(a.distance_to(b), table)
}

/// Aspect between two moving points, or `None` when no entry matches.
///
/// Symmetric: swapping `a` and `b` gives the same kind, the same orb and
/// the same applying flag.
pub fn find_aspect(a: &AspectPoint, b: &AspectPoint, table: &OrbTable) -> Option<AspectRecord> {
    let m = find_aspect_between(a.longitude, b.longitude, table)?;
    let rate = separation_rate(a, b);
    Some(AspectRecord {
        a: a.point,
        b: b.point,
        kind: m.kind,
        separation_deg: m.separation_deg,
        orb_deg: m.orb_deg,
        applying: m.orb_deg * rate < 0.0,
    })
}

/// Rate of change of the shortest separation, in degrees per day.
///
/// With `d` the signed arc from `a` to `b`, `s = |d|` changes at
/// `sign(d)·(v_b − v_a)`. At exactly 0 or 180 any relative motion moves
/// the pair off the extreme: apart from conjunction, towards each other
/// from opposition.
pub fn separation_rate(a: &AspectPoint, b: &AspectPoint) -> f64 {
    let d = signed_separation_deg(a.longitude.deg(), b.longitude.deg());
    let relative = b.speed_deg_per_day - a.speed_deg_per_day;
    if d == 0.0 {
        relative.abs()
    } else if d == HALF_TURN_DEG {
        -relative.abs()
    } else {
        d.signum() * relative
    }
}

/// Aspects among every unordered pair of `points`, in index order.
pub fn aspect_grid(points: &[AspectPoint], table: &OrbTable) -> Vec<AspectRecord> {
    let mut records = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            if let Some(r) = find_aspect(a, b, table) {
                records.push(r);
            }
        }
    }
    records
}

/// Aspects between every point of chart `a` and every point of chart `b`.
pub fn synastry_aspects(
    a: &[AspectPoint],
    b: &[AspectPoint],
    table: &OrbTable,
) -> Vec<AspectRecord> {
    a.iter()
        .flat_map(|pa| b.iter().filter_map(move |pb| find_aspect(pa, pb, table)))
        .collect()
}
