use rambler_core::Coord;

/// Manhattan (L1) distance between two coordinates, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

/// Straight-line (L2) distance, rounded to the nearest integer.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy).round() as i32
}
