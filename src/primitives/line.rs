//! Exact helpers for infinite lines through integer points.
//!
//! All intermediate products are computed in `i128` so coordinate spans up
//! to 2^32 cannot overflow. Intersections that land outside the `i32` range
//! are reported as absent rather than wrapped.

use super::Point;

/// Magnitude limit for intersection coordinates. Results beyond this are
/// treated as practically parallel.
const MAX_INTERSECTION_COORD: i128 = i32::MAX as i128;

/// Computes the 2D cross product of two offset vectors.
///
/// Positive means `v` is counter-clockwise from `u`. The product is widened
/// to `i128`, so any `i64` operands are safe.
#[inline]
pub fn cross(u: Point, v: Point) -> i128 {
    u.x as i128 * v.y as i128 - u.y as i128 * v.x as i128
}

/// Divides `n` by `d`, rounding to the nearest integer with halves away
/// from zero.
///
/// `d` must be non-zero. Works for any sign combination.
#[inline]
pub fn round_div(n: i128, d: i128) -> i128 {
    let half = d / 2;
    if (n < 0) == (d < 0) {
        (n + half) / d
    } else {
        (n - half) / d
    }
}

/// Returns the distance from `p` to the infinite line through `a` and `b`.
///
/// When `a == b` the line is degenerate and the distance to `a` is returned
/// instead. The numerator is the shoelace form of twice the triangle area,
/// computed exactly in `i128`.
pub fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
    if a == b {
        return p.distance(a);
    }
    let twice_area = (p.x as i128 - b.x as i128) * (p.y as i128 - a.y as i128)
        + (a.x as i128 - p.x as i128) * (p.y as i128 - b.y as i128);
    twice_area.unsigned_abs() as f64 / a.distance(b)
}

/// Computes the intersection of the infinite lines `ab` and `cd`.
///
/// Returns `None` for parallel lines, and for intersections whose
/// coordinates exceed the `i32` range in magnitude. The far-intersection
/// cutoff keeps nearly-parallel inputs from producing coordinates that
/// overflow downstream arithmetic.
pub fn line_intersection(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let ab = b - a;
    let cd = d - c;
    let det = cross(ab, cd);
    if det == 0 {
        return None;
    }
    let t = cross(cd, a - c);
    let x = a.x as i128 + round_div(t * ab.x as i128, det);
    let y = a.y as i128 + round_div(t * ab.y as i128, det);
    if x.unsigned_abs() > MAX_INTERSECTION_COORD as u128
        || y.unsigned_abs() > MAX_INTERSECTION_COORD as u128
    {
        return None;
    }
    Some(Point::new(x as i64, y as i64))
}
