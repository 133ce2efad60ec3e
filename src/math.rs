//! Geometric primitives shared by the sweep, the batch hull and validation.
//!
//! Everything here is a pure function of its arguments.

use crate::Point;

/// Gap between `1.0` and the next representable `f64`.
///
/// Two points closer than this (in squared distance) are treated as the same point.
/// This is a "nearly coincident" policy rather than a geometric tolerance, so it
/// does not scale with the input.
pub const EPSILON: f64 = f64::EPSILON;

#[inline]
pub fn squared_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Twice the signed area of the triangle `a, b, c`.
///
/// Positive when `a, b, c` run counter-clockwise in a y-down (screen) frame, which is
/// clockwise in a y-up frame; zero when collinear. All triangles produced by
/// [triangulate](crate::triangulate) have a non-negative signed area.
///
/// `signed_area(p, start, end) >= 0` means the directed edge `start -> end` is not
/// visible from `p`.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Cross product of `a - p` and `b - p`; positive for a left turn in a y-up frame.
#[inline]
pub(crate) fn cross(p: Point, a: Point, b: Point) -> f64 {
    (a.x - p.x) * (b.y - p.y) - (a.y - p.y) * (b.x - p.x)
}

/// Is `p` strictly inside the circumcircle of `a, b, c`?
///
/// `a, b, c` must have a positive [signed_area]. Points exactly on the circle are not inside.
pub fn in_circle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let dx = a.x - p.x;
    let dy = a.y - p.y;
    let ex = b.x - p.x;
    let ey = b.y - p.y;
    let fx = c.x - p.x;
    let fy = c.y - p.y;

    let ap = dx * dx + dy * dy;
    let bp = ex * ex + ey * ey;
    let cp = fx * fx + fy * fy;

    dx * (ey * cp - bp * fy) - dy * (ex * cp - bp * fx) + ap * (ex * fy - ey * fx) < 0.0
}

// Offset of the circumcenter from `a`, plus the squared edge lengths and determinant
// needed to detect degenerate triangles.
#[inline]
fn circumdelta(a: Point, b: Point, c: Point) -> (f64, f64, f64, f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let ex = c.x - a.x;
    let ey = c.y - a.y;

    let bl = dx * dx + dy * dy;
    let cl = ex * ex + ey * ey;
    let d = dx * ey - dy * ex;

    let x = (ey * bl - dy * cl) * 0.5 / d;
    let y = (dx * cl - ex * bl) * 0.5 / d;
    (x, y, bl, cl, d)
}

/// Squared circumradius of `a, b, c`, or `f64::INFINITY` if the points are collinear or coincident.
pub fn squared_circumradius(a: Point, b: Point, c: Point) -> f64 {
    let (x, y, bl, cl, d) = circumdelta(a, b, c);
    let r = x * x + y * y;

    if bl == 0.0 || cl == 0.0 || d == 0.0 || r == 0.0 || r.is_nan() {
        f64::INFINITY
    } else {
        r
    }
}

/// Circumradius of `a, b, c`, or `f64::INFINITY` if the points are collinear or coincident.
pub fn circumradius(a: Point, b: Point, c: Point) -> f64 {
    squared_circumradius(a, b, c).sqrt()
}

/// Circumcenter of `a, b, c`. The coordinates are not finite if the points are collinear.
pub fn circumcenter(a: Point, b: Point, c: Point) -> Point {
    let (x, y, _, _, _) = circumdelta(a, b, c);
    Point::new(a.x + x, a.y + y)
}

/// A cheap monotonic substitute for `atan2`, mapping a direction to `[0, 1)`.
pub fn pseudo_angle(dx: f64, dy: f64) -> f64 {
    let p = dx / (dx.abs() + dy.abs());
    let a = if dy > 0.0 {
        (3.0 - p) / 4.0
    } else {
        (1.0 + p) / 4.0
    };
    // f64::min discards NaN, so the zero vector lands in the last bucket
    a.min(1.0 - EPSILON).max(0.0)
}

/// Shoelace area of a closed polygon; positive for a counter-clockwise (y-up) ring.
pub fn polygon_area(points: &[Point]) -> f64 {
    let mut result = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        result += (p.x - q.x) * (p.y + q.y);
    }
    result / 2.0
}

/// Total length of a closed polygon's edges.
pub fn polygon_perimeter(points: &[Point]) -> f64 {
    let mut q = match points.last() {
        Some(q) => *q,
        None => return 0.0,
    };
    let mut result = 0.0;
    for p in points {
        result += distance(*p, q);
        q = *p;
    }
    result
}
