use ordered_float::OrderedFloat;

use crate::{Point, math::{self, EPSILON}};

/// Andrew's monotone chain over already-converted points.
///
/// The result starts at the lexicographically smallest point and runs counter-clockwise
/// (y-up): the lower chain, then the upper chain, without repeating the first point.
/// Points closer than [EPSILON] to their sorted predecessor are dropped first.
/// Sets with fewer than 3 distinct points, or with all points collinear, come back as the
/// sorted, deduplicated points.
pub(crate) fn monotone_chain(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable_by_key(|p| (OrderedFloat(p.x), OrderedFloat(p.y)));

    let mut distinct: Vec<Point> = Vec::with_capacity(sorted.len());
    for (i, p) in sorted.iter().enumerate() {
        if i > 0 && math::squared_distance(*p, sorted[i - 1]) < EPSILON {
            continue;
        }
        distinct.push(*p);
    }

    if distinct.len() < 3 {
        return distinct;
    }

    let mut upper: Vec<Point> = Vec::new();
    let mut lower: Vec<Point> = Vec::new();
    for p in distinct.iter().copied() {
        while upper.len() > 1 && math::cross(upper[upper.len() - 2], upper[upper.len() - 1], p) > 0.0 {
            upper.pop();
        }
        while lower.len() > 1 && math::cross(lower[lower.len() - 2], lower[lower.len() - 1], p) < 0.0 {
            lower.pop();
        }
        upper.push(p);
        lower.push(p);
    }

    // Only a collinear set keeps every point on both chains
    if upper.len() == distinct.len() && lower.len() == distinct.len() {
        return distinct;
    }

    upper.reverse();
    upper.pop();
    lower.pop();
    lower.extend(upper);
    lower
}
