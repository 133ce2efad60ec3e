use crate::{EMPTY, Point, Triangulation, math, prev_halfedge};

/// Triangles and halfedges are parallel arrays of whole triangles, and every twin link is mutual.
pub fn assert_closed(t: &Triangulation) {
    assert_eq!(t.triangles().len(), t.halfedges().len());
    assert_eq!(t.triangles().len() % 3, 0);
    for (e, &opposite) in t.halfedges().iter().enumerate() {
        if opposite != EMPTY {
            assert_eq!(t.halfedges()[opposite], e, "halfedge {} is not the twin of its twin {}", e, opposite);
        }
    }
}

/// No triangle has the far corner of a neighbor strictly inside its circumcircle.
pub fn assert_delaunay(t: &Triangulation) {
    let points = t.points();
    let triangles = t.triangles();
    for (e, &opposite) in t.halfedges().iter().enumerate() {
        if opposite == EMPTY {
            continue;
        }
        let t0 = e - e % 3;
        let far = triangles[prev_halfedge(opposite)];
        assert!(
            !math::in_circle(points[triangles[t0]], points[triangles[t0 + 1]], points[triangles[t0 + 2]], points[far]),
            "point {} is inside the circumcircle of triangle {}", far, t0 / 3,
        );
    }
}

/// Are `a` and `b` the same cyclic sequence, possibly starting at different points?
pub fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len()).any(|shift| a.iter().enumerate().all(|(i, p)| *p == b[(i + shift) % b.len()]))
}
