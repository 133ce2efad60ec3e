/// Represents the area outside of the triangulation.
/// Halfedges on the convex hull (which don't have an adjacent halfedge)
/// will have this value.
pub const EMPTY: usize = usize::MAX;

/// Next halfedge in a triangle.
#[inline]
pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Previous halfedge in a triangle.
#[inline]
pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

/// Maximum number of triangles in a triangulation of `n` points.
pub(crate) fn max_triangles(n: usize) -> usize {
    if n > 2 {
        2 * n - 5
    } else {
        0
    }
}

/// Triangles and their halfedge adjacency as flat arrays.
///
/// Triangle `k` owns halfedges `3k..3k + 3`. Halfedge `e` starts at point `triangles[e]`
/// and its twin in the adjacent triangle is `halfedges[e]`, or [EMPTY].
/// Only ever appended to; flips rewrite entries in place.
#[derive(Debug)]
pub(crate) struct HalfEdgeMesh {
    pub triangles: Vec<usize>,
    pub halfedges: Vec<usize>,
}

impl HalfEdgeMesh {
    pub fn with_point_count(n: usize) -> Self {
        let capacity = max_triangles(n) * 3;
        Self {
            triangles: Vec::with_capacity(capacity),
            halfedges: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Append triangle `i0, i1, i2`, linking its halfedges to `a`, `b` and `c`. Returns the first new halfedge.
    pub fn add_triangle(&mut self, i0: usize, i1: usize, i2: usize, a: usize, b: usize, c: usize) -> usize {
        let t = self.triangles.len();

        self.triangles.push(i0);
        self.triangles.push(i1);
        self.triangles.push(i2);

        self.halfedges.push(EMPTY);
        self.halfedges.push(EMPTY);
        self.halfedges.push(EMPTY);

        self.link(t, a);
        self.link(t + 1, b);
        self.link(t + 2, c);

        t
    }

    /// Make `a` and `b` twins. `b` may be [EMPTY], which marks `a` as a boundary halfedge.
    #[inline]
    pub fn link(&mut self, a: usize, b: usize) {
        self.halfedges[a] = b;
        if b != EMPTY {
            self.halfedges[b] = a;
        }
    }

    /// Release unused preallocated storage.
    pub fn freeze(mut self) -> (Vec<usize>, Vec<usize>) {
        self.triangles.shrink_to_fit();
        self.halfedges.shrink_to_fit();
        (self.triangles, self.halfedges)
    }
}
