use crate::{Point, Triangulation, TriangulationError, Vertex};

/// A set of points which can be triangulated.
///
/// Implemented for every slice (and, through deref, every `Vec`) of [Vertex] values.
/// Point `k` of the set is referenced as index `k` by the resulting
/// [Triangulation::triangles] and [Triangulation::hull].
pub trait PointSet {
    /// Compute the Delaunay triangulation of the points.
    ///
    /// Fails with [TriangulationError::DegenerateInput] if fewer than 3 distinct, non-collinear points are present.
    /// An empty set produces an empty triangulation.
    fn triangulate(&self) -> Result<Triangulation, TriangulationError>;

    /// Compute the convex hull of the points with Andrew's monotone chain.
    fn convex_hull(&self) -> Vec<Point>;
}

impl<V: Vertex> PointSet for [V] {
    fn triangulate(&self) -> Result<Triangulation, TriangulationError> {
        crate::triangulate(self)
    }

    fn convex_hull(&self) -> Vec<Point> {
        crate::convex_hull(self)
    }
}
