use crate::{Point, ValidationError, hull, math, mesh::EMPTY};

/// Absolute tolerance for the area and perimeter comparisons in [Triangulation::validate].
pub const VALIDATION_TOLERANCE: f64 = 1e-9;

/// Result of the Delaunay triangulation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangulation {
    pub(crate) points: Vec<Point>,
    pub(crate) hull: Vec<usize>,
    pub(crate) triangles: Vec<usize>,
    pub(crate) halfedges: Vec<usize>,
}

impl Triangulation {
    pub(crate) fn new(points: Vec<Point>, hull: Vec<usize>, triangles: Vec<usize>, halfedges: Vec<usize>) -> Self {
        Self {
            points,
            hull,
            triangles,
            halfedges,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// The input points, widened to `f64`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point indices where each consecutive triple is one triangle.
    ///
    /// Every triangle has a non-negative [signed_area](math::signed_area).
    /// Points skipped as near-duplicates never appear here.
    pub fn triangles(&self) -> &[usize] {
        &self.triangles
    }

    /// `halfedges[e]` is the twin of halfedge `e` in the adjacent triangle, or [EMPTY](crate::EMPTY) on the hull.
    ///
    /// Halfedge `e` starts at point `triangles[e]`.
    pub fn halfedges(&self) -> &[usize] {
        &self.halfedges
    }

    /// Point indices of the convex hull, counter-clockwise in a y-up frame.
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    /// The convex hull as points, in the same order as [Triangulation::hull].
    pub fn convex_hull(&self) -> Vec<Point> {
        self.hull.iter().map(|&i| self.points[i]).collect()
    }

    /// The number of triangles in the triangulation.
    pub fn len(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Point indices of triangle `k`.
    pub fn triangle(&self, k: usize) -> [usize; 3] {
        let t = &self.triangles[3 * k..3 * k + 3];
        [t[0], t[1], t[2]]
    }

    pub fn iter(&self) -> impl Iterator<Item=[usize; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Total area covered by the triangles.
    pub fn area(&self) -> f64 {
        let points = &self.points;
        self.iter()
            .map(|[a, b, c]| math::signed_area(points[a], points[b], points[c]))
            .sum::<f64>() / 2.0
    }

    /// Take apart into `(points, hull, triangles, halfedges)`.
    pub fn into_parts(self) -> (Vec<Point>, Vec<usize>, Vec<usize>, Vec<usize>) {
        (self.points, self.hull, self.triangles, self.halfedges)
    }

    /// Check the triangulation for internal consistency.
    ///
    /// Every halfedge must be the twin of its twin. The tracked hull, the hull computed from
    /// scratch with [convex_hull](crate::convex_hull), and the triangles must all cover the same area,
    /// and both hulls must have the same perimeter, within [VALIDATION_TOLERANCE].
    /// This is a diagnostic; construction never calls it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (edge, &opposite) in self.halfedges.iter().enumerate() {
            if opposite == EMPTY {
                continue;
            }
            let back = self.halfedges.get(opposite).copied().unwrap_or(EMPTY);
            if back != edge {
                return Err(ValidationError::AsymmetricHalfedge { edge, opposite, back });
            }
        }

        let hull = self.convex_hull();
        let batch_hull = hull::monotone_chain(&self.points);

        let hull_area = math::polygon_area(&hull);
        let batch_hull_area = math::polygon_area(&batch_hull);
        let triangles_area = self.area();
        if (hull_area - batch_hull_area).abs() > VALIDATION_TOLERANCE || (hull_area - triangles_area).abs() > VALIDATION_TOLERANCE {
            return Err(ValidationError::AreaMismatch {
                hull: hull_area,
                batch_hull: batch_hull_area,
                triangles: triangles_area,
            });
        }

        let hull_perimeter = math::polygon_perimeter(&hull);
        let batch_hull_perimeter = math::polygon_perimeter(&batch_hull);
        if (hull_perimeter - batch_hull_perimeter).abs() > VALIDATION_TOLERANCE {
            return Err(ValidationError::PerimeterMismatch {
                hull: hull_perimeter,
                batch_hull: batch_hull_perimeter,
            });
        }

        Ok(())
    }
}
