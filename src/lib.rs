/*!
Delaunay triangulation of planar point sets, with the convex hull as a byproduct.

Points are swept in order of distance from the circumcenter of a seed triangle. Each new point is
joined to the hull edges it can see, and the new triangles are made Delaunay by recursive edge flips.

```
use hullsweep::PointSet;

let points = vec![[0f64, 0.], [1., 0.], [1., 1.], [0., 1.]];

let triangulation = points.triangulate().expect("Triangulation failed");
assert_eq!(triangulation.len(), 2);
assert!((triangulation.area() - 1.0).abs() < 1e-9);
triangulation.validate().expect("Inconsistent triangulation");
```
*/

mod idx;
mod hull;
mod mesh;
mod front;
mod triangulator;
mod triangulation;
mod inputs;
mod errors;

pub mod math;
pub mod io;

#[cfg(feature = "debugging")]
pub(crate) mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, InternalError, ValidationError, LoadError};
pub use mesh::{EMPTY, next_halfedge, prev_halfedge};
pub use triangulation::{Triangulation, VALIDATION_TOLERANCE};

pub use inputs::*;

pub use num_traits::real::Real;

use triangulator::Triangulator;

/// Compute the Delaunay triangulation of `points`.
///
/// An empty input gives an empty triangulation. Fewer than 3 distinct points, or only collinear
/// points, fail with [TriangulationError::DegenerateInput]. Points closer than [math::EPSILON] to
/// an already inserted point are left out of the mesh.
pub fn triangulate<V: Vertex>(points: &[V]) -> Result<Triangulation, TriangulationError> {
    Triangulator::new(inputs::to_points(points)).build()
}

/// Compute the convex hull of `points`, counter-clockwise in a y-up frame, starting from the
/// lowest `x` (then lowest `y`) point.
///
/// Near-duplicate points are merged. With fewer than 3 distinct points, or only collinear points,
/// the distinct points are returned in sorted order.
pub fn convex_hull<V: Vertex>(points: &[V]) -> Vec<Point> {
    hull::monotone_chain(&inputs::to_points(points))
}
