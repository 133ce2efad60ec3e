mod point_set;
pub use point_set::PointSet;
mod vertex;
pub use vertex::{Point, Vertex};
pub(crate) use vertex::to_points;
