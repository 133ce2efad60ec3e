use std::{fmt, ops};

use num_traits::{ToPrimitive, real::Real};

/// A two-dimensional point. 
/// 
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
/// Coordinates are widened to `f64` once before construction begins.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;

    /// This vertex as a [Point]. Coordinates which cannot be represented as `f64` become `NaN`.
    fn to_point(&self) -> Point {
        Point::new(
            self.x().to_f64().unwrap_or(f64::NAN),
            self.y().to_f64().unwrap_or(f64::NAN),
        )
    }
}

/// A 2D coordinate. A point has no identity beyond its index in the input sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) const fn infinity() -> Self {
        Self::new(f64::INFINITY, f64::INFINITY)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ops::Sub for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl Vertex for Point {
    type Coordinate = f64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.x
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.y
    }

    #[inline(always)]
    fn to_point(&self) -> Point {
        *self
    }
}

impl<C: fmt::Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: fmt::Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

pub(crate) fn to_points<V: Vertex>(vertices: &[V]) -> Vec<Point> {
    vertices.iter().map(Vertex::to_point).collect()
}
