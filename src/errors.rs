use std::{error, fmt, io};

use backtrace::Backtrace;

/// Describes an error which occurred during triangulation
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// Fewer than 3 distinct points were provided, or all points are collinear,
    /// so no seed triangle with a finite circumcircle exists.
    DegenerateInput {
        /// The number of points provided
        points: usize,
    },
    /// A construction invariant was violated. This indicates a bug.
    InternalError(InternalError),
}

impl TriangulationError {
    #[cold]
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { points } => write!(f, "No triangulation exists for this input ({} points)", points),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// An inconsistency found by [Triangulation::validate](crate::Triangulation::validate).
///
/// Each variant carries the values which disagree.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// `halfedges[edge] == opposite`, but `halfedges[opposite] == back` instead of `edge`
    AsymmetricHalfedge {
        edge: usize,
        opposite: usize,
        back: usize,
    },
    /// The hull areas and the total triangle area differ by more than the tolerance
    AreaMismatch {
        hull: f64,
        batch_hull: f64,
        triangles: f64,
    },
    /// The hull perimeters differ by more than the tolerance
    PerimeterMismatch {
        hull: f64,
        batch_hull: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AsymmetricHalfedge { edge, opposite, back } =>
                write!(f, "Invalid halfedge connection: {} -> {} -> {}", edge, opposite, back),
            Self::AreaMismatch { hull, batch_hull, triangles } =>
                write!(f, "Hull areas disagree: {}, {}, {}", hull, batch_hull, triangles),
            Self::PerimeterMismatch { hull, batch_hull } =>
                write!(f, "Hull perimeters disagree: {}, {}", hull, batch_hull),
        }
    }
}

impl error::Error for ValidationError { }

/// Describes an error which occurred while reading a point list
#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    Io(io::Error),
    /// The token at `position` (counting from 0) is not a decimal number
    InvalidNumber {
        position: usize,
        token: String,
    },
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => fmt::Display::fmt(error, f),
            Self::InvalidNumber { position, token } => write!(f, "Invalid number '{}' at position {}", token, position),
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}
