pub mod points;
mod check;

pub use check::{assert_closed, assert_delaunay, same_cycle};
