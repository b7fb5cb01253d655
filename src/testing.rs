//! Shared strategies and helpers for the test suites.

pub use proptest::prelude::*;

use crate::data::Point;

/// Points on a small integer grid. The orientation predicate is exact for
/// integer-valued coordinates, and the grid is dense enough that duplicate
/// and colinear configurations show up constantly.
pub fn any_grid_point() -> impl Strategy<Value = Point> {
  (-50i32..=50, -50i32..=50).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Lexicographically sorted distinct points, mirroring the facade's
/// deduplication for tests that call an algorithm module directly.
pub fn distinct_points(mut pts: Vec<Point>) -> Vec<Point> {
  pts.sort_unstable();
  pts.dedup();
  pts
}
