use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::Orientation;

/// A point in the plane with finite `f64` coordinates.
///
/// Equality is exact value equality on both coordinates (note that `-0.0`
/// and `0.0` compare as distinct, matching the total order used for
/// sorting). NaN or infinite coordinates are a precondition violation, not
/// a recoverable error.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn as_vec(&self) -> Vector {
    Vector(self.array)
  }

  /// Determine the turn made by walking `self` -> `q` -> `r`.
  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    f64::total_cmp(
      &self.squared_euclidean_distance(p),
      &self.squared_euclidean_distance(q),
    )
  }

  /// Compare `p` and `q` by their counter-clockwise angle around `self`,
  /// starting from the positive x direction, breaking same-ray ties by
  /// ascending distance (nearer first).
  ///
  /// A total angular order over the full turn: points are first split by
  /// which half-turn they fall in relative to the line through `self` along
  /// `(1, 0)`, and only points within the same half-turn are compared with
  /// the orientation predicate. Points on the line sort at angle 0 or at a
  /// half turn depending on their side of `self`.
  pub fn ccw_cmp_around(&self, p: &Point, q: &Point) -> Ordering {
    // Second half-turn: strictly below the reference line, or on it and
    // behind `self`.
    let latter_half = |pt: &Point| {
      let dy = pt.array[1] - self.array[1];
      let dx = pt.array[0] - self.array[0];
      dy < 0.0 || (dy == 0.0 && dx < 0.0)
    };
    match (latter_half(p), latter_half(q)) {
      (false, true) => Ordering::Less,
      (true, false) => Ordering::Greater,
      _ => match self.orientation(p, q) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        // Within one half-turn, colinear points share a ray from `self`.
        Orientation::CoLinear => self.cmp_distance_to(p, q),
      },
    }
  }

  /// Absolute deviation of `self` from the line through `a` and `b`,
  /// measured as the doubled triangle area.
  ///
  /// Proportional to the perpendicular distance for any fixed base line, so
  /// comparisons against the same `a`/`b` never need a square root.
  pub fn line_deviation(&self, a: &Point, b: &Point) -> f64 {
    (b - a).cross(&(self - a)).abs()
  }

  /// Perpendicular distance from `self` to the segment's carrier line.
  pub fn perpendicular_distance(&self, a: &Point, b: &Point) -> f64 {
    let base = a.squared_euclidean_distance(b).sqrt();
    if base == 0.0 {
      return self.squared_euclidean_distance(a).sqrt();
    }
    self.line_deviation(a, b) / base
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Point) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Point {}

impl PartialOrd for Point {
  fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Lexicographic order: x first, then y.
impl Ord for Point {
  fn cmp(&self, other: &Point) -> Ordering {
    let key = |pt: &Point| (OrderedFloat(pt.array[0]), OrderedFloat(pt.array[1]));
    key(self).cmp(&key(other))
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}
