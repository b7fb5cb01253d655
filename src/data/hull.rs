use claims::debug_assert_ok;
use std::ops::Index;

use crate::data::{Point, PointLocation};
use crate::{Error, Orientation};

/// Convex hull of a point set: a simple polygon traversed counter-clockwise.
///
/// Invariants: every input point lies on or inside the closed polygon, every
/// vertex is one of the input points, and no three consecutive vertices are
/// colinear. The one sanctioned degenerate form is the two-vertex hull
/// produced for an all-colinear input, holding just the extreme pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
  vertices: Vec<Point>,
}

impl Hull {
  /// $O(1)$ Assume that the vertex sequence is a valid hull.
  ///
  /// # Safety
  /// The vertices must be distinct and strictly convex in counter-clockwise
  /// order, except for the two-vertex degenerate form.
  pub fn new_unchecked(vertices: Vec<Point>) -> Hull {
    let hull = Hull { vertices };
    debug_assert_ok!(hull.validate());
    hull
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// True for the two-vertex hull of an all-colinear input.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() < 3
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// $O(n)$ Check the convexity invariant: every triple of consecutive
  /// vertices turns strictly counter-clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.vertices.len();
    if n < 2 {
      return Err(Error::InsufficientInput);
    }
    if n == 2 {
      if self.vertices[0] == self.vertices[1] {
        return Err(Error::InsufficientInput);
      }
      return Ok(());
    }
    for i in 0..n {
      let p1 = &self.vertices[i];
      let p2 = &self.vertices[(i + 1) % n];
      let p3 = &self.vertices[(i + 2) % n];
      if p1.orientation(p2, p3) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(\log n)$ Locate a point relative to the hull boundary.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let n = self.vertices.len();
    if n < 3 {
      return self.locate_degenerate(pt);
    }
    // Binary search over the triangle fan rooted in vertex 0.
    let p0 = &self.vertices[0];
    let mut lower = 1;
    let mut upper = n - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation(&self.vertices[middle], pt) == Orientation::CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    let v_lower = &self.vertices[lower];
    let v_upper = &self.vertices[upper];
    let o_lower = p0.orientation(v_lower, pt);
    let o_outer = v_lower.orientation(v_upper, pt);
    let o_upper = v_upper.orientation(p0, pt);
    if o_lower.is_cw() || o_outer.is_cw() || o_upper.is_cw() {
      return PointLocation::Outside;
    }
    // Of the wedge's three sides, only the outer one is always a hull
    // edge. The fan sides are hull edges just for the first and last
    // wedge; anywhere else they are diagonals through the interior.
    if o_outer.is_colinear()
      || (o_lower.is_colinear() && lower == 1)
      || (o_upper.is_colinear() && upper == n - 1)
    {
      return PointLocation::OnBoundary;
    }
    PointLocation::Inside
  }

  fn locate_degenerate(&self, pt: &Point) -> PointLocation {
    match self.vertices.as_slice() {
      [a] => {
        if a == pt {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      [a, b] => {
        if a.orientation(b, pt).is_colinear() && between(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => PointLocation::Outside,
    }
  }

  /// $O(n)$ Equality as cyclic sequences: same vertices in the same
  /// counter-clockwise order, allowing different starting vertices.
  pub fn equals(&self, other: &Hull) -> bool {
    let n = self.vertices.len();
    if n != other.vertices.len() {
      return false;
    }
    if n == 0 {
      return true;
    }
    match other.vertices.iter().position(|pt| pt == &self.vertices[0]) {
      None => false,
      Some(offset) => (0..n).all(|i| self.vertices[i] == other.vertices[(offset + i) % n]),
    }
  }
}

impl Index<usize> for Hull {
  type Output = Point;
  fn index(&self, key: usize) -> &Point {
    self.vertices.index(key)
  }
}

impl<'a> IntoIterator for &'a Hull {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

// Whether `pt` lies within the bounding box of the segment a--b. Only
// meaningful when `pt` is already known to be colinear with a and b.
fn between(a: &Point, b: &Point, pt: &Point) -> bool {
  let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
  lo <= pt && pt <= hi
}
