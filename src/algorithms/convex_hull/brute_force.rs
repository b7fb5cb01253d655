use ordered_float::OrderedFloat;

use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per tested point pair.
/// $O(n^3)$ Convex hull of a set of points by exhaustive edge testing.
///
/// For every unordered pair `(p, q)`, partition the remaining points by the
/// line through `p` and `q`. The pair is a hull edge iff one open half-plane
/// is empty and no third point lies colinear outside the segment. The
/// latter restriction keeps colinear boundary runs down to their extreme
/// pair, so brute force agrees with the other algorithms.
///
/// Points must be distinct; the engine facade guarantees this.
///
/// # Errors
/// Will return an error iff the input contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * An all-colinear input yields the degenerate two-point hull.
pub fn convex_hull(pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientInput);
  }
  let mut on_hull = vec![false; n];
  for i in 0..n {
    for j in i + 1..n {
      let (p, q) = (pts[i], pts[j]);
      let mut left: Vec<Point> = Vec::new();
      let mut right: Vec<Point> = Vec::new();
      let mut blocked = false;
      for (k, pt) in pts.iter().enumerate() {
        if k == i || k == j {
          continue;
        }
        match p.orientation(&q, pt) {
          Orientation::CounterClockWise => left.push(*pt),
          Orientation::ClockWise => right.push(*pt),
          // A colinear point between p and q is harmless (it sits in the
          // interior of the candidate edge); beyond either endpoint it
          // proves that p or q is not extreme in this direction.
          Orientation::CoLinear => blocked |= !between(&p, &q, pt),
        }
      }
      let is_edge = !blocked && (left.is_empty() || right.is_empty());
      let mut step = Step::new()
        .segment(SegmentRole::Checking, Segment::new(p, q))
        .points(PointRole::GroupA, left.iter().copied())
        .points(PointRole::GroupB, right.iter().copied());
      if is_edge {
        step = step
          .points(PointRole::ConfirmedHull, [p, q].iter().copied())
          .segment(SegmentRole::Hull, Segment::new(p, q));
        on_hull[i] = true;
        on_hull[j] = true;
      }
      trace.record(step);
    }
  }
  let vertices: Vec<Point> = pts
    .iter()
    .zip(on_hull)
    .filter_map(|(pt, keep)| if keep { Some(*pt) } else { None })
    .collect();
  order_ccw(vertices)
}

// Whether `pt` lies within the bounding box of the segment p--q. Only
// called for points colinear with p and q.
fn between(p: &Point, q: &Point, pt: &Point) -> bool {
  let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
  lo <= pt && pt <= hi
}

// The pair tests identify the hull vertex set but not its order. Sort the
// vertices counter-clockwise around the bottom-most one; no angular ties
// are possible since three colinear hull vertices cannot all pass the edge
// test.
fn order_ccw(mut vertices: Vec<Point>) -> Result<Hull, Error> {
  if vertices.len() < 2 {
    return Err(Error::UnreachableState("brute force found no hull edges"));
  }
  if vertices.len() == 2 {
    vertices.sort_unstable();
    return Ok(Hull::new_unchecked(vertices));
  }
  let pivot_idx = vertices
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (OrderedFloat(pt.y_coord()), OrderedFloat(pt.x_coord())))
    .map(|(index, _)| index)
    .ok_or(Error::UnreachableState("brute force found no hull edges"))?;
  let pivot = vertices.swap_remove(pivot_idx);
  vertices.sort_unstable_by(|a, b| pivot.ccw_cmp_around(a, b));
  vertices.insert(0, pivot);
  Ok(Hull::new_unchecked(vertices))
}
