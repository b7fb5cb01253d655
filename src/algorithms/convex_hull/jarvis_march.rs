use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::trace::{Arc, ArcRole, PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per candidate comparison.
/// $O(n h)$ Convex hull of a set of points, output-sensitive in the hull
/// size `h`.
///
/// [Jarvis march][wiki] (gift wrapping): starting from the leftmost point,
/// repeatedly select the candidate making the sharpest left turn from the
/// current hull point. Colinear ties are broken by taking the *farther*
/// point. This is the opposite convention from Graham scan, and the one
/// that makes the march skip interior colinear points.
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
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientInput);
  }
  // Leftmost point, ties broken downwards. Guaranteed on the hull.
  let start = pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp(b))
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientInput)?;

  let mut hull: Vec<Point> = Vec::new();
  let mut p = start;
  loop {
    hull.push(pts[p]);
    let mut q = (p + 1) % n;
    for i in 0..n {
      if i == p || i == q {
        continue;
      }
      trace.record(
        Step::new()
          .point(PointRole::Current, pts[p])
          .point(PointRole::Checking, pts[i])
          .point(PointRole::Helper, pts[q])
          .points(PointRole::ConfirmedHull, hull.iter().copied())
          .segment(SegmentRole::Checking, Segment::new(pts[p], pts[i]))
          .arc(ArcRole::Checking, Arc::new(pts[p], pts[q], pts[i])),
      );
      let orientation = pts[p].orientation(&pts[i], &pts[q]);
      if orientation == Orientation::CounterClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }
    trace.record(
      Step::new()
        .points(PointRole::ConfirmedHull, hull.iter().copied())
        .segment(SegmentRole::Hull, Segment::new(pts[p], pts[q])),
    );
    p = q;
    if p == start {
      break;
    }
    if hull.len() > n {
      return Err(Error::UnreachableState(
        "gift wrapping failed to return to its starting point",
      ));
    }
  }
  Ok(Hull::new_unchecked(hull))
}
