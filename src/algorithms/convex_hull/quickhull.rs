use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per partition and one per discovered apex.
/// $O(n \log n)$ expected, $O(n^2)$ worst case. Convex hull of a set of
/// points by divide and conquer over half-planes.
///
/// [Quickhull][wiki]: split the points by the line through the two
/// lexicographic extrema, then recursively pick the point farthest from the
/// current base line as a hull vertex and discard everything inside the
/// triangle it spans.
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
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull(pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }
  // Lexicographic extrema are hull vertices for any consistent tie-break.
  let first = *pts.iter().min().ok_or(Error::InsufficientInput)?;
  let last = *pts.iter().max().ok_or(Error::InsufficientInput)?;

  // Open half-planes on either side of the base line. The hull runs
  // counter-clockwise, so the clockwise (lower) side comes first.
  let lower: Vec<Point> = side_of(&pts, &first, &last);
  let upper: Vec<Point> = side_of(&pts, &last, &first);
  trace.record(
    Step::new()
      .points(PointRole::ConfirmedHull, [first, last].iter().copied())
      .points(PointRole::GroupA, lower.iter().copied())
      .points(PointRole::GroupB, upper.iter().copied())
      .segment(SegmentRole::Helper, Segment::new(first, last)),
  );

  let mut hull: Vec<Point> = Vec::new();
  hull.push(first);
  find_hull(lower, &first, &last, &mut hull, trace);
  hull.push(last);
  find_hull(upper, &last, &first, &mut hull, trace);
  Ok(Hull::new_unchecked(hull))
}

// Points strictly clockwise of p -> q.
fn side_of(pts: &[Point], p: &Point, q: &Point) -> Vec<Point> {
  pts
    .iter()
    .filter(|pt| p.orientation(q, pt) == Orientation::ClockWise)
    .copied()
    .collect()
}

// Emit the hull vertices of `subset` lying strictly between `p` and `q`, in
// counter-clockwise order. `subset` holds exactly the points strictly
// clockwise of p -> q.
fn find_hull(subset: Vec<Point>, p: &Point, q: &Point, hull: &mut Vec<Point>, trace: &mut Trace) {
  if subset.is_empty() {
    return;
  }
  // Farthest point from the base line; the doubled triangle area stands in
  // for the perpendicular distance since the base is fixed. The first
  // maximum wins on ties.
  let mut apex = subset[0];
  let mut apex_deviation = apex.line_deviation(p, q);
  for pt in subset.iter().skip(1) {
    let deviation = pt.line_deviation(p, q);
    if deviation > apex_deviation {
      apex = *pt;
      apex_deviation = deviation;
    }
  }

  let before: Vec<Point> = side_of(&subset, p, &apex);
  let after: Vec<Point> = side_of(&subset, &apex, q);
  trace.record(
    Step::new()
      .point(PointRole::Helper, apex)
      .points(PointRole::GroupA, before.iter().copied())
      .points(PointRole::GroupB, after.iter().copied())
      .points(
        PointRole::Removed,
        subset
          .iter()
          .filter(|pt| {
            **pt != apex && !before.contains(pt) && !after.contains(pt)
          })
          .copied(),
      )
      .segment(SegmentRole::Helper, Segment::new(*p, apex))
      .segment(SegmentRole::Helper, Segment::new(apex, *q)),
  );

  find_hull(before, p, &apex, hull, trace);
  hull.push(apex);
  trace.record(
    Step::new()
      .point(PointRole::ConfirmedHull, apex)
      .segment(SegmentRole::Hull, Segment::new(*p, apex))
      .segment(SegmentRole::Hull, Segment::new(apex, *q)),
  );
  find_hull(after, &apex, q, hull, trace);
}
