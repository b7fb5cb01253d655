use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Andrew's_monotone_chain_algorithm

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per push and one per pop, in each chain.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// Andrew's monotone chain: sort the points lexicographically, build the
/// lower hull scanning left to right with the same pop-while-not-left-turn
/// stack discipline as Graham scan, build the upper hull scanning right to
/// left, and concatenate the two chains minus their shared endpoints.
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
pub fn convex_hull(mut pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }
  pts.sort_unstable();

  let mut lower = half_hull(pts.iter().copied(), trace);
  let mut upper = half_hull(pts.iter().rev().copied(), trace);

  // Both chains run from one lexicographic extreme to the other; dropping
  // each chain's last point closes the cycle without repetition.
  lower.pop();
  upper.pop();
  lower.extend(upper);
  Ok(Hull::new_unchecked(lower))
}

// One chain of the hull, scanning the points in the given order.
fn half_hull<I>(pts: I, trace: &mut Trace) -> Vec<Point>
where
  I: IntoIterator<Item = Point>,
{
  let mut chain: Vec<Point> = Vec::new();
  for pt in pts {
    while chain.len() >= 2 {
      let p2 = chain[chain.len() - 1];
      let p1 = chain[chain.len() - 2];
      if p1.orientation(&p2, &pt) == Orientation::CounterClockWise {
        break;
      }
      chain.pop();
      trace.record(
        Step::new()
          .point(PointRole::Current, pt)
          .point(PointRole::Removed, p2)
          .points(PointRole::ConfirmedHull, chain.iter().copied())
          .segment(SegmentRole::Removed, Segment::new(p1, p2)),
      );
    }
    let step = match chain.last() {
      None => Step::new().point(PointRole::Current, pt),
      Some(top) => Step::new()
        .point(PointRole::Current, pt)
        .segment(SegmentRole::Checking, Segment::new(*top, pt)),
    };
    chain.push(pt);
    trace.record(step.points(PointRole::ConfirmedHull, chain.iter().copied()));
  }
  chain
}
