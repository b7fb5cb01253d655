use ordered_float::OrderedFloat;

use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per push and one per pop.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki]: sort the points by their angle around the
/// bottom-most point, then maintain a stack from which every vertex that
/// fails to make a strict left turn is popped again.
///
/// Angular ties are broken by ascending distance (nearer first), so interior
/// colinear points are discarded naturally during the stack-pop phase.
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
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(mut pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }
  let pivot_idx = bottom_most(&pts)?;
  let pivot = pts.swap_remove(pivot_idx);
  pts.sort_unstable_by(|a, b| pivot.ccw_cmp_around(a, b));

  trace.record(
    Step::new()
      .point(PointRole::Current, pivot)
      .points(PointRole::Checking, pts.iter().copied()),
  );

  let mut stack: Vec<Point> = Vec::with_capacity(pts.len() + 1);
  stack.push(pivot);
  for pt in pts {
    while stack.len() >= 2 {
      let p2 = stack[stack.len() - 1];
      let p1 = stack[stack.len() - 2];
      if p1.orientation(&p2, &pt) == Orientation::CounterClockWise {
        break;
      }
      stack.pop();
      trace.record(
        Step::new()
          .point(PointRole::Current, pt)
          .point(PointRole::Removed, p2)
          .points(PointRole::ConfirmedHull, stack.iter().copied())
          .segment(SegmentRole::Removed, Segment::new(p1, p2)),
      );
    }
    let top = stack[stack.len() - 1];
    stack.push(pt);
    trace.record(
      Step::new()
        .point(PointRole::Current, pt)
        .points(PointRole::ConfirmedHull, stack.iter().copied())
        .segment(SegmentRole::Checking, Segment::new(top, pt)),
    );
  }
  Ok(Hull::new_unchecked(stack))
}

// Bottom-most point, ties broken towards the left. Guaranteed extreme.
// O(n)
fn bottom_most(pts: &[Point]) -> Result<usize, Error> {
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (OrderedFloat(pt.y_coord()), OrderedFloat(pt.x_coord())))
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientInput)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::collection::vec;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_square_with_interior() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([2.0, 2.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.equals(&Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])));
    assert!(!trace.is_empty());
  }

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([3.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([1.0, 1.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.len(), 3);
  }

  #[test]
  fn convex_hull_all_colinear() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(
      hull.vertices(),
      &[Point::new([0.0, 0.0]), Point::new([4.0, 0.0])]
    );
  }

  #[test]
  fn convex_hull_boundary_colinear_runs() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([0.0, 2.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert_ok!(hull.validate());
    assert_eq!(hull.len(), 4);
  }

  #[test]
  fn convex_hull_insufficient() {
    let points = vec![Point::new([0.0, 0.0]), Point::new([1.0, 1.0])];
    let mut trace = Trace::new();
    assert_eq!(
      convex_hull(points, &mut trace).err(),
      Some(Error::InsufficientInput)
    );
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any_grid_point(), 3..80))] pts: Vec<Point>) {
    let mut trace = Trace::new();
    let distinct = distinct_points(pts.clone());
    if distinct.len() < 3 {
      return Ok(());
    }
    let hull = convex_hull(distinct, &mut trace).unwrap();
    // Prop #1: Results are valid.
    prop_assert_eq!(hull.validate().err(), None);
    // Prop #2: No points from the input set are outside the hull.
    for pt in pts.iter() {
      prop_assert_ne!(hull.locate(pt), PointLocation::Outside);
    }
    // Prop #3: All vertices are in the input set.
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt));
    }
  }
}
