use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Kirkpatrick%E2%80%93Seidel_algorithm

// Sub-results are kept canonical: either a strictly convex CCW ring, or an
// all-colinear chain in ascending lexicographic order. Merging reduces a
// chain to its two endpoints first; the interior chain points can never be
// vertices of a two-dimensional hull.

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per recursive split and one per tangent discovery.
/// $O(n \log h)$ Convex hull of a set of points by divide and conquer.
///
/// Sort the points lexicographically and recursively bisect at the sorted
/// midpoint, so the left half lies strictly to the left of the right half.
/// Two sub-hulls are merged by locating their upper and lower tangents with
/// alternating index walks over each ring (modular arithmetic, indices never
/// cross between rings) and splicing the outer portions together.
///
/// Points must be distinct; the engine facade guarantees this.
///
/// # Errors
/// Will return an error iff the input contains less than three points, or
/// if a tangent walk fails to converge (which indicates a bug rather than a
/// property of the input).
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
  let ring = divide(&pts, trace)?;
  if is_chain(&ring) {
    // Chains stay lex-sorted, so the extremes sit at either end.
    let first = ring[0];
    let last = ring[ring.len() - 1];
    return Ok(Hull::new_unchecked(vec![first, last]));
  }
  Ok(Hull::new_unchecked(ring))
}

fn divide(pts: &[Point], trace: &mut Trace) -> Result<Vec<Point>, Error> {
  if pts.len() <= 3 {
    return Ok(base_case(pts));
  }
  let (left, right) = pts.split_at(pts.len() / 2);
  trace.record(
    Step::new()
      .points(PointRole::GroupA, left.iter().copied())
      .points(PointRole::GroupB, right.iter().copied()),
  );
  let l = divide(left, trace)?;
  let r = divide(right, trace)?;
  merge(l, r, trace)
}

// Up to three points, already lexicographically sorted.
fn base_case(pts: &[Point]) -> Vec<Point> {
  let mut out = pts.to_vec();
  if out.len() == 3 && out[0].orientation(&out[1], &out[2]) == Orientation::ClockWise {
    out.swap(1, 2);
  }
  out
}

fn all_colinear(pts: &[Point]) -> bool {
  match pts {
    [a, b, rest @ ..] => rest
      .iter()
      .all(|pt| a.orientation(b, pt) == Orientation::CoLinear),
    _ => true,
  }
}

fn is_chain(pts: &[Point]) -> bool {
  pts.len() < 3 || all_colinear(pts)
}

// A chain contributes only its endpoints to a two-dimensional merge.
fn to_ring(pts: Vec<Point>) -> Vec<Point> {
  if pts.len() > 2 && all_colinear(&pts) {
    vec![pts[0], pts[pts.len() - 1]]
  } else {
    pts
  }
}

// Merge two canonical sub-results. Every point of `l` precedes every point
// of `r` lexicographically.
fn merge(l: Vec<Point>, r: Vec<Point>, trace: &mut Trace) -> Result<Vec<Point>, Error> {
  if is_chain(&l) && is_chain(&r) {
    let mut joined = l.clone();
    joined.extend(r.iter().copied());
    if all_colinear(&joined) {
      trace.record(Step::new().points(PointRole::ConfirmedHull, joined.iter().copied()));
      return Ok(joined);
    }
  }
  merge_rings(to_ring(l), to_ring(r), trace)
}

fn merge_rings(l: Vec<Point>, r: Vec<Point>, trace: &mut Trace) -> Result<Vec<Point>, Error> {
  let (i_up, j_up) = upper_tangent(&l, &r)?;
  let (i_lo, j_lo) = lower_tangent(&l, &r)?;
  trace.record(
    Step::new()
      .segments(SegmentRole::SubHull, ring_edges(&l))
      .segments(SegmentRole::SubHull, ring_edges(&r))
      .points(PointRole::Helper, [l[i_up], r[j_up], l[i_lo], r[j_lo]].iter().copied())
      .segment(SegmentRole::Helper, Segment::new(l[i_up], r[j_up]))
      .segment(SegmentRole::Helper, Segment::new(l[i_lo], r[j_lo])),
  );

  // CCW splice: left ring from its upper tangent vertex around the outside
  // to its lower tangent vertex, then the right ring from lower to upper.
  let mut merged = Vec::new();
  let mut i = i_up;
  loop {
    merged.push(l[i]);
    if i == i_lo {
      break;
    }
    i = (i + 1) % l.len();
  }
  let mut j = j_lo;
  loop {
    merged.push(r[j]);
    if j == j_up {
      break;
    }
    j = (j + 1) % r.len();
  }
  Ok(merged)
}

fn ring_edges(ring: &[Point]) -> Vec<Segment> {
  if ring.len() < 2 {
    return Vec::new();
  }
  if ring.len() == 2 {
    return vec![Segment::new(ring[0], ring[1])];
  }
  (0..ring.len())
    .map(|i| Segment::new(ring[i], ring[(i + 1) % ring.len()]))
    .collect()
}

fn rightmost(ring: &[Point]) -> usize {
  ring
    .iter()
    .enumerate()
    .max_by(|(_, a), (_, b)| a.cmp(b))
    .map(|(index, _)| index)
    .unwrap_or(0)
}

fn leftmost(ring: &[Point]) -> usize {
  ring
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp(b))
    .map(|(index, _)| index)
    .unwrap_or(0)
}

// Upper tangent of two CCW rings with `l` entirely to the left of `r`.
// Alternately advance the left index counter-clockwise while the next left
// vertex lies above the candidate bridge, and the right index clockwise
// while the previous right vertex does. Colinear ties go to the vertex
// farther from the opposite anchor, so no interior colinear vertex survives
// on a tangent edge.
fn upper_tangent(l: &[Point], r: &[Point]) -> Result<(usize, usize), Error> {
  let nl = l.len();
  let nr = r.len();
  let mut i = rightmost(l);
  let mut j = leftmost(r);
  let mut budget = 2 * (nl + nr) + 4;
  loop {
    let mut moved = false;
    loop {
      let next = (i + 1) % nl;
      let o = l[i].orientation(&r[j], &l[next]);
      if o == Orientation::CounterClockWise
        || (o == Orientation::CoLinear
          && r[j].cmp_distance_to(&l[next], &l[i]) == Ordering::Greater)
      {
        i = next;
        moved = true;
        budget = checked_step(budget)?;
      } else {
        break;
      }
    }
    loop {
      let prev = (j + nr - 1) % nr;
      let o = l[i].orientation(&r[j], &r[prev]);
      if o == Orientation::CounterClockWise
        || (o == Orientation::CoLinear
          && l[i].cmp_distance_to(&r[prev], &r[j]) == Ordering::Greater)
      {
        j = prev;
        moved = true;
        budget = checked_step(budget)?;
      } else {
        break;
      }
    }
    if !moved {
      return Ok((i, j));
    }
  }
}

// Dual of [`upper_tangent`]: walk the left ring clockwise and the right ring
// counter-clockwise while a neighbour lies below the candidate bridge.
fn lower_tangent(l: &[Point], r: &[Point]) -> Result<(usize, usize), Error> {
  let nl = l.len();
  let nr = r.len();
  let mut i = rightmost(l);
  let mut j = leftmost(r);
  let mut budget = 2 * (nl + nr) + 4;
  loop {
    let mut moved = false;
    loop {
      let prev = (i + nl - 1) % nl;
      let o = l[i].orientation(&r[j], &l[prev]);
      if o == Orientation::ClockWise
        || (o == Orientation::CoLinear
          && r[j].cmp_distance_to(&l[prev], &l[i]) == Ordering::Greater)
      {
        i = prev;
        moved = true;
        budget = checked_step(budget)?;
      } else {
        break;
      }
    }
    loop {
      let next = (j + 1) % nr;
      let o = l[i].orientation(&r[j], &r[next]);
      if o == Orientation::ClockWise
        || (o == Orientation::CoLinear
          && l[i].cmp_distance_to(&r[next], &r[j]) == Ordering::Greater)
      {
        j = next;
        moved = true;
        budget = checked_step(budget)?;
      } else {
        break;
      }
    }
    if !moved {
      return Ok((i, j));
    }
  }
}

fn checked_step(budget: usize) -> Result<usize, Error> {
  if budget == 0 {
    Err(Error::UnreachableState("tangent search did not converge"))
  } else {
    Ok(budget - 1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use proptest::collection::vec;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_square_with_interior() {
    let points = vec![
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([2.0, 2.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 0.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.equals(&Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])));
  }

  #[test]
  fn merge_drops_colinear_chain_interior() {
    // The left half collapses to a horizontal chain whose interior points
    // lie on the merged hull's top edge, not at its vertices.
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([6.0, 0.0]),
      Point::new([5.0, -1.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.equals(&Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([5.0, -1.0]),
      Point::new([6.0, 0.0]),
    ])));
  }

  #[test]
  fn convex_hull_all_colinear() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([2.0, 2.0]),
      Point::new([3.0, 3.0]),
      Point::new([4.0, 4.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(
      hull.vertices(),
      &[Point::new([0.0, 0.0]), Point::new([4.0, 4.0])]
    );
  }

  #[test]
  fn trace_records_splits_and_tangents() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 3.0]),
      Point::new([2.0, -1.0]),
      Point::new([3.0, 2.0]),
      Point::new([4.0, 0.0]),
      Point::new([5.0, 1.0]),
    ];
    let mut trace = Trace::new();
    convex_hull(points, &mut trace).unwrap();
    let splits = trace
      .steps()
      .iter()
      .filter(|step| !step.points_for(PointRole::GroupA).is_empty())
      .count();
    let tangents = trace
      .steps()
      .iter()
      .filter(|step| !step.segments_for(SegmentRole::Helper).is_empty())
      .count();
    assert!(splits >= 1);
    assert!(tangents >= 1);
  }

  #[test]
  fn tangent_walk_on_tiny_rings() {
    let l = vec![Point::new([0.0, 0.0])];
    let r = vec![Point::new([2.0, 1.0]), Point::new([3.0, -1.0]), Point::new([4.0, 2.0])];
    let (i_up, j_up) = upper_tangent(&l, &r).unwrap();
    let (i_lo, j_lo) = lower_tangent(&l, &r).unwrap();
    assert_eq!(i_up, 0);
    assert_eq!(i_lo, 0);
    assert_ne!(j_up, j_lo);
  }

  #[proptest]
  fn matches_graham_scan(#[strategy(vec(any_grid_point(), 3..80))] pts: Vec<Point>) {
    let distinct = distinct_points(pts);
    if distinct.len() < 3 {
      return Ok(());
    }
    let mut trace = Trace::new();
    let by_split = convex_hull(distinct.clone(), &mut trace).unwrap();
    let by_scan =
      crate::algorithms::convex_hull::graham_scan::convex_hull(distinct, &mut Trace::new())
        .unwrap();
    prop_assert!(by_split.equals(&by_scan));
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any_grid_point(), 3..80))] pts: Vec<Point>) {
    let distinct = distinct_points(pts.clone());
    if distinct.len() < 3 {
      return Ok(());
    }
    let mut trace = Trace::new();
    let hull = convex_hull(distinct, &mut trace).unwrap();
    prop_assert_eq!(hull.validate().err(), None);
    for pt in pts.iter() {
      prop_assert_ne!(hull.locate(pt), PointLocation::Outside);
    }
  }
}
