use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::data::{Hull, Point};
use crate::trace::{PointRole, Segment, SegmentRole, Step, Trace};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Chan%27s_algorithm

// Rings below this size are scanned directly; the binary search only pays
// off once a ring is big enough to bisect.
const BINARY_SEARCH_CUTOFF: usize = 8;

// Properties:
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
//    Emits one Step per sub-hull batch, per wrap step and per restart.
/// $O(n \log h)$ Convex hull of a set of points, output-sensitive in the
/// hull size `h`.
///
/// [Chan's algorithm][wiki]: guess the hull size `m` (starting at 4 and
/// squaring on every failed attempt), split the points into groups of at
/// most `m`, hull each group with a trace-free Graham scan, then gift-wrap
/// across the sub-hulls. Each wrap step takes the best tangent point over
/// all sub-hulls, found by binary search over each convex ring. If the wrap
/// does not close within `m` steps the guess was too small and the attempt
/// is abandoned.
///
/// Points must be distinct; the engine facade guarantees this.
///
/// # Errors
/// Will return an error iff the input contains less than three points, or
/// if the wrap fails to close even with `m` equal to the input size (which
/// indicates a bug rather than a property of the input).
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * An all-colinear input yields the degenerate two-point hull.
///
/// [wiki]: https://en.wikipedia.org/wiki/Chan%27s_algorithm
pub fn convex_hull(pts: Vec<Point>, trace: &mut Trace) -> Result<Hull, Error> {
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientInput);
  }
  let mut m = n.min(4);
  loop {
    if let Some(hull) = attempt(&pts, m, trace)? {
      return Ok(hull);
    }
    if m >= n {
      return Err(Error::UnreachableState(
        "wrap failed to close with the guess at full input size",
      ));
    }
    m = m.saturating_mul(m).min(n);
  }
}

// One wrapping attempt with hull size guess `m`. `Ok(None)` means the
// guess was too small and the caller should square it and retry.
fn attempt(pts: &[Point], m: usize, trace: &mut Trace) -> Result<Option<Hull>, Error> {
  let rings: Vec<Vec<Point>> = pts.chunks(m).map(group_hull).collect();
  let mut setup = Step::new();
  for ring in &rings {
    setup = setup.segments(SegmentRole::SubHull, ring_edges(ring));
  }
  trace.record(setup);

  let start = bottom_most(pts)?;
  let mut hull: Vec<Point> = Vec::new();
  let mut p = start;
  for _ in 0..m {
    hull.push(p);
    let mut best: Option<Point> = None;
    let mut candidates: Vec<Point> = Vec::new();
    for ring in &rings {
      let candidate = match ring.iter().position(|v| *v == p) {
        Some(_) if ring.len() == 1 => continue,
        // From a vertex of the ring itself, the tangent is its successor.
        Some(own) => ring[(own + 1) % ring.len()],
        None => ring[tangent_index(ring, &p)],
      };
      candidates.push(candidate);
      best = Some(match best {
        Some(incumbent) if !better(&p, &candidate, &incumbent) => incumbent,
        _ => candidate,
      });
    }
    let q = best.ok_or(Error::UnreachableState("wrap step found no candidate"))?;
    trace.record(
      Step::new()
        .point(PointRole::Current, p)
        .points(PointRole::Checking, candidates.iter().copied())
        .points(PointRole::ConfirmedHull, hull.iter().copied())
        .segment(SegmentRole::Hull, Segment::new(p, q)),
    );
    if q == start {
      return Ok(Some(Hull::new_unchecked(hull)));
    }
    p = q;
  }
  trace.record(Step::new().points(PointRole::Removed, hull.iter().copied()));
  Ok(None)
}

// Trace-free Graham scan for the per-group sub-hulls. Groups of one or two
// points stay as sorted chains; an all-colinear group collapses to its
// extreme pair.
fn group_hull(group: &[Point]) -> Vec<Point> {
  let mut pts = group.to_vec();
  if pts.len() <= 2 {
    pts.sort_unstable();
    return pts;
  }
  let pivot_idx = pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (OrderedFloat(pt.y_coord()), OrderedFloat(pt.x_coord())))
    .map(|(index, _)| index)
    .unwrap_or(0);
  let pivot = pts.swap_remove(pivot_idx);
  pts.sort_unstable_by(|a, b| pivot.ccw_cmp_around(a, b));
  let mut stack = vec![pivot];
  for pt in pts {
    while stack.len() >= 2 {
      let p2 = stack[stack.len() - 1];
      let p1 = stack[stack.len() - 2];
      if p1.orientation(&p2, &pt) == Orientation::CounterClockWise {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }
  stack
}

fn bottom_most(pts: &[Point]) -> Result<Point, Error> {
  pts
    .iter()
    .min_by_key(|pt| (OrderedFloat(pt.y_coord()), OrderedFloat(pt.x_coord())))
    .copied()
    .ok_or(Error::InsufficientInput)
}

// Jarvis-style candidate comparison: `challenger` beats `incumbent` as the
// next wrap vertex after `p` when the incumbent lies counter-clockwise of
// the ray to the challenger, or on it but nearer.
fn better(p: &Point, challenger: &Point, incumbent: &Point) -> bool {
  match p.orientation(challenger, incumbent) {
    Orientation::CounterClockWise => true,
    Orientation::CoLinear => p.cmp_distance_to(challenger, incumbent) == Ordering::Greater,
    Orientation::ClockWise => false,
  }
}

// Index of the wrap candidate within one sub-hull as seen from the external
// point `p`: the ring vertex no other ring vertex beats under [`better`].
//
// Seen from outside the ring the candidate directions span less than a half
// turn, so vertex quality is strictly unimodal around the ring and a local
// optimum is the global one. Probes that verify as the optimum return
// immediately; if the interval narrowing stalls the search falls back to
// the linear scan, so a mis-narrowed interval costs time, not correctness.
fn tangent_index(ring: &[Point], p: &Point) -> usize {
  let n = ring.len();
  if n < BINARY_SEARCH_CUTOFF {
    return tangent_linear(ring, p);
  }
  let optimum = |c: usize| {
    !better(p, &ring[(c + 1) % n], &ring[c]) && !better(p, &ring[(c + n - 1) % n], &ring[c])
  };
  let rising = |c: usize| better(p, &ring[(c + 1) % n], &ring[c % n]);
  let mut a = 0;
  let mut b = n;
  while b - a > 3 {
    let c = (a + b) / 2;
    if optimum(c % n) {
      return c % n;
    }
    let wrapped = if rising(a) == rising(c) {
      // Same slope at both ends: the optimum was stepped over iff the
      // midpoint no longer beats the left end.
      !better(p, &ring[c % n], &ring[a % n])
    } else {
      rising(a)
    };
    if wrapped {
      b = c + 1;
    } else {
      a = c;
    }
  }
  for c in a..b {
    if optimum(c % n) {
      return c % n;
    }
  }
  tangent_linear(ring, p)
}

fn tangent_linear(ring: &[Point], p: &Point) -> usize {
  let mut best = 0;
  for i in 1..ring.len() {
    if better(p, &ring[i], &ring[best]) {
      best = i;
    }
  }
  best
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointLocation;
  use crate::testing::*;

  use proptest::collection::vec;
  use test_strategy::proptest;

  // Strictly convex by construction: any three parabola points have a
  // non-zero Vandermonde determinant.
  fn parabola(count: i32) -> Vec<Point> {
    (0..count)
      .map(|i| {
        let x = f64::from(i - count / 2);
        Point::new([x, x * x])
      })
      .collect()
  }

  #[test]
  fn convex_hull_square_with_interior() {
    let points = vec![
      Point::new([0.0, 4.0]),
      Point::new([2.0, 2.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 0.0]),
      Point::new([4.0, 4.0]),
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
  fn convex_hull_all_colinear() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([3.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([5.0, 0.0]),
    ];
    let mut trace = Trace::new();
    let hull = convex_hull(points, &mut trace).unwrap();
    assert!(hull.is_degenerate());
    assert!(hull.equals(&Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([5.0, 0.0]),
    ])));
  }

  #[test]
  fn restarts_until_guess_covers_hull() {
    // Twenty points, all hull vertices: the wrap cannot close at m = 4 or
    // m = 16, so the guess must square its way up to the full input.
    let points = parabola(20);
    let mut trace = Trace::new();
    let hull = convex_hull(points.clone(), &mut trace).unwrap();
    assert_eq!(hull.len(), 20);
    let by_scan =
      crate::algorithms::convex_hull::graham_scan::convex_hull(points, &mut Trace::new())
        .unwrap();
    assert!(hull.equals(&by_scan));
    let restarts = trace
      .steps()
      .iter()
      .filter(|step| !step.points_for(PointRole::Removed).is_empty())
      .count();
    assert_eq!(restarts, 2);
  }

  #[test]
  fn binary_tangent_search_matches_linear_scan() {
    let ring = group_hull(&parabola(16));
    assert!(ring.len() >= BINARY_SEARCH_CUTOFF);
    let viewpoints = [
      Point::new([-40.0, -10.0]),
      Point::new([40.0, -10.0]),
      Point::new([0.0, -30.0]),
      Point::new([13.0, 170.0]),
      Point::new([-21.0, 101.0]),
    ];
    for p in viewpoints.iter() {
      assert_eq!(
        ring[tangent_index(&ring, p)],
        ring[tangent_linear(&ring, p)]
      );
    }
  }

  #[proptest]
  fn matches_graham_scan(#[strategy(vec(any_grid_point(), 3..80))] pts: Vec<Point>) {
    let distinct = distinct_points(pts);
    if distinct.len() < 3 {
      return Ok(());
    }
    let mut trace = Trace::new();
    let by_wrap = convex_hull(distinct.clone(), &mut trace).unwrap();
    let by_scan =
      crate::algorithms::convex_hull::graham_scan::convex_hull(distinct, &mut Trace::new())
        .unwrap();
    prop_assert!(by_wrap.equals(&by_scan));
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
