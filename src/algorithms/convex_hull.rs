//! Engine facade: deduplication, algorithm selection and dispatch.
//!
//! Callers hand in raw points and a selector; the facade deduplicates,
//! shuffles (the hull is order-independent, but a shuffled insertion order
//! makes the recorded trace worth watching) and dispatches to one of the
//! seven algorithm modules. Each module also exposes its `convex_hull`
//! directly for callers that manage their own preprocessing.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::data::{Hull, Point};
use crate::trace::Trace;
use crate::Error;

pub mod brute_force;
pub mod chan;
pub mod graham_scan;
pub mod jarvis_march;
pub mod kirkpatrick_seidel;
pub mod monotone_chain;
pub mod quickhull;

/// Closed selector over the seven hull algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  BruteForce,
  GrahamScan,
  JarvisMarch,
  QuickHull,
  MonotoneChain,
  KirkpatrickSeidel,
  Chan,
}

impl Algorithm {
  pub const ALL: [Algorithm; 7] = [
    Algorithm::BruteForce,
    Algorithm::GrahamScan,
    Algorithm::JarvisMarch,
    Algorithm::QuickHull,
    Algorithm::MonotoneChain,
    Algorithm::KirkpatrickSeidel,
    Algorithm::Chan,
  ];
}

impl std::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Algorithm::BruteForce => "brute force",
      Algorithm::GrahamScan => "Graham scan",
      Algorithm::JarvisMarch => "Jarvis march",
      Algorithm::QuickHull => "Quickhull",
      Algorithm::MonotoneChain => "monotone chain",
      Algorithm::KirkpatrickSeidel => "Kirkpatrick-Seidel",
      Algorithm::Chan => "Chan's algorithm",
    })
  }
}

/// Lexicographic sort plus exact deduplication. Idempotent.
///
/// # Errors
/// Will return an error iff fewer than three distinct points remain.
pub fn remove_duplicates(mut pts: Vec<Point>) -> Result<Vec<Point>, Error> {
  pts.sort_unstable();
  pts.dedup();
  if pts.len() < 3 {
    return Err(Error::InsufficientInput);
  }
  Ok(pts)
}

/// Convex hull of a set of points with the chosen algorithm, together with
/// the replayable trace of its intermediate decisions.
///
/// The input is deduplicated and then shuffled from entropy, so the trace
/// differs between runs. Use [`convex_hull_with_rng`] for a reproducible
/// trace.
///
/// # Errors
/// Will return an error iff the input contains less than three distinct
/// points.
pub fn convex_hull(pts: Vec<Point>, algorithm: Algorithm) -> Result<(Hull, Trace), Error> {
  let mut rng = SmallRng::from_entropy();
  convex_hull_with_rng(pts, algorithm, &mut rng)
}

/// [`convex_hull`] with a caller-supplied source of randomness, for
/// deterministic replay.
///
/// # Errors
/// Will return an error iff the input contains less than three distinct
/// points.
pub fn convex_hull_with_rng<R>(
  pts: Vec<Point>,
  algorithm: Algorithm,
  rng: &mut R,
) -> Result<(Hull, Trace), Error>
where
  R: Rng + ?Sized,
{
  let mut pts = remove_duplicates(pts)?;
  pts.shuffle(rng);
  let mut trace = Trace::new();
  let hull = match algorithm {
    Algorithm::BruteForce => brute_force::convex_hull(pts, &mut trace),
    Algorithm::GrahamScan => graham_scan::convex_hull(pts, &mut trace),
    Algorithm::JarvisMarch => jarvis_march::convex_hull(pts, &mut trace),
    Algorithm::QuickHull => quickhull::convex_hull(pts, &mut trace),
    Algorithm::MonotoneChain => monotone_chain::convex_hull(pts, &mut trace),
    Algorithm::KirkpatrickSeidel => kirkpatrick_seidel::convex_hull(pts, &mut trace),
    Algorithm::Chan => chan::convex_hull(pts, &mut trace),
  }?;
  Ok((hull, trace))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::collection::vec;
  use test_strategy::proptest;

  fn seeded() -> SmallRng {
    SmallRng::seed_from_u64(0x1337)
  }

  #[test]
  fn interior_point_is_excluded_by_every_algorithm() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
      Point::new([2.0, 2.0]),
    ];
    let expected = Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ]);
    for algorithm in Algorithm::ALL {
      let (hull, trace) =
        convex_hull_with_rng(points.clone(), algorithm, &mut seeded()).unwrap();
      assert!(hull.equals(&expected), "{}", algorithm);
      assert!(!trace.is_empty(), "{}", algorithm);
    }
  }

  #[test]
  fn colinear_input_yields_extreme_pair_for_every_algorithm() {
    let points = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
    ];
    let expected =
      Hull::new_unchecked(vec![Point::new([0.0, 0.0]), Point::new([4.0, 0.0])]);
    for algorithm in Algorithm::ALL {
      let (hull, _) = convex_hull_with_rng(points.clone(), algorithm, &mut seeded()).unwrap();
      assert!(hull.equals(&expected), "{}", algorithm);
    }
  }

  #[test]
  fn duplicates_are_removed_before_dispatch() {
    let points = vec![
      Point::new([1.0, 1.0]),
      Point::new([0.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([2.0, 0.0]),
      Point::new([1.0, 2.0]),
    ];
    let expected = Hull::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([1.0, 2.0]),
    ]);
    for algorithm in Algorithm::ALL {
      let (hull, _) = convex_hull_with_rng(points.clone(), algorithm, &mut seeded()).unwrap();
      assert!(hull.equals(&expected), "{}", algorithm);
    }
  }

  #[test]
  fn remove_duplicates_is_idempotent() {
    let points = vec![
      Point::new([1.0, 1.0]),
      Point::new([0.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([2.0, 0.0]),
    ];
    let once = remove_duplicates(points).unwrap();
    let twice = remove_duplicates(once.clone()).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn too_few_distinct_points_is_an_error() {
    let points = vec![
      Point::new([1.0, 1.0]),
      Point::new([1.0, 1.0]),
      Point::new([2.0, 2.0]),
    ];
    for algorithm in Algorithm::ALL {
      assert_eq!(
        convex_hull_with_rng(points.clone(), algorithm, &mut seeded()).err(),
        Some(Error::InsufficientInput),
        "{}",
        algorithm
      );
    }
  }

  #[proptest]
  fn all_algorithms_agree(#[strategy(vec(any_grid_point(), 3..50))] pts: Vec<Point>) {
    if distinct_points(pts.clone()).len() < 3 {
      return Ok(());
    }
    let (reference, _) =
      convex_hull_with_rng(pts.clone(), Algorithm::GrahamScan, &mut seeded()).unwrap();
    for algorithm in Algorithm::ALL {
      let (hull, _) = convex_hull_with_rng(pts.clone(), algorithm, &mut seeded()).unwrap();
      prop_assert!(hull.equals(&reference), "{}", algorithm);
    }
  }
}
