//! Convex hulls of planar point sets, computed by seven classical algorithms.
//!
//! Every algorithm returns the same hull (up to rotation) together with a
//! replayable [`Trace`](trace::Trace) of its intermediate decisions, meant to
//! be consumed frame-by-frame by an external visualizer.
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod orientation;
pub mod trace;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three distinct points remain after deduplication.
  InsufficientInput,
  /// Two consecutive hull edges are colinear or oriented clockwise.
  ConvexViolation,
  /// An internal invariant was violated. Always a bug, never expected.
  UnreachableState(&'static str),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientInput => write!(f, "Fewer than three distinct input points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::UnreachableState(what) => write!(f, "Unreachable state: {}", what),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
