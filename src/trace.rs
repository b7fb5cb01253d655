//! Replayable record of an algorithm's intermediate decisions.
//!
//! Each algorithm appends [`Step`]s to a [`Trace`] as it runs. A step is an
//! immutable snapshot assigning semantic roles to points, segments and arcs;
//! a visualizer materialises one frame per step and replays them in emission
//! order. The engine never re-reads a trace it has emitted.

use std::collections::BTreeMap;

use crate::data::Point;

/// Semantic role of a highlighted point within a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointRole {
  /// The point the algorithm is positioned at.
  Current,
  /// A point under examination.
  Checking,
  /// A point known to be a hull vertex.
  ConfirmedHull,
  /// A point discarded from further consideration.
  Removed,
  /// First candidate partition (e.g. one side of a dividing line).
  GroupA,
  /// Second candidate partition.
  GroupB,
  /// Auxiliary point, e.g. a tangent endpoint or a farthest apex.
  Helper,
}

/// Semantic role of a highlighted segment within a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentRole {
  Checking,
  Hull,
  SubHull,
  Removed,
  Helper,
}

/// Semantic role of a highlighted arc within a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArcRole {
  Checking,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
  pub from: Point,
  pub to: Point,
}

impl Segment {
  pub const fn new(from: Point, to: Point) -> Segment {
    Segment { from, to }
  }
}

/// Circular arc swept around `pivot` from the direction of `from` to the
/// direction of `to`, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
  pub pivot: Point,
  pub from: Point,
  pub to: Point,
}

impl Arc {
  pub const fn new(pivot: Point, from: Point, to: Point) -> Arc {
    Arc { pivot, from, to }
  }
}

/// One renderable frame: a mapping from roles to the points, segments and
/// arcs carrying that role. Built once with the consuming methods, then
/// immutable inside the owning [`Trace`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
  point_marks: BTreeMap<PointRole, Vec<Point>>,
  segment_marks: BTreeMap<SegmentRole, Vec<Segment>>,
  arc_marks: BTreeMap<ArcRole, Vec<Arc>>,
}

impl Step {
  pub fn new() -> Step {
    Step::default()
  }

  #[must_use]
  pub fn point(self, role: PointRole, pt: Point) -> Step {
    self.points(role, std::iter::once(pt))
  }

  #[must_use]
  pub fn points<I>(mut self, role: PointRole, pts: I) -> Step
  where
    I: IntoIterator<Item = Point>,
  {
    self.point_marks.entry(role).or_default().extend(pts);
    self
  }

  #[must_use]
  pub fn segment(self, role: SegmentRole, segment: Segment) -> Step {
    self.segments(role, std::iter::once(segment))
  }

  #[must_use]
  pub fn segments<I>(mut self, role: SegmentRole, segments: I) -> Step
  where
    I: IntoIterator<Item = Segment>,
  {
    self.segment_marks.entry(role).or_default().extend(segments);
    self
  }

  #[must_use]
  pub fn arc(mut self, role: ArcRole, arc: Arc) -> Step {
    self.arc_marks.entry(role).or_default().push(arc);
    self
  }

  pub fn points_for(&self, role: PointRole) -> &[Point] {
    self.point_marks.get(&role).map_or(&[], Vec::as_slice)
  }

  pub fn segments_for(&self, role: SegmentRole) -> &[Segment] {
    self.segment_marks.get(&role).map_or(&[], Vec::as_slice)
  }

  pub fn arcs_for(&self, role: ArcRole) -> &[Arc] {
    self.arc_marks.get(&role).map_or(&[], Vec::as_slice)
  }

  pub fn is_empty(&self) -> bool {
    self.point_marks.is_empty() && self.segment_marks.is_empty() && self.arc_marks.is_empty()
  }
}

/// Ordered, append-only sequence of steps. One trace per invocation; owned
/// exclusively by the running algorithm and handed to the caller on
/// completion.
#[derive(Debug, Clone, Default)]
pub struct Trace {
  steps: Vec<Step>,
}

impl Trace {
  pub fn new() -> Trace {
    Trace::default()
  }

  pub fn record(&mut self, step: Step) {
    self.steps.push(step);
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl<'a> IntoIterator for &'a Trace {
  type Item = &'a Step;
  type IntoIter = std::slice::Iter<'a, Step>;
  fn into_iter(self) -> Self::IntoIter {
    self.steps.iter()
  }
}
