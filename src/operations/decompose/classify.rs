use std::fmt;

use crate::math::polygon_2d::{sweeps_before, turn_with_tolerance, Turn};
use crate::math::Point2;

/// Role of a vertex in the downward sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Both neighbours below, interior angle convex.
    Start,
    /// Both neighbours below, interior angle reflex.
    Split,
    /// Both neighbours above, interior angle convex.
    End,
    /// Both neighbours above, interior angle reflex.
    Merge,
    /// One neighbour above and one below.
    Regular,
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VertexKind::Start => "START",
            VertexKind::Split => "SPLIT",
            VertexKind::End => "END",
            VertexKind::Merge => "MERGE",
            VertexKind::Regular => "REGULAR",
        };
        f.write_str(s)
    }
}

/// Classifies `cur` from its neighbours on a counter-clockwise ring.
///
/// A left turn at `cur` is convex, a right turn reflex. A flat corner never
/// has both neighbours on one side in a simple ring; it is read as convex.
#[must_use]
pub fn classify(prev: &Point2, cur: &Point2, next: &Point2, tolerance: f64) -> VertexKind {
    let prev_below = sweeps_before(cur, prev);
    let next_below = sweeps_before(cur, next);
    let reflex = turn_with_tolerance(prev, cur, next, tolerance) == Turn::Right;
    match (prev_below, next_below, reflex) {
        (true, true, false) => VertexKind::Start,
        (true, true, true) => VertexKind::Split,
        (false, false, false) => VertexKind::End,
        (false, false, true) => VertexKind::Merge,
        _ => VertexKind::Regular,
    }
}

/// Returns `true` for a REGULAR vertex whose interior lies to its right,
/// i.e. the ring passes through it going down the sweep.
#[must_use]
pub fn interior_to_right(prev: &Point2, cur: &Point2, next: &Point2) -> bool {
    sweeps_before(prev, cur) && sweeps_before(cur, next)
}
