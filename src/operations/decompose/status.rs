use slotmap::SecondaryMap;
use tracing::trace;

use crate::math::intersect_2d::sweep_line_x;
use crate::math::Point2;
use crate::ordered_index::{IndexKey, OrderedIndex};
use crate::topology::{HalfEdgeId, VertexId};

use super::classify::VertexKind;

/// The lowest vertex above the sweep line that sees an active edge through
/// the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Helper {
    /// No vertex recorded yet.
    #[default]
    Unset,
    Set {
        vertex: VertexId,
        kind: VertexKind,
    },
}

impl Helper {
    /// The recorded vertex, if any.
    #[must_use]
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            Helper::Set { vertex, .. } => Some(*vertex),
            Helper::Unset => None,
        }
    }

    /// The recorded vertex, if it is a MERGE vertex.
    #[must_use]
    pub fn merge_vertex(&self) -> Option<VertexId> {
        match self {
            Helper::Set {
                vertex,
                kind: VertexKind::Merge,
            } => Some(*vertex),
            _ => None,
        }
    }
}

/// An edge currently crossed by the sweep line.
#[derive(Debug, Clone)]
pub(super) struct StatusEntry {
    pub edge: HalfEdgeId,
    upper: Point2,
    lower: Point2,
    pub helper: Helper,
}

/// Active edges ordered by where they cross the sweep line.
///
/// Every entry is re-keyed at each event before any neighbour lookup.
/// `keys` always holds the current index key of every active edge.
pub(super) struct SweepStatus {
    index: OrderedIndex<StatusEntry>,
    keys: SecondaryMap<HalfEdgeId, IndexKey>,
    tilt: f64,
    tolerance: f64,
}

impl SweepStatus {
    pub fn new(tilt: f64, tolerance: f64) -> Self {
        Self {
            index: OrderedIndex::new(),
            keys: SecondaryMap::new(),
            tilt,
            tolerance,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Moves the sweep line to `event` and re-keys every active edge.
    pub fn advance_to(&mut self, event: &Point2) {
        let tilt = self.tilt;
        self.index
            .rekey(|e| sweep_line_x(&e.upper, &e.lower, event, tilt));
        self.keys.clear();
        for (key, entry) in self.index.iter() {
            self.keys.insert(entry.edge, *key);
        }
        trace!(
            active = self.index.len(),
            keys = ?self.index.iter().map(|(k, _)| k.x()).collect::<Vec<_>>(),
            "status re-keyed"
        );
    }

    /// Activates the edge `upper -> lower` with its helper.
    pub fn insert(
        &mut self,
        edge: HalfEdgeId,
        upper: Point2,
        lower: Point2,
        helper: Helper,
        event: &Point2,
    ) {
        let x = sweep_line_x(&upper, &lower, event, self.tilt);
        let key = self.index.insert(
            x,
            StatusEntry {
                edge,
                upper,
                lower,
                helper,
            },
        );
        self.keys.insert(edge, key);
    }

    /// Deactivates `edge`, returning its entry if it was active.
    pub fn remove(&mut self, edge: HalfEdgeId) -> Option<StatusEntry> {
        let key = self.keys.remove(edge)?;
        self.index.remove(&key)
    }

    /// The active edge directly left of `event`.
    pub fn left_of(&mut self, event: &Point2) -> Option<&mut StatusEntry> {
        let (key, _) = self.index.last_before(event.x - self.tolerance)?;
        self.index.get_mut(&key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{SWEEP_TILT, TOLERANCE};
    use slotmap::SlotMap;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn ids(n: usize) -> Vec<HalfEdgeId> {
        let mut arena: SlotMap<HalfEdgeId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn left_neighbour_after_rekey() {
        let e = ids(2);
        let mut status = SweepStatus::new(SWEEP_TILT, TOLERANCE);
        let top = p(0.0, 10.0);
        status.advance_to(&top);
        // Two edges that cross between y = 10 and y = 0.
        status.insert(e[0], p(0.0, 10.0), p(10.0, 0.0), Helper::Unset, &top);
        status.insert(e[1], p(1.0, 10.0), p(-9.0, 0.0), Helper::Unset, &top);

        // Below their crossing at y = 9.5 the order has swapped.
        let near_top = p(5.0, 9.0);
        status.advance_to(&near_top);
        assert_eq!(status.left_of(&near_top).unwrap().edge, e[0]);

        let near_bottom = p(5.0, 1.0);
        status.advance_to(&near_bottom);
        // At y = 1 the first edge sits at x = 9, right of the event.
        assert_eq!(status.left_of(&near_bottom).unwrap().edge, e[1]);
        let far_right = p(20.0, 1.0);
        status.advance_to(&far_right);
        assert_eq!(status.left_of(&far_right).unwrap().edge, e[0]);
    }

    #[test]
    fn remove_and_missing_neighbour() {
        let e = ids(1);
        let mut status = SweepStatus::new(SWEEP_TILT, TOLERANCE);
        let ev = p(0.0, 1.0);
        status.insert(e[0], p(0.0, 1.0), p(0.0, -1.0), Helper::Unset, &ev);
        assert!(status.left_of(&p(-1.0, 0.0)).is_none());
        assert!(status.remove(e[0]).is_some());
        assert!(status.remove(e[0]).is_none());
        assert_eq!(status.len(), 0);
    }

    #[test]
    fn remove_after_rekey_hits_the_moved_entry() {
        let e = ids(3);
        let mut status = SweepStatus::new(SWEEP_TILT, TOLERANCE);
        let top = p(0.0, 10.0);
        status.insert(e[0], p(0.0, 10.0), p(10.0, 0.0), Helper::Unset, &top);
        status.insert(e[1], p(1.0, 10.0), p(-9.0, 0.0), Helper::Unset, &top);
        status.insert(e[2], p(-5.0, 10.0), p(-5.0, 0.0), Helper::Unset, &top);

        let below = p(5.0, 1.0);
        status.advance_to(&below);
        assert_eq!(status.remove(e[1]).unwrap().edge, e[1]);
        assert_eq!(status.len(), 2);
        // e[0] now sits at x = 9, right of the event.
        assert_eq!(status.left_of(&below).unwrap().edge, e[2]);
        assert_eq!(status.remove(e[0]).unwrap().edge, e[0]);
        assert_eq!(status.remove(e[2]).unwrap().edge, e[2]);
        assert_eq!(status.len(), 0);
    }

    #[test]
    fn helper_merge_lookup() {
        let mut arena: SlotMap<VertexId, ()> = SlotMap::with_key();
        let v = arena.insert(());
        let merge = Helper::Set {
            vertex: v,
            kind: VertexKind::Merge,
        };
        let start = Helper::Set {
            vertex: v,
            kind: VertexKind::Start,
        };
        assert_eq!(merge.merge_vertex(), Some(v));
        assert_eq!(start.merge_vertex(), None);
        assert_eq!(start.vertex(), Some(v));
        assert_eq!(Helper::Unset.vertex(), None);
    }
}
