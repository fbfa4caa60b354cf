use std::fmt;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in a subdivision.
    pub struct FaceId;
}

/// Type tag of a face, read from the turn at the leftmost vertex of its
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Counter-clockwise boundary of a bounded region: the polygon and every
    /// piece cut from it by diagonals.
    Exterior,
    /// Clockwise boundary of the unbounded region around the polygon.
    Interior,
}

impl fmt::Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceKind::Exterior => write!(f, "EXTERIOR"),
            FaceKind::Interior => write!(f, "INTERIOR"),
        }
    }
}

/// Data associated with a face.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary half-edges in `next` order.
    pub boundary: Vec<HalfEdgeId>,
    /// Stable display name.
    pub name: String,
    /// Type tag.
    pub kind: FaceKind,
}
