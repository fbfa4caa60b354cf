use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a subdivision.
    pub struct VertexId;
}

/// Paint tag attached to a vertex.
///
/// The geometry never reads it; the three-colouring pass writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All three colours, in assignment order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

/// Data associated with a subdivision vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Position in the plane.
    pub point: Point2,
    /// Stable display name.
    pub name: String,
    /// Optional paint tag.
    pub tag: Option<Color>,
    /// One half-edge leaving this vertex.
    pub incident: Option<HalfEdgeId>,
}

impl VertexData {
    /// Creates an isolated vertex at the given point.
    #[must_use]
    pub fn new(point: Point2, name: impl Into<String>) -> Self {
        Self {
            point,
            name: name.into(),
            tag: None,
            incident: None,
        }
    }
}
