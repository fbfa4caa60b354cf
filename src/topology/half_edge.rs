use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in a subdivision.
    pub struct HalfEdgeId;
}

/// One directed side of an edge.
///
/// The face lies to the left of the half-edge, so `next` continues the
/// boundary of that face counter-clockwise for bounded regions.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// Vertex this half-edge leaves from.
    pub origin: VertexId,
    /// Oppositely directed half-edge over the same segment.
    pub twin: HalfEdgeId,
    /// Next half-edge around `face`; its origin is this edge's destination.
    pub next: HalfEdgeId,
    /// Previous half-edge around `face`.
    pub prev: HalfEdgeId,
    /// Face to the left of this half-edge.
    pub face: FaceId,
    /// Stable display name.
    pub name: String,
}

impl HalfEdgeData {
    /// Creates an unlinked half-edge leaving `origin`.
    ///
    /// `twin`, `next`, `prev` and `face` hold null keys until the caller
    /// threads the half-edge into the structure.
    #[must_use]
    pub(crate) fn unlinked(origin: VertexId, name: impl Into<String>) -> Self {
        Self {
            origin,
            twin: HalfEdgeId::default(),
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
            face: FaceId::default(),
            name: name.into(),
        }
    }
}
