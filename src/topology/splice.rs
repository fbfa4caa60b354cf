use tracing::debug;

use crate::error::TopologyError;
use crate::math::Point2;

use super::{FaceKind, HalfEdgeId, Subdivision, VertexId};

/// A proposed edge between two vertices, not yet spliced into the
/// structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagonal {
    pub from: VertexId,
    pub to: VertexId,
}

impl Diagonal {
    #[must_use]
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// Returns `true` if both diagonals join the same pair of vertices,
    /// in either direction.
    #[must_use]
    pub fn same_endpoints(&self, other: &Diagonal) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

/// Result of committing a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalOutcome {
    /// A new edge pair was added; holds the half-edge running `from -> to`.
    Inserted(HalfEdgeId),
    /// The two vertices were already joined by an edge; nothing changed.
    DuplicateIgnored,
}

impl DiagonalOutcome {
    #[must_use]
    pub fn is_inserted(&self) -> bool {
        matches!(self, DiagonalOutcome::Inserted(_))
    }
}

impl Subdivision {
    /// Splices an edge between `from` and `to`, splitting the EXTERIOR face
    /// they share into two.
    ///
    /// The split face keeps its id and name for the cycle containing the new
    /// half-edge `from -> to`; the cycle containing its twin becomes a new
    /// face. Both are retyped. Only those two faces are touched.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidDiagonal`] if `from == to` or the
    /// vertices share no EXTERIOR face, and
    /// [`TopologyError::EntityNotFound`] for stale ids.
    pub fn add_diagonal(
        &mut self,
        from: VertexId,
        to: VertexId,
    ) -> Result<DiagonalOutcome, TopologyError> {
        let invalid = |sub: &Self| -> Result<TopologyError, TopologyError> {
            Ok(TopologyError::InvalidDiagonal {
                from: sub.vertex(from)?.name.clone(),
                to: sub.vertex(to)?.name.clone(),
            })
        };
        if from == to {
            return Err(invalid(self)?);
        }
        if self.find_edge(from, to)?.is_some() {
            debug!(
                from = %self.vertex(from)?.name,
                to = %self.vertex(to)?.name,
                "edge already present, diagonal ignored"
            );
            return Ok(DiagonalOutcome::DuplicateIgnored);
        }

        let Some((h_from, h_to)) = self.shared_exterior_corner(from, to)? else {
            return Err(invalid(self)?);
        };
        let face = self.half_edge(h_from)?.face;
        let p_from = self.half_edge(h_from)?.prev;
        let p_to = self.half_edge(h_to)?.prev;

        let (d, d_twin) = self.add_edge_pair(from, to);
        self.set_next(p_from, d)?;
        self.set_next(d, h_to)?;
        self.set_next(p_to, d_twin)?;
        self.set_next(d_twin, h_from)?;

        let kept = self.walk_cycle(d)?;
        self.assign_face(face, kept)?;
        let split = self.add_face_from_cycle(d_twin)?;

        debug!(
            from = %self.vertex(from)?.name,
            to = %self.vertex(to)?.name,
            edge = %self.half_edge(d)?.name,
            kept = %self.face(face)?.name,
            split = %self.face(split)?.name,
            "spliced diagonal"
        );
        Ok(DiagonalOutcome::Inserted(d))
    }

    /// Outgoing half-edges of `from` and `to` that lie on one EXTERIOR face.
    ///
    /// When several faces qualify, the one whose corner at `from` opens
    /// towards `to` is chosen.
    fn shared_exterior_corner(
        &self,
        from: VertexId,
        to: VertexId,
    ) -> Result<Option<(HalfEdgeId, HalfEdgeId)>, TopologyError> {
        let out_to = self.incident_half_edges(to)?;
        let mut candidates = Vec::new();
        for h_from in self.incident_half_edges(from)? {
            let face = self.half_edge(h_from)?.face;
            if self.face(face)?.kind != FaceKind::Exterior {
                continue;
            }
            for &h_to in &out_to {
                if self.half_edge(h_to)?.face == face {
                    candidates.push((h_from, h_to));
                }
            }
        }
        if candidates.len() > 1 {
            let target = self.point(to)?;
            for &(h_from, h_to) in &candidates {
                if self.corner_opens_towards(h_from, &target)? {
                    return Ok(Some((h_from, h_to)));
                }
            }
        }
        Ok(candidates.first().copied())
    }

    /// Returns `true` if the direction from the origin of `h` to `target`
    /// lies strictly inside the face corner between `prev(h)` and `h`.
    fn corner_opens_towards(&self, h: HalfEdgeId, target: &Point2) -> Result<bool, TopologyError> {
        let he = self.half_edge(h)?;
        let apex = self.point(he.origin)?;
        let ahead = self.point(self.destination(h)?)? - apex;
        let behind = self.point(self.half_edge(he.prev)?.origin)? - apex;
        let dir = *target - apex;
        // The face lies to the left, sweeping counter-clockwise from `ahead`
        // to `behind`.
        if ahead.perp(&behind) > 0.0 {
            Ok(ahead.perp(&dir) > 0.0 && dir.perp(&behind) > 0.0)
        } else {
            Ok(!(behind.perp(&dir) >= 0.0 && dir.perp(&ahead) >= 0.0))
        }
    }
}
