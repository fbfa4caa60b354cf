//! Sweep-line decomposition of polygon faces into y-monotone pieces.
//!
//! The sweep runs top-down over the vertices of each EXTERIOR face. Every
//! SPLIT vertex is joined upwards and every MERGE vertex downwards to a
//! helper vertex, so after the returned diagonals are spliced in no face has
//! a vertex of either kind left.

mod classify;
mod status;

pub use classify::{classify, interior_to_right, VertexKind};
pub use status::Helper;

use tracing::debug;

use crate::error::Result;
use crate::topology::{Diagonal, FaceId, Subdivision, VertexId};

use super::ring::FaceRing;
use super::SweepParams;
use status::SweepStatus;

/// Computes the diagonals that cut every EXTERIOR face into monotone pieces.
///
/// The subdivision is only read; apply the result with
/// [`InsertDiagonals`](super::InsertDiagonals).
pub struct MakeMonotone {
    params: SweepParams,
}

impl Default for MakeMonotone {
    fn default() -> Self {
        Self::new()
    }
}

impl MakeMonotone {
    /// Creates a new `MakeMonotone` operation with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: SweepParams::default(),
        }
    }

    /// Sets custom sweep parameters.
    #[must_use]
    pub fn with_params(mut self, params: SweepParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the sweep over every EXTERIOR face.
    ///
    /// Faces that are already monotone contribute no diagonals.
    ///
    /// # Errors
    ///
    /// Returns an error if two vertices of a face cannot be ordered or an id
    /// is stale.
    pub fn execute(&self, sub: &Subdivision) -> Result<Vec<Diagonal>> {
        let mut diagonals = Vec::new();
        for face in sub.exterior_faces() {
            diagonals.extend(self.sweep_face(sub, face)?);
        }
        Ok(diagonals)
    }

    /// Classifies every boundary vertex of `face`, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its entities is not found.
    pub fn classify_face(
        &self,
        sub: &Subdivision,
        face: FaceId,
    ) -> Result<Vec<(VertexId, VertexKind)>> {
        let ring = FaceRing::read(sub, face)?;
        Ok((0..ring.len())
            .map(|i| (ring.vertices[i], self.kind_at(&ring, i)))
            .collect())
    }

    fn kind_at(&self, ring: &FaceRing, i: usize) -> VertexKind {
        classify(
            &ring.points[ring.prev(i)],
            &ring.points[i],
            &ring.points[ring.next(i)],
            self.params.tolerance,
        )
    }

    fn sweep_face(&self, sub: &Subdivision, face: FaceId) -> Result<Vec<Diagonal>> {
        let ring = FaceRing::read(sub, face)?;
        let order = ring.sweep_order(sub)?;
        let mut run = SweepRun {
            sub,
            ring: &ring,
            status: SweepStatus::new(self.params.tilt, self.params.tolerance),
            diagonals: Vec::new(),
        };

        for i in order {
            let kind = self.kind_at(&ring, i);
            let event = ring.points[i];
            let emitted = run.diagonals.len();
            run.status.advance_to(&event);
            match kind {
                VertexKind::Start => run.activate_outgoing(i, kind),
                VertexKind::End => run.finish_incoming(i),
                VertexKind::Split => {
                    run.update_left(i, kind, true);
                    run.activate_outgoing(i, kind);
                }
                VertexKind::Merge => {
                    run.finish_incoming(i);
                    run.update_left(i, kind, false);
                }
                VertexKind::Regular => {
                    let prev = &ring.points[ring.prev(i)];
                    let next = &ring.points[ring.next(i)];
                    if interior_to_right(prev, &event, next) {
                        run.finish_incoming(i);
                        run.activate_outgoing(i, kind);
                    } else {
                        run.update_left(i, kind, false);
                    }
                }
            }
            debug!(
                face = %ring.name,
                vertex = %sub.vertex(ring.vertices[i])?.name,
                %kind,
                emitted = run.diagonals.len() - emitted,
                active = run.status.len(),
                "sweep event"
            );
        }
        Ok(run.diagonals)
    }
}

/// Working state of one face sweep.
struct SweepRun<'a> {
    sub: &'a Subdivision,
    ring: &'a FaceRing,
    status: SweepStatus,
    diagonals: Vec<Diagonal>,
}

impl SweepRun<'_> {
    fn vertex_name(&self, i: usize) -> &str {
        self.sub
            .vertex(self.ring.vertices[i])
            .map_or("?", |v| v.name.as_str())
    }

    /// Inserts the boundary edge leaving vertex `i`.
    fn activate_outgoing(&mut self, i: usize, kind: VertexKind) {
        let vertex = self.ring.vertices[i];
        let event = self.ring.points[i];
        self.status.insert(
            self.ring.edges[i],
            event,
            self.ring.points[self.ring.next(i)],
            Helper::Set { vertex, kind },
            &event,
        );
    }

    /// Retires the boundary edge arriving at vertex `i`, joining `i` to its
    /// helper when that helper is a MERGE vertex.
    fn finish_incoming(&mut self, i: usize) {
        let edge = self.ring.edges[self.ring.prev(i)];
        match self.status.remove(edge) {
            Some(entry) => {
                if let Some(merge) = entry.helper.merge_vertex() {
                    self.diagonals
                        .push(Diagonal::new(self.ring.vertices[i], merge));
                }
            }
            None => debug!(vertex = %self.vertex_name(i), "incoming edge is not active"),
        }
    }

    /// Hands the edge left of vertex `i` over to `i` as its new helper.
    ///
    /// The old helper is joined to `i` when it is a MERGE vertex, or always
    /// when `any_helper` is set.
    fn update_left(&mut self, i: usize, kind: VertexKind, any_helper: bool) {
        let vertex = self.ring.vertices[i];
        let event = self.ring.points[i];
        let Some(entry) = self.status.left_of(&event) else {
            debug!(vertex = %self.vertex_name(i), %kind, "no active edge to the left");
            return;
        };
        let target = if any_helper {
            entry.helper.vertex()
        } else {
            entry.helper.merge_vertex()
        };
        entry.helper = Helper::Set { vertex, kind };
        if let Some(target) = target {
            self.diagonals.push(Diagonal::new(vertex, target));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn names(sub: &Subdivision, diagonals: &[Diagonal]) -> Vec<(String, String)> {
        diagonals
            .iter()
            .map(|d| {
                (
                    sub.vertex(d.from).unwrap().name.clone(),
                    sub.vertex(d.to).unwrap().name.clone(),
                )
            })
            .collect()
    }

    fn hexagon() -> Subdivision {
        Subdivision::build(
            &[
                p(5.0, 1.0),
                p(8.0, 3.0),
                p(5.0, -2.0),
                p(2.0, 2.0),
                p(-1.0, -1.0),
                p(1.0, 5.0),
            ],
            "H",
        )
        .unwrap()
    }

    #[test]
    fn convex_square_needs_no_diagonal() {
        let sub =
            Subdivision::build(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)], "S").unwrap();
        assert!(MakeMonotone::new().execute(&sub).unwrap().is_empty());
    }

    #[test]
    fn hexagon_classification() {
        let sub = hexagon();
        let face = sub.exterior_faces()[0];
        let kinds: Vec<(String, VertexKind)> = MakeMonotone::new()
            .classify_face(&sub, face)
            .unwrap()
            .into_iter()
            .map(|(v, k)| (sub.vertex(v).unwrap().name.clone(), k))
            .collect();
        let expect = [
            ("N5", VertexKind::Start),
            ("N4", VertexKind::End),
            ("N3", VertexKind::Split),
            ("N2", VertexKind::End),
            ("N1", VertexKind::Start),
            ("N0", VertexKind::Merge),
        ];
        for (got, (name, kind)) in kinds.iter().zip(expect) {
            assert_eq!(got.0, name);
            assert_eq!(got.1, kind, "vertex {name}");
        }
    }

    #[test]
    fn hexagon_split_and_merge_are_resolved() {
        let sub = hexagon();
        let diagonals = MakeMonotone::new().execute(&sub).unwrap();
        assert_eq!(
            names(&sub, &diagonals),
            vec![
                ("N3".to_string(), "N5".to_string()),
                ("N2".to_string(), "N0".to_string())
            ]
        );
    }

    #[test]
    fn notch_from_above_is_merged() {
        // A rectangle with a notch pushed down into its top edge; the notch
        // apex is a MERGE vertex and gets joined to the bottom-left corner.
        let sub = Subdivision::build(
            &[
                p(0.0, 0.0),
                p(4.0, 0.0),
                p(4.0, 3.0),
                p(3.0, 3.0),
                p(2.0, 2.0),
                p(1.0, 3.0),
                p(0.0, 3.0),
            ],
            "N",
        )
        .unwrap();
        let face = sub.exterior_faces()[0];
        let kinds = MakeMonotone::new().classify_face(&sub, face).unwrap();
        let merges: Vec<&str> = kinds
            .iter()
            .filter(|(_, k)| *k == VertexKind::Merge)
            .map(|(v, _)| sub.vertex(*v).unwrap().name.as_str())
            .collect();
        assert_eq!(merges, vec!["N4"]);
        let diagonals = MakeMonotone::new().execute(&sub).unwrap();
        assert_eq!(
            names(&sub, &diagonals),
            vec![("N0".to_string(), "N4".to_string())]
        );
    }

    #[test]
    fn notch_from_below_is_split() {
        let sub = Subdivision::build(
            &[
                p(0.0, 0.0),
                p(1.0, 0.0),
                p(2.0, 1.0),
                p(3.0, 0.0),
                p(4.0, 0.0),
                p(4.0, 3.0),
                p(0.0, 3.0),
            ],
            "N",
        )
        .unwrap();
        let face = sub.exterior_faces()[0];
        let kinds = MakeMonotone::new().classify_face(&sub, face).unwrap();
        assert_eq!(kinds[2].1, VertexKind::Split);
        let diagonals = MakeMonotone::new().execute(&sub).unwrap();
        assert_eq!(diagonals.len(), 1);
        assert_eq!(names(&sub, &diagonals)[0].0, "N2");
    }
}
