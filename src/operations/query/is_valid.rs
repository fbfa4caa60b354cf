use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::{ring_turn_with_tolerance, Turn};
use crate::topology::{FaceId, FaceKind, HalfEdgeId, Subdivision};

/// Validates the structural consistency of a subdivision.
///
/// Checks twin symmetry and `next`/`prev` inversion. Every half-edge must
/// sit on exactly one face boundary and every face must be typed from the
/// turn at its leftmost vertex. The unbounded region must be a single
/// INTERIOR face, and no two edges may cross.
#[derive(Default)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::BrokenInvariant`] naming the first violation
    /// found.
    pub fn execute(&self, sub: &Subdivision) -> Result<()> {
        let owner = check_faces(sub)?;
        for (id, _) in sub.half_edges() {
            check_half_edge(sub, id, owner.get(&id).copied())?;
        }
        for (id, v) in sub.vertices() {
            if let Some(h) = v.incident {
                if sub.half_edge(h)?.origin != id {
                    return broken(format!("{} points at a half-edge it does not start", v.name));
                }
            }
        }
        check_crossings(sub)
    }

    /// Returns `true` if [`IsValid::execute`] finds no violation.
    #[must_use]
    pub fn is_valid(&self, sub: &Subdivision) -> bool {
        self.execute(sub).is_ok()
    }
}

fn broken<T>(message: String) -> Result<T> {
    Err(TopologyError::BrokenInvariant(message).into())
}

fn check_half_edge(sub: &Subdivision, id: HalfEdgeId, owner: Option<FaceId>) -> Result<()> {
    let he = sub.half_edge(id)?;
    let name = &he.name;
    if he.twin == id || sub.half_edge(he.twin)?.twin != id {
        return broken(format!("{name} and its twin are not paired"));
    }
    if sub.half_edge(he.next)?.prev != id || sub.half_edge(he.prev)?.next != id {
        return broken(format!("next/prev around {name} are not inverse"));
    }
    if sub.half_edge(he.next)?.origin != sub.destination(id)? {
        return broken(format!("{name} does not end where its successor starts"));
    }
    if owner != Some(he.face) {
        return broken(format!("{name} is not on the boundary of its face"));
    }
    Ok(())
}

/// Checks every face boundary and returns the face owning each half-edge.
fn check_faces(sub: &Subdivision) -> Result<HashMap<HalfEdgeId, FaceId>> {
    let mut owner = HashMap::new();
    let mut interior = 0;
    for (fid, face) in sub.faces() {
        let len = face.boundary.len();
        if len < 3 {
            return broken(format!("{} has fewer than 3 boundary edges", face.name));
        }
        for (k, &h) in face.boundary.iter().enumerate() {
            if sub.half_edge(h)?.next != face.boundary[(k + 1) % len] {
                return broken(format!("boundary of {} is not a next-cycle", face.name));
            }
            if owner.insert(h, fid).is_some() {
                return broken(format!("{} lies on two faces", sub.half_edge(h)?.name));
            }
        }
        let points = sub.face_points(fid)?;
        let expected = match ring_turn_with_tolerance(&points, sub.tolerance()) {
            Turn::Left => FaceKind::Exterior,
            Turn::Right | Turn::Collinear => FaceKind::Interior,
        };
        if face.kind != expected {
            return broken(format!("{} is typed {} but winds as {expected}", face.name, face.kind));
        }
        if face.kind == FaceKind::Interior {
            interior += 1;
        }
    }
    if owner.len() != sub.num_half_edges() {
        return broken("some half-edges belong to no face".into());
    }
    if sub.num_faces() > 0 && interior != 1 {
        return broken(format!("expected one INTERIOR face, found {interior}"));
    }
    Ok(owner)
}

/// Parametric margin that keeps shared endpoints from counting as crossings.
const ENDPOINT_MARGIN: f64 = 1e-9;

fn check_crossings(sub: &Subdivision) -> Result<()> {
    let mut segments = Vec::new();
    for (id, he) in sub.half_edges() {
        // One half of each twin pair is enough.
        if id < he.twin {
            let a = sub.point(he.origin)?;
            let b = sub.point(sub.destination(id)?)?;
            segments.push((&he.name, a, b));
        }
    }
    let inside = |t: f64| t > ENDPOINT_MARGIN && t < 1.0 - ENDPOINT_MARGIN;
    for (i, (name_a, a0, a1)) in segments.iter().enumerate() {
        for (name_b, b0, b1) in &segments[i + 1..] {
            if let Some((_, t, u)) = segment_segment_intersect_2d(a0, a1, b0, b1) {
                if inside(t) && inside(u) {
                    return broken(format!("{name_a} crosses {name_b}"));
                }
            }
        }
    }
    Ok(())
}
