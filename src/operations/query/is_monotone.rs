use crate::error::Result;
use crate::math::polygon_2d::sweeps_before;
use crate::math::Point2;
use crate::topology::{FaceId, Subdivision};

/// Checks whether a face boundary is monotone with respect to the sweep
/// order.
pub struct IsMonotone {
    face: FaceId,
}

impl IsMonotone {
    /// Creates a new `IsMonotone` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its entities is not found.
    pub fn execute(&self, sub: &Subdivision) -> Result<bool> {
        Ok(is_monotone_ring(&sub.face_points(self.face)?))
    }
}

/// A closed ring is monotone iff exactly one of its vertices sweeps before
/// both neighbours; the chains from there to the single lowest vertex then
/// both descend.
pub(crate) fn is_monotone_ring(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let peaks = (0..n)
        .filter(|&i| {
            let cur = &points[i];
            sweeps_before(cur, &points[(i + n - 1) % n]) && sweeps_before(cur, &points[(i + 1) % n])
        })
        .count();
    peaks == 1
}
