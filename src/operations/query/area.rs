use crate::error::Result;
use crate::math::polygon_2d::signed_area;
use crate::topology::{FaceId, Subdivision};

/// Computes the signed area enclosed by a face boundary.
///
/// EXTERIOR faces are counter-clockwise and report a positive area; the
/// INTERIOR face reports the polygon's area negated.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its entities is not found.
    pub fn execute(&self, sub: &Subdivision) -> Result<f64> {
        Ok(signed_area(&sub.face_points(self.face)?))
    }

    /// Sum of the areas of every EXTERIOR face.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is not found.
    pub fn total(sub: &Subdivision) -> Result<f64> {
        sub.exterior_faces()
            .into_iter()
            .map(|f| FaceArea::new(f).execute(sub))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::topology::FaceKind;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn rectangle_faces() {
        let sub =
            Subdivision::build(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0), p(0.0, 3.0)], "R").unwrap();
        for (id, face) in sub.faces() {
            let area = FaceArea::new(id).execute(&sub).unwrap();
            match face.kind {
                FaceKind::Exterior => assert!((area - 6.0).abs() < 1e-10, "area={area}"),
                FaceKind::Interior => assert!((area + 6.0).abs() < 1e-10, "area={area}"),
            }
        }
        assert!((FaceArea::total(&sub).unwrap() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn area_survives_a_split() {
        let mut sub =
            Subdivision::build(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0), p(0.0, 3.0)], "R").unwrap();
        let v: Vec<_> = sub.vertices().map(|(id, _)| id).collect();
        sub.add_diagonal(v[1], v[3]).unwrap();
        let total = FaceArea::total(&sub).unwrap();
        assert!((total - 6.0).abs() < 1e-10, "total={total}");
    }
}
