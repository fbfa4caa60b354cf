use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConstructionError, Result};
use crate::math::distance_2d::coincident;
use crate::math::polygon_2d::{is_degenerate, ring_turn_with_tolerance, Turn};
use crate::math::{Point2, TOLERANCE};

use super::{Subdivision, VertexData};

impl Subdivision {
    /// Builds the subdivision of a simple polygon given as a point ring.
    ///
    /// The ring is reversed first if it winds clockwise, so the polygon's own
    /// boundary is always the counter-clockwise EXTERIOR face. Vertices keep
    /// the name `N{i}` of their input index either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] for fewer than 3 points, repeated
    /// points, or a ring without area.
    pub fn build(points: &[Point2], name: &str) -> Result<Self> {
        Self::build_with_tolerance(points, name, TOLERANCE)
    }

    /// Like [`Subdivision::build`], with an explicit tolerance for the
    /// duplicate and orientation tests. The subdivision keeps `tolerance`
    /// for typing the faces that later splices create.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] for fewer than 3 points, repeated
    /// points, or a ring without area.
    pub fn build_with_tolerance(points: &[Point2], name: &str, tolerance: f64) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(ConstructionError::TooFewPoints { count: n }.into());
        }
        for i in 0..n {
            if coincident(&points[i], &points[(i + 1) % n], tolerance) {
                return Err(ConstructionError::ConsecutiveDuplicate { index: i }.into());
            }
        }
        for i in 0..n {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if coincident(&points[i], &points[j], tolerance) {
                    return Err(ConstructionError::DuplicatePoint {
                        first: i,
                        second: j,
                    }
                    .into());
                }
            }
        }
        if is_degenerate(points, tolerance) {
            return Err(ConstructionError::Degenerate.into());
        }

        let mut order: Vec<usize> = (0..n).collect();
        if ring_turn_with_tolerance(points, tolerance) == Turn::Right {
            order.reverse();
        }

        let mut sub = Subdivision::new(name);
        sub.tolerance = tolerance;
        let vertices: Vec<_> = order
            .iter()
            .map(|&i| sub.add_vertex(VertexData::new(points[i], format!("N{i}"))))
            .collect();

        let mut primary = Vec::with_capacity(n);
        let mut twins = Vec::with_capacity(n);
        for k in 0..n {
            let (uv, vu) = sub.add_edge_pair(vertices[k], vertices[(k + 1) % n]);
            primary.push(uv);
            twins.push(vu);
            sub.vertex_mut(vertices[k])?.incident = Some(uv);
        }
        for k in 0..n {
            // Primary ring runs forward; the twin ring runs backward.
            sub.set_next(primary[k], primary[(k + 1) % n])?;
            sub.set_next(twins[(k + 1) % n], twins[k])?;
        }

        let mut visited = HashSet::new();
        for seed in primary.iter().chain(twins.iter()).copied() {
            if visited.contains(&seed) {
                continue;
            }
            let face = sub.add_face_from_cycle(seed)?;
            visited.extend(sub.face(face)?.boundary.iter().copied());
        }

        debug!(
            name,
            vertices = sub.num_vertices(),
            faces = sub.num_faces(),
            reversed = order.first() != Some(&0),
            "built subdivision"
        );
        Ok(sub)
    }
}
