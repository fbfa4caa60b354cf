use std::cmp::Ordering;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::sweep_cmp;
use crate::math::Point2;
use crate::topology::{FaceId, HalfEdgeId, Subdivision, VertexId};

/// Snapshot of one face boundary: vertex `i` is the origin of `edges[i]`,
/// which runs to vertex `i + 1`.
#[derive(Debug, Clone)]
pub(crate) struct FaceRing {
    pub name: String,
    pub vertices: Vec<VertexId>,
    pub points: Vec<Point2>,
    pub edges: Vec<HalfEdgeId>,
}

impl FaceRing {
    pub fn read(sub: &Subdivision, face: FaceId) -> Result<Self> {
        let data = sub.face(face)?;
        let vertices = sub.face_vertices(face)?;
        let points = sub.face_points(face)?;
        Ok(Self {
            name: data.name.clone(),
            vertices,
            points,
            edges: data.boundary.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn prev(&self, i: usize) -> usize {
        (i + self.len() - 1) % self.len()
    }

    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.len()
    }

    /// Ring positions sorted into sweep order, top first.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Comparison`] if two vertices coincide.
    pub fn sweep_order(&self, sub: &Subdivision) -> Result<Vec<usize>> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            sweep_cmp(&self.points[a], &self.points[b]).unwrap_or(Ordering::Equal)
        });
        for pair in order.windows(2) {
            if sweep_cmp(&self.points[pair[0]], &self.points[pair[1]]).is_none() {
                return Err(OperationError::Comparison {
                    first: sub.vertex(self.vertices[pair[0]])?.name.clone(),
                    second: sub.vertex(self.vertices[pair[1]])?.name.clone(),
                }
                .into());
            }
        }
        Ok(order)
    }
}
