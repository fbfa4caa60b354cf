use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{turn_with_tolerance, Turn};
use crate::topology::{Diagonal, FaceId, Subdivision};

use super::query::is_monotone_ring;
use super::ring::FaceRing;
use super::{InsertDiagonals, MakeMonotone, SweepParams};

/// Side of a monotone face a vertex belongs to, seen from its top vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    /// Reached from the top by following `next`.
    Left,
    /// Reached from the top by following `prev`.
    Right,
}

/// Computes the diagonals that triangulate every monotone EXTERIOR face.
///
/// A face with `k` vertices yields `k - 3` diagonals. The subdivision is
/// only read.
pub struct TriangulateMonotone {
    params: SweepParams,
}

impl Default for TriangulateMonotone {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangulateMonotone {
    /// Creates a new `TriangulateMonotone` operation with default parameters.
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

    /// Executes the scan over every EXTERIOR face.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NotMonotone`] if a face still has a split or
    /// merge vertex.
    pub fn execute(&self, sub: &Subdivision) -> Result<Vec<Diagonal>> {
        let mut diagonals = Vec::new();
        for face in sub.exterior_faces() {
            diagonals.extend(self.triangulate_face(sub, face)?);
        }
        Ok(diagonals)
    }

    /// Chain-stack scan over a single monotone face.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NotMonotone`] if the face is not monotone.
    pub fn triangulate_face(&self, sub: &Subdivision, face: FaceId) -> Result<Vec<Diagonal>> {
        let ring = FaceRing::read(sub, face)?;
        let n = ring.len();
        if n <= 3 {
            return Ok(Vec::new());
        }
        if !is_monotone_ring(&ring.points) {
            return Err(OperationError::NotMonotone(ring.name.clone()).into());
        }

        let order = ring.sweep_order(sub)?;
        let (top, bottom) = (order[0], order[n - 1]);
        let mut chain = vec![Chain::Right; n];
        let mut i = ring.next(top);
        while i != bottom {
            chain[i] = Chain::Left;
            i = ring.next(i);
        }

        let mut out = Vec::with_capacity(n - 3);
        let mut emit = |a: usize, b: usize| out.push(Diagonal::new(ring.vertices[a], ring.vertices[b]));

        let mut stack = vec![order[0], order[1]];
        for j in 2..n - 1 {
            let u = order[j];
            let Some(&last) = stack.last() else {
                break;
            };
            if chain[u] == chain[last] {
                stack.pop();
                let mut kept = last;
                while let Some(&q) = stack.last() {
                    if !self.cuts_convex_corner(&ring, chain[u], q, kept, u) {
                        break;
                    }
                    stack.pop();
                    emit(u, q);
                    kept = q;
                }
                stack.push(kept);
            } else {
                while let Some(q) = stack.pop() {
                    if !stack.is_empty() {
                        emit(u, q);
                    }
                }
                stack.push(order[j - 1]);
            }
            stack.push(u);
        }

        // The bottom vertex sees every stacked vertex; the first and last
        // are its boundary neighbours.
        stack.pop();
        while let Some(q) = stack.pop() {
            if !stack.is_empty() {
                emit(bottom, q);
            }
        }

        debug!(face = %ring.name, vertices = n, diagonals = out.len(), "triangulated monotone face");
        Ok(out)
    }

    /// Returns `true` if the diagonal `u -> q` cuts off the corner at `p`,
    /// i.e. `p` is strictly convex along the chain's boundary direction.
    fn cuts_convex_corner(&self, ring: &FaceRing, side: Chain, q: usize, p: usize, u: usize) -> bool {
        let (q, p, u) = (&ring.points[q], &ring.points[p], &ring.points[u]);
        let t = match side {
            Chain::Left => turn_with_tolerance(q, p, u, self.params.tolerance),
            Chain::Right => turn_with_tolerance(u, p, q, self.params.tolerance),
        };
        t == Turn::Left
    }
}

/// Triangulates every EXTERIOR face of a simple polygon subdivision.
///
/// Runs the monotone decomposition, commits its diagonals, then triangulates
/// each monotone piece and commits those too. For a polygon with `n`
/// vertices the returned list holds `n - 3` diagonals and the subdivision
/// ends with `n - 2` triangular EXTERIOR faces.
pub struct Triangulate {
    params: SweepParams,
}

impl Default for Triangulate {
    fn default() -> Self {
        Self::new()
    }
}

impl Triangulate {
    /// Creates a new `Triangulate` operation with default parameters.
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

    /// Executes the triangulation in place, returning every diagonal that
    /// was actually inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if a diagonal cannot be spliced or a piece is not
    /// monotone after decomposition.
    pub fn execute(&self, sub: &mut Subdivision) -> Result<Vec<Diagonal>> {
        let split = MakeMonotone::new().with_params(self.params).execute(sub)?;
        let mut inserted = commit(sub, split)?;
        let pieces = sub.exterior_faces().len();

        let fill = TriangulateMonotone::new()
            .with_params(self.params)
            .execute(sub)?;
        inserted.extend(commit(sub, fill)?);

        debug!(
            name = sub.name(),
            monotone_pieces = pieces,
            diagonals = inserted.len(),
            triangles = sub.exterior_faces().len(),
            "triangulated"
        );
        Ok(inserted)
    }
}

fn commit(sub: &mut Subdivision, diagonals: Vec<Diagonal>) -> Result<Vec<Diagonal>> {
    let outcomes = InsertDiagonals::new(diagonals.iter().copied()).execute(sub)?;
    Ok(diagonals
        .into_iter()
        .zip(outcomes)
        .filter(|(_, o)| o.is_inserted())
        .map(|(d, _)| d)
        .collect())
}
