//! Half-edge planar subdivision.
//!
//! Vertices, half-edges and faces live in generational arenas and refer to
//! each other only by id. The structure grows monotonically: [`build`]
//! creates one vertex and one edge pair per input point, and
//! [`add_diagonal`] adds an edge pair and at most one face per call.
//!
//! [`build`]: Subdivision::build
//! [`add_diagonal`]: Subdivision::add_diagonal

mod build;
pub mod face;
pub mod half_edge;
mod splice;
pub mod vertex;

pub use face::{FaceData, FaceId, FaceKind};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use splice::{Diagonal, DiagonalOutcome};
pub use vertex::{Color, VertexData, VertexId};

use std::fmt;

use crate::error::TopologyError;
use crate::math::polygon_2d::{ring_turn_with_tolerance, Turn};
use crate::math::{Point2, TOLERANCE};
use slotmap::SlotMap;

/// Central arena that owns every vertex, half-edge and face of one
/// subdivision.
#[derive(Debug, Clone)]
pub struct Subdivision {
    name: String,
    tolerance: f64,
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    edge_count: usize,
    face_count: usize,
}

impl Default for Subdivision {
    fn default() -> Self {
        Self {
            name: String::new(),
            tolerance: TOLERANCE,
            vertices: SlotMap::with_key(),
            half_edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            edge_count: 0,
            face_count: 0,
        }
    }
}

impl Subdivision {
    /// Creates an empty subdivision.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name given at construction; faces are named after it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tolerance the subdivision was built with; face typing uses it.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    // --- Vertex operations ---

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the subdivision.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the subdivision.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Iterates over all vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not found.
    pub fn point(&self, id: VertexId) -> Result<Point2, TopologyError> {
        Ok(self.vertex(id)?.point)
    }

    // --- Half-edge operations ---

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the subdivision.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the subdivision.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Iterates over all half-edges in creation order.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData)> {
        self.half_edges.iter()
    }

    /// Vertex a half-edge points to (the origin of its twin).
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its twin is not found.
    pub fn destination(&self, id: HalfEdgeId) -> Result<VertexId, TopologyError> {
        let twin = self.half_edge(id)?.twin;
        Ok(self.half_edge(twin)?.origin)
    }

    /// Every half-edge whose origin is `vertex`.
    ///
    /// Rotates around the vertex through `twin(prev(h))`, so the cost is the
    /// vertex degree rather than a scan of the whole structure.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is stale or the rotation does not close.
    pub fn incident_half_edges(&self, vertex: VertexId) -> Result<Vec<HalfEdgeId>, TopologyError> {
        let Some(start) = self.vertex(vertex)?.incident else {
            return Ok(Vec::new());
        };
        let mut out = vec![start];
        let mut current = start;
        loop {
            let prev = self.half_edge(current)?.prev;
            current = self.half_edge(prev)?.twin;
            if current == start {
                return Ok(out);
            }
            if out.len() > self.half_edges.len() {
                return Err(TopologyError::BrokenInvariant(format!(
                    "rotation around {} does not close",
                    self.vertex(vertex)?.name
                )));
            }
            out.push(current);
        }
    }

    /// The half-edge running from `from` to `to`, if the edge exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is stale.
    pub fn find_edge(
        &self,
        from: VertexId,
        to: VertexId,
    ) -> Result<Option<HalfEdgeId>, TopologyError> {
        for h in self.incident_half_edges(from)? {
            if self.destination(h)? == to {
                return Ok(Some(h));
            }
        }
        Ok(None)
    }

    // --- Face operations ---

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the subdivision.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Iterates over all faces in creation order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    /// Ids of every EXTERIOR face, in creation order.
    #[must_use]
    pub fn exterior_faces(&self) -> Vec<FaceId> {
        self.faces
            .iter()
            .filter(|(_, f)| f.kind == FaceKind::Exterior)
            .map(|(id, _)| id)
            .collect()
    }

    /// Origins of the boundary half-edges of a face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its half-edges is not found.
    pub fn face_vertices(&self, face: FaceId) -> Result<Vec<VertexId>, TopologyError> {
        self.face(face)?
            .boundary
            .iter()
            .map(|&h| self.half_edge(h).map(|he| he.origin))
            .collect()
    }

    /// Positions of the boundary vertices of a face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its entities is not found.
    pub fn face_points(&self, face: FaceId) -> Result<Vec<Point2>, TopologyError> {
        self.face_vertices(face)?
            .into_iter()
            .map(|v| self.point(v))
            .collect()
    }

    // --- Internal construction helpers ---

    fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Allocates an unlinked twin pair `u -> v`, `v -> u` named `E{k}` and
    /// `E{k}'`.
    fn add_edge_pair(&mut self, u: VertexId, v: VertexId) -> (HalfEdgeId, HalfEdgeId) {
        let k = self.edge_count;
        self.edge_count += 1;
        let uv = self
            .half_edges
            .insert(HalfEdgeData::unlinked(u, format!("E{k}")));
        let vu = self
            .half_edges
            .insert(HalfEdgeData::unlinked(v, format!("E{k}'")));
        self.half_edges[uv].twin = vu;
        self.half_edges[vu].twin = uv;
        (uv, vu)
    }

    /// Sets `he.next = next` and `next.prev = he`.
    fn set_next(&mut self, he: HalfEdgeId, next: HalfEdgeId) -> Result<(), TopologyError> {
        self.half_edge_mut(he)?.next = next;
        self.half_edge_mut(next)?.prev = he;
        Ok(())
    }

    /// Half-edges met by following `next` from `seed` until it returns.
    fn walk_cycle(&self, seed: HalfEdgeId) -> Result<Vec<HalfEdgeId>, TopologyError> {
        let mut cycle = vec![seed];
        let mut current = self.half_edge(seed)?.next;
        while current != seed {
            if cycle.len() > self.half_edges.len() {
                return Err(TopologyError::BrokenInvariant(format!(
                    "boundary walk from {} does not close",
                    self.half_edge(seed)?.name
                )));
            }
            cycle.push(current);
            current = self.half_edge(current)?.next;
        }
        Ok(cycle)
    }

    /// Type tag of a closed boundary from the turn at its leftmost vertex.
    fn classify_boundary(&self, boundary: &[HalfEdgeId]) -> Result<FaceKind, TopologyError> {
        let points = boundary
            .iter()
            .map(|&h| self.point(self.half_edge(h)?.origin))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match ring_turn_with_tolerance(&points, self.tolerance) {
            Turn::Left => FaceKind::Exterior,
            Turn::Right | Turn::Collinear => FaceKind::Interior,
        })
    }

    /// Points every half-edge of `boundary` at `face` and retypes the face.
    fn assign_face(&mut self, face: FaceId, boundary: Vec<HalfEdgeId>) -> Result<(), TopologyError> {
        let kind = self.classify_boundary(&boundary)?;
        for &h in &boundary {
            self.half_edge_mut(h)?.face = face;
        }
        let data = self
            .faces
            .get_mut(face)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))?;
        data.boundary = boundary;
        data.kind = kind;
        Ok(())
    }

    /// Creates a face named `{name}:F{k}` over the cycle starting at `seed`.
    fn add_face_from_cycle(&mut self, seed: HalfEdgeId) -> Result<FaceId, TopologyError> {
        let boundary = self.walk_cycle(seed)?;
        let name = format!("{}:F{}", self.name, self.face_count);
        self.face_count += 1;
        let face = self.faces.insert(FaceData {
            boundary: Vec::new(),
            name,
            kind: FaceKind::Interior,
        });
        self.assign_face(face, boundary)?;
        Ok(face)
    }
}

impl fmt::Display for Subdivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let he_name = |id: HalfEdgeId| {
            self.half_edges
                .get(id)
                .map_or("?", |he| he.name.as_str())
        };
        let v_name = |id: VertexId| self.vertices.get(id).map_or("?", |v| v.name.as_str());
        let f_name = |id: FaceId| self.faces.get(id).map_or("?", |fc| fc.name.as_str());

        writeln!(
            f,
            "{:<8}{:<8}{:<8}{:<8}{:<8}{:<8}{}",
            "edge", "origin", "dest", "next", "prev", "twin", "face"
        )?;
        for (_, he) in &self.half_edges {
            let dest = self
                .half_edges
                .get(he.twin)
                .map_or("?", |t| v_name(t.origin));
            writeln!(
                f,
                "{:<8}{:<8}{:<8}{:<8}{:<8}{:<8}{}",
                he.name,
                v_name(he.origin),
                dest,
                he_name(he.next),
                he_name(he.prev),
                he_name(he.twin),
                f_name(he.face),
            )?;
        }
        for (_, face) in &self.faces {
            let names: Vec<&str> = face.boundary.iter().map(|&h| he_name(h)).collect();
            writeln!(f, "{} [{}]: {}", face.name, face.kind, names.join(" "))?;
        }
        Ok(())
    }
}
