//! Three-colouring of a triangulated polygon.
//!
//! The triangles of a triangulated simple polygon form a tree across their
//! shared diagonals, so painting one triangle and then walking that tree
//! leaves exactly one free colour for every newly reached vertex.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::topology::{Color, FaceId, FaceKind, Subdivision, VertexId};

/// Paints every vertex so that each EXTERIOR triangle has all three colours.
///
/// Colours are written to the vertices' paint tags and also returned.
#[derive(Default)]
pub struct ThreeColoring;

impl ThreeColoring {
    /// Creates a new `ThreeColoring` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the colouring.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NotTriangulated`] if an EXTERIOR face is not
    /// a triangle.
    pub fn execute(&self, sub: &mut Subdivision) -> Result<Coloring> {
        let faces = sub.exterior_faces();
        for &f in &faces {
            let face = sub.face(f)?;
            if face.boundary.len() != 3 {
                return Err(OperationError::NotTriangulated(face.name.clone()).into());
            }
        }

        let mut colors: HashMap<VertexId, Color> = HashMap::new();
        let mut visited: HashSet<FaceId> = HashSet::new();
        for &seed in &faces {
            if !visited.insert(seed) {
                continue;
            }
            paint_triangle(sub, seed, &mut colors)?;
            let mut queue = VecDeque::from([seed]);
            while let Some(f) = queue.pop_front() {
                for &h in &sub.face(f)?.boundary {
                    let twin = sub.half_edge(h)?.twin;
                    let g = sub.half_edge(twin)?.face;
                    if sub.face(g)?.kind != FaceKind::Exterior || !visited.insert(g) {
                        continue;
                    }
                    paint_triangle(sub, g, &mut colors)?;
                    queue.push_back(g);
                }
            }
        }

        let mut assignment = Vec::with_capacity(colors.len());
        let ids: Vec<VertexId> = sub.vertices().map(|(id, _)| id).collect();
        for id in ids {
            if let Some(&c) = colors.get(&id) {
                sub.vertex_mut(id)?.tag = Some(c);
                assignment.push((id, c));
            }
        }
        let coloring = Coloring { assignment };
        debug!(
            red = coloring.count(Color::Red),
            green = coloring.count(Color::Green),
            blue = coloring.count(Color::Blue),
            "three-coloured"
        );
        Ok(coloring)
    }
}

/// Gives each unpainted corner of a triangle a colour its corners lack.
fn paint_triangle(
    sub: &Subdivision,
    face: FaceId,
    colors: &mut HashMap<VertexId, Color>,
) -> Result<()> {
    let corners = sub.face_vertices(face)?;
    let mut used: Vec<Color> = corners.iter().filter_map(|v| colors.get(v).copied()).collect();
    for v in corners {
        if colors.contains_key(&v) {
            continue;
        }
        if let Some(&c) = Color::ALL.iter().find(|c| !used.contains(c)) {
            colors.insert(v, c);
            used.push(c);
        }
    }
    Ok(())
}

/// Result of [`ThreeColoring`].
#[derive(Debug, Clone)]
pub struct Coloring {
    assignment: Vec<(VertexId, Color)>,
}

impl Coloring {
    /// Every painted vertex with its colour, in vertex creation order.
    #[must_use]
    pub fn assignment(&self) -> &[(VertexId, Color)] {
        &self.assignment
    }

    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<Color> {
        self.assignment
            .iter()
            .find(|(v, _)| *v == vertex)
            .map(|(_, c)| *c)
    }

    /// Number of vertices painted `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.assignment.iter().filter(|(_, c)| *c == color).count()
    }

    /// Vertices of the least used colour.
    ///
    /// Every triangle has one corner of each colour, so these vertices see
    /// the whole polygon; there are at most `n / 3` of them.
    #[must_use]
    pub fn guards(&self) -> Vec<VertexId> {
        let Some(rarest) = Color::ALL.into_iter().min_by_key(|&c| self.count(c)) else {
            return Vec::new();
        };
        self.assignment
            .iter()
            .filter(|(_, c)| *c == rarest)
            .map(|(v, _)| *v)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MonotriError;
    use crate::math::Point2;
    use crate::operations::Triangulate;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_rainbow(sub: &Subdivision) {
        for f in sub.exterior_faces() {
            let tags: HashSet<Color> = sub
                .face_vertices(f)
                .unwrap()
                .into_iter()
                .map(|v| sub.vertex(v).unwrap().tag.unwrap())
                .collect();
            assert_eq!(tags.len(), 3, "face {}", sub.face(f).unwrap().name);
        }
    }

    #[test]
    fn hexagon_triangles_get_all_colours() {
        let mut sub = Subdivision::build(
            &[p(5.0, 1.0), p(8.0, 3.0), p(5.0, -2.0), p(2.0, 2.0), p(-1.0, -1.0), p(1.0, 5.0)],
            "H",
        )
        .unwrap();
        Triangulate::new().execute(&mut sub).unwrap();
        let coloring = ThreeColoring::new().execute(&mut sub).unwrap();
        assert_eq!(coloring.assignment().len(), 6);
        assert_rainbow(&sub);
        let guards = coloring.guards();
        assert!(!guards.is_empty() && guards.len() <= 2, "{guards:?}");
    }

    #[test]
    fn untriangulated_face_is_rejected() {
        let mut sub =
            Subdivision::build(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)], "S").unwrap();
        let err = ThreeColoring::new().execute(&mut sub).unwrap_err();
        assert!(matches!(
            err,
            MonotriError::Operation(OperationError::NotTriangulated(ref name)) if name == "S:F0"
        ));
    }

    #[test]
    fn color_lookup() {
        let mut sub = Subdivision::build(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)], "T").unwrap();
        let coloring = ThreeColoring::new().execute(&mut sub).unwrap();
        let (first, _) = sub.vertices().next().unwrap();
        assert_eq!(coloring.color_of(first), Some(Color::Red));
        assert_eq!(coloring.guards().len(), 1);
    }
}
