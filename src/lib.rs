//! Simple-polygon triangulation over a half-edge planar subdivision.
//!
//! A point ring becomes a [`Subdivision`]; a top-down sweep cuts it into
//! monotone pieces; each piece is triangulated with a chain-stack scan.
//! Every cut is committed as a diagonal that splits one face in two.
//!
//! ```
//! use monotri::math::Point2;
//!
//! let ring = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let sub = monotri::build_subdivision(&ring, "square")?;
//! let (sub, diagonals) = monotri::triangulate(sub)?;
//! assert_eq!(diagonals.len(), 1);
//! assert_eq!(sub.exterior_faces().len(), 2);
//! # Ok::<(), monotri::MonotriError>(())
//! ```

pub mod error;
pub mod math;
pub mod operations;
pub mod ordered_index;
pub mod topology;

pub use error::{MonotriError, Result};
pub use topology::{Diagonal, DiagonalOutcome, Subdivision};

use math::Point2;
use operations::{InsertDiagonals, MakeMonotone, Triangulate};

/// Builds the subdivision of a simple polygon.
///
/// # Errors
///
/// Returns a construction error for fewer than 3 points, repeated points or
/// a ring without area.
pub fn build_subdivision(points: &[Point2], name: &str) -> Result<Subdivision> {
    Subdivision::build(points, name)
}

/// Diagonals that cut every EXTERIOR face into monotone pieces.
///
/// # Errors
///
/// Returns an error if two vertices of a face coincide.
pub fn decompose(sub: &Subdivision) -> Result<Vec<Diagonal>> {
    MakeMonotone::new().execute(sub)
}

/// Fully triangulates the subdivision, returning it with every diagonal
/// inserted on the way.
///
/// # Errors
///
/// Returns an error if a diagonal cannot be spliced.
pub fn triangulate(mut sub: Subdivision) -> Result<(Subdivision, Vec<Diagonal>)> {
    let diagonals = Triangulate::new().execute(&mut sub)?;
    Ok((sub, diagonals))
}

/// Commits `diagonals` in order. Already present edges are skipped.
///
/// # Errors
///
/// Returns an error if a diagonal's endpoints share no EXTERIOR face.
pub fn insert_diagonals(mut sub: Subdivision, diagonals: &[Diagonal]) -> Result<Subdivision> {
    InsertDiagonals::new(diagonals.iter().copied()).execute(&mut sub)?;
    Ok(sub)
}
