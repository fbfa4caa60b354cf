pub mod coloring;
pub mod decompose;
pub mod insert;
pub mod query;
mod ring;
pub mod triangulate;

pub use coloring::{Coloring, ThreeColoring};
pub use decompose::{Helper, MakeMonotone, VertexKind};
pub use insert::InsertDiagonals;
pub use triangulate::{Triangulate, TriangulateMonotone};

use crate::math::{SWEEP_TILT, TOLERANCE};

/// Numeric settings shared by the sweep-based operations.
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Zero band for orientation tests (as a sine) and point equality (as a
    /// distance).
    pub tolerance: f64,
    /// Slope of the synthetic sweep line, so horizontal edges still cross it.
    pub tilt: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            tilt: SWEEP_TILT,
        }
    }
}
