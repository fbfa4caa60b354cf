use tracing::debug;

use crate::error::Result;
use crate::topology::{Diagonal, DiagonalOutcome, Subdivision};

/// Commits a batch of diagonals, one splice at a time.
///
/// Each splice finishes, including the retyping of the two faces it
/// touches, before the next diagonal is looked at.
pub struct InsertDiagonals {
    diagonals: Vec<Diagonal>,
}

impl InsertDiagonals {
    /// Creates a new `InsertDiagonals` operation.
    #[must_use]
    pub fn new(diagonals: impl IntoIterator<Item = Diagonal>) -> Self {
        Self {
            diagonals: diagonals.into_iter().collect(),
        }
    }

    /// Executes the insertion, returning one outcome per diagonal.
    ///
    /// # Errors
    ///
    /// Returns the first [`TopologyError::InvalidDiagonal`] met; diagonals
    /// before it stay committed.
    ///
    /// [`TopologyError::InvalidDiagonal`]: crate::error::TopologyError::InvalidDiagonal
    pub fn execute(&self, sub: &mut Subdivision) -> Result<Vec<DiagonalOutcome>> {
        let mut outcomes = Vec::with_capacity(self.diagonals.len());
        for d in &self.diagonals {
            outcomes.push(sub.add_diagonal(d.from, d.to)?);
        }
        debug!(
            requested = self.diagonals.len(),
            inserted = outcomes.iter().filter(|o| o.is_inserted()).count(),
            faces = sub.num_faces(),
            "diagonals committed"
        );
        Ok(outcomes)
    }
}
