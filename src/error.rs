use thiserror::Error;

/// Top-level error type for the Monotri triangulation engine.
#[derive(Debug, Error)]
pub enum MonotriError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building a subdivision from a point ring.
#[derive(Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("a polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} is equal to its successor")]
    ConsecutiveDuplicate { index: usize },

    #[error("points {first} and {second} are equal")]
    DuplicatePoint { first: usize, second: usize },

    #[error("degenerate polygon: all points are collinear")]
    Degenerate,
}

/// Errors related to the half-edge structure.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("{from} and {to} do not share an exterior face")]
    InvalidDiagonal { from: String, to: String },

    #[error("broken invariant: {0}")]
    BrokenInvariant(String),
}

/// Errors raised by the sweep, triangulation and colouring operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("vertices {first} and {second} cannot be ordered along the sweep")]
    Comparison { first: String, second: String },

    #[error("face {0} is not monotone")]
    NotMonotone(String),

    #[error("face {0} is not a triangle")]
    NotTriangulated(String),
}

/// Convenience type alias for results using [`MonotriError`].
pub type Result<T> = std::result::Result<T, MonotriError>;
