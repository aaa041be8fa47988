use thiserror::Error;

/// Top-level error type for the segsect crate.
#[derive(Debug, Error)]
pub enum SegsectError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric values and computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFinite { x: f64, y: f64 },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("point set is empty")]
    EmptyPointSet,

    #[error("tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),
}

/// Errors related to queries built on top of the geometry.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`SegsectError`].
pub type Result<T> = std::result::Result<T, SegsectError>;
