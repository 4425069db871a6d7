use thiserror::Error;

/// Top-level error type for the geoprim geometry kernel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by vector arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot normalize vector of magnitude {magnitude}")]
    ZeroVector { magnitude: f64 },

    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised when a primitive is built from invalid input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("plane normal is zero-length")]
    ZeroNormal,

    #[error("points are collinear and do not define a plane")]
    CollinearPoints,
}

/// Errors raised by operations that need a non-empty input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
