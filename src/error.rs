use thiserror::Error;

/// Top-level error type for the Lathis cutting kernel.
#[derive(Debug, Error)]
pub enum LathisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate profile: {0}")]
    Degenerate(String),
}

/// Violations of the cut engine's probe invariants.
///
/// Any of these means the profile would no longer be a simple polygon if
/// the splice went ahead. The profile is left untouched; only the tool
/// position has moved.
#[derive(Debug, Error)]
pub enum InvariantError {
    #[error("clearance probe produced {0} boundary crossings, expected exactly 1")]
    ClearanceProbeCrossings(usize),

    #[error("travel segment crossed the boundary twice on the same edge or at the same point")]
    CoincidentCrossings,

    #[error("travel segment produced {0} boundary crossings, expected at most 2")]
    TooManyCrossings(usize),
}

/// Errors related to lathe tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`LathisError`].
pub type Result<T> = std::result::Result<T, LathisError>;
