use thiserror::Error;

/// Failure classes of the toolkit.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// An input did not satisfy a precondition (e.g. too few points).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A geometric input collapsed to a degenerate shape that would divide
    /// by zero (e.g. a zero-length line).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A bundled resource could not be read.
    #[error("resource load failed: {0}")]
    ResourceLoad(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
