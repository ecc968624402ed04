//! Error types for rust_glc

use std::fmt;

/// Main error type for the planner and its collaborators
#[derive(Debug)]
pub enum GlcError {
    /// Invalid parameter
    InvalidParameter(String),
    /// A vector does not have the dimension declared in the parameters
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
    /// Planning failed or the planner was queried in the wrong state
    PlanningError(String),
    /// Spline construction or concatenation failed
    TrajectoryError(String),
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for GlcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlcError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            GlcError::DimensionMismatch { what, expected, actual } => write!(
                f,
                "Dimension mismatch: {} has dimension {}, expected {}",
                what, actual, expected
            ),
            GlcError::PlanningError(msg) => write!(f, "Planning error: {}", msg),
            GlcError::TrajectoryError(msg) => write!(f, "Trajectory error: {}", msg),
            GlcError::IoError(e) => write!(f, "I/O error: {}", e),
            GlcError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for GlcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlcError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlcError {
    fn from(e: std::io::Error) -> Self {
        GlcError::IoError(e)
    }
}

/// Result type alias for planner operations
pub type GlcResult<T> = Result<T, GlcError>;
