//! Numeric types and small vector helpers used throughout rust_glc

use nalgebra::DVector;

use crate::common::error::{GlcError, GlcResult};

/// Real-valued vector used for states and control samples.
///
/// The dimension is fixed per problem by [`Parameters`](crate::path_planning::glc::Parameters).
pub type StateVector = DVector<f64>;

/// Square of a real number
pub fn sqr(x: f64) -> f64 {
    x * x
}

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// A single sample collapses to `start`; zero samples yield an empty vector.
pub fn linear_space(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Reject `vector` unless it has exactly `expected` components
pub fn check_dimension(what: &str, expected: usize, vector: &StateVector) -> GlcResult<()> {
    if vector.len() != expected {
        return Err(GlcError::DimensionMismatch {
            what: what.to_string(),
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

/// True if every component is finite
pub fn is_finite(vector: &StateVector) -> bool {
    vector.iter().all(|v| v.is_finite())
}
