//! Kernel trait definition

use crate::core::{ClassifierError, Result};

/// Kernel function trait
///
/// Every kernel maps two feature vectors of the same length to a scalar
/// similarity. `compute` assumes the lengths already match; `evaluate`
/// checks them first.
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;

    /// Compute K(x, y), rejecting vectors of different lengths
    fn evaluate(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.len() != y.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        Ok(self.compute(x, y))
    }
}

/// Dot product of two dense vectors
pub fn dot_product(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// Squared Euclidean distance ||x - y||²
pub fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}
