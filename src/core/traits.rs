//! Core traits for the kernel classifier

use crate::core::{Prediction, Result};

/// A fitted binary classifier
pub trait BinaryClassifier {
    /// Raw decision value for a single feature vector
    fn decision_function(&self, features: &[f64]) -> Result<f64>;

    /// Predicted label (1.0 or 0.0) for a single feature vector
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Predict every row of a feature matrix
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Label and decision value together
    fn predict_detailed(&self, features: &[f64]) -> Result<Prediction> {
        let decision_value = self.decision_function(features)?;
        Ok(Prediction::new(
            crate::core::threshold(decision_value),
            decision_value,
        ))
    }

    /// Get the bias term
    fn bias(&self) -> Option<f64>;
}
