//! Core type definitions for the kernel classifier

use crate::core::{ClassifierError, Result};
use crate::kernel::KernelKind;
use serde::Serialize;

/// Number of passes over the training set
pub const DEFAULT_EPOCHS: usize = 100;

/// Support indices are collected every this many epochs
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 10;

/// Map a raw decision value to a class label: 1.0 at or above 1, else 0.0
pub fn threshold(decision_value: f64) -> f64 {
    if decision_value >= 1.0 {
        1.0
    } else {
        0.0
    }
}

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Thresholded label (1.0 or 0.0)
    pub label: f64,
    /// Raw decision function value before thresholding
    pub decision_value: f64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: f64, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Distance of the decision value from the threshold
    pub fn margin(&self) -> f64 {
        self.decision_value - 1.0
    }
}

/// Dense dataset: N feature rows of dimension D paired with N labels
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl Dataset {
    /// Create a dataset, checking that rows share one dimension and that
    /// every row has a label
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self> {
        check_labeled(&features, &labels)?;
        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of features per row
    pub fn dim(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }
}

/// The four arrays produced by a holdout split
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train_features: Vec<Vec<f64>>,
    pub test_features: Vec<Vec<f64>>,
    pub train_labels: Vec<f64>,
    pub test_labels: Vec<f64>,
}

impl TrainTestSplit {
    pub fn into_tuple(self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<f64>, Vec<f64>) {
        (
            self.train_features,
            self.test_features,
            self.train_labels,
            self.test_labels,
        )
    }
}

/// Configuration for the kernel classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierConfig {
    /// Active kernel family
    pub kernel: KernelKind,
    /// Polynomial degree
    pub degree: u32,
    /// Scale constant: polynomial offset and coefficient update target
    pub c: f64,
    /// RBF width / sigmoid slope
    pub gamma: f64,
    /// Sigmoid offset
    pub coef0: f64,
    /// Fixed number of training epochs
    pub epochs: usize,
    /// Epoch spacing of support index checkpoints
    pub checkpoint_interval: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kernel: KernelKind::Polynomial,
            degree: 3,
            c: 1.0,
            gamma: 0.01,
            coef0: 0.0,
            epochs: DEFAULT_EPOCHS,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }
}

impl ClassifierConfig {
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    pub fn with_degree(mut self, degree: u32) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_coef0(mut self, coef0: f64) -> Self {
        self.coef0 = coef0;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    /// Reject parameters the training loop cannot work with
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("C", self.c), ("gamma", self.gamma), ("coef0", self.coef0)] {
            if !value.is_finite() {
                return Err(ClassifierError::InvalidInput(format!(
                    "{name} must be finite, got: {value}"
                )));
            }
        }
        if self.degree == 0 {
            return Err(ClassifierError::InvalidInput(
                "Polynomial degree must be positive".to_string(),
            ));
        }
        if i32::try_from(self.degree).is_err() {
            return Err(ClassifierError::InvalidInput(format!(
                "Polynomial degree too large: {}",
                self.degree
            )));
        }
        if self.epochs == 0 {
            return Err(ClassifierError::InvalidInput(
                "Epoch count must be positive".to_string(),
            ));
        }
        if self.checkpoint_interval == 0 {
            return Err(ClassifierError::InvalidInput(
                "Checkpoint interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Check that a feature matrix is non-empty and rectangular, returning its
/// row dimension
pub(crate) fn check_matrix(features: &[Vec<f64>]) -> Result<usize> {
    let first = features.first().ok_or(ClassifierError::EmptyDataset)?;
    let dim = first.len();
    if dim == 0 {
        return Err(ClassifierError::InvalidInput(
            "Feature rows must have at least one column".to_string(),
        ));
    }
    for row in features {
        if row.len() != dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: dim,
                actual: row.len(),
            });
        }
    }
    Ok(dim)
}

/// Check a feature matrix together with its label vector
pub(crate) fn check_labeled(features: &[Vec<f64>], labels: &[f64]) -> Result<usize> {
    let dim = check_matrix(features)?;
    if labels.len() != features.len() {
        return Err(ClassifierError::InvalidInput(format!(
            "Label count {} does not match row count {}",
            labels.len(),
            features.len()
        )));
    }
    Ok(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.0, 1.0])
            .expect("valid dataset");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dim(), 2);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_dataset_rejects_ragged_rows() {
        let result = Dataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![0.0, 1.0]);
        assert!(matches!(
            result,
            Err(ClassifierError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_dataset_rejects_label_count() {
        let result = Dataset::new(vec![vec![1.0], vec![3.0]], vec![0.0]);
        assert!(matches!(result, Err(ClassifierError::InvalidInput(_))));
    }

    #[test]
    fn test_dataset_rejects_empty() {
        let result = Dataset::new(Vec::new(), Vec::new());
        assert!(matches!(result, Err(ClassifierError::EmptyDataset)));
    }

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.kernel, KernelKind::Polynomial);
        assert_eq!(config.degree, 3);
        assert_eq!(config.c, 1.0);
        assert_eq!(config.gamma, 0.01);
        assert_eq!(config.coef0, 0.0);
        assert_eq!(config.epochs, 100);
        assert_eq!(config.checkpoint_interval, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(ClassifierConfig::default().with_degree(0).validate().is_err());
        assert!(ClassifierConfig::default()
            .with_degree(i32::MAX as u32)
            .validate()
            .is_ok());
        assert!(ClassifierConfig::default()
            .with_degree(i32::MAX as u32 + 1)
            .validate()
            .unwrap_err()
            .is_invalid_input());
        assert!(ClassifierConfig::default().with_c(f64::NAN).validate().is_err());
        assert!(ClassifierConfig::default()
            .with_gamma(f64::INFINITY)
            .validate()
            .is_err());
        assert!(ClassifierConfig::default().with_epochs(0).validate().is_err());
        assert!(ClassifierConfig::default()
            .with_checkpoint_interval(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_threshold() {
        assert_eq!(threshold(1.0), 1.0);
        assert_eq!(threshold(7.5), 1.0);
        assert_eq!(threshold(0.999), 0.0);
        assert_eq!(threshold(-3.0), 0.0);
    }

    #[test]
    fn test_prediction_margin() {
        let pred = Prediction::new(1.0, 2.5);
        assert_eq!(pred.margin(), 1.5);
    }
}
