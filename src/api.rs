//! End-to-end holdout evaluation
//!
//! Chains the pieces in their usual order: standardize the features, split
//! into train/test, train a classifier, predict the test rows and score
//! them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ksvm::api::{holdout_evaluation, EvaluationOptions};
//! use ksvm::CsvDataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = CsvDataset::from_file("diabetes.csv")?;
//! let report = holdout_evaluation(&dataset, &EvaluationOptions::default())?;
//! println!("Accuracy is: {}", report.accuracy);
//! # Ok(())
//! # }
//! ```

use crate::classifier::KernelClassifier;
use crate::core::{BinaryClassifier, ClassifierConfig, ClassifierError, Dataset, Result};
use crate::utils::scaling::{column_stats, scale_with_stats};
use crate::utils::{accuracy, scale_features, split, EvaluationMetrics};
use log::info;
use serde::Serialize;

/// Settings for one holdout run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOptions {
    /// Standardize feature columns before splitting
    pub scale_features: bool,
    /// Fraction of rows held out for testing
    pub test_ratio: f64,
    /// Seed for the row permutation
    pub seed: u64,
    /// Classifier settings
    pub classifier: ClassifierConfig,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            scale_features: true,
            test_ratio: 0.2,
            seed: 43,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl EvaluationOptions {
    pub fn with_scaling(mut self, scale_features: bool) -> Self {
        self.scale_features = scale_features;
        self
    }

    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }
}

/// Outcome of a holdout run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub n_train: usize,
    pub n_test: usize,
    /// Percentage of test rows predicted correctly
    pub accuracy: f64,
    pub metrics: EvaluationMetrics,
    pub bias: f64,
    /// Support index entries, repetitions counted
    pub n_support_entries: usize,
    pub options: EvaluationOptions,
}

/// Scale, split, train, predict and score one dataset
pub fn holdout_evaluation(dataset: &Dataset, options: &EvaluationOptions) -> Result<EvaluationReport> {
    let features = prepare_features(dataset.features(), options.scale_features)?;
    let parts = split(&features, dataset.labels(), options.test_ratio, options.seed)?;

    if parts.test_features.is_empty() {
        return Err(ClassifierError::InvalidInput(format!(
            "test ratio {} leaves no rows to evaluate",
            options.test_ratio
        )));
    }

    let mut classifier = KernelClassifier::with_config(options.classifier.clone());
    classifier.train(&parts.train_features, &parts.train_labels)?;

    let predicted = classifier.predict_batch(&parts.test_features)?;
    let score = accuracy(&predicted, &parts.test_labels)?;
    let metrics = EvaluationMetrics::from_predictions(&predicted, &parts.test_labels)?;

    info!(
        "Holdout accuracy {score:.2}% on {} test rows",
        parts.test_labels.len()
    );

    Ok(EvaluationReport {
        n_train: parts.train_labels.len(),
        n_test: parts.test_labels.len(),
        accuracy: score,
        metrics,
        bias: classifier.bias().unwrap_or_default(),
        n_support_entries: classifier.support_indices().map_or(0, <[usize]>::len),
        options: options.clone(),
    })
}

/// Train on all of `train` and predict every row of `query`
///
/// With `scale` set, both matrices are standardized with the column
/// statistics of the training rows, so each query row is classified on its
/// own regardless of how many rows `query` holds.
pub fn train_and_predict(
    train: &Dataset,
    query: &[Vec<f64>],
    config: &ClassifierConfig,
    scale: bool,
) -> Result<Vec<f64>> {
    let (train_features, query_features) = if scale {
        let stats = column_stats(train.features())?;
        (
            scale_with_stats(train.features(), &stats)?,
            scale_with_stats(query, &stats)?,
        )
    } else {
        (train.features().to_vec(), query.to_vec())
    };

    let mut classifier = KernelClassifier::with_config(config.clone());
    classifier.train(&train_features, train.labels())?;
    classifier.predict_batch(&query_features)
}

fn prepare_features(features: &[Vec<f64>], scale: bool) -> Result<Vec<Vec<f64>>> {
    if scale {
        scale_features(features)
    } else {
        Ok(features.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelKind;

    fn separable_dataset() -> Dataset {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for i in 0..10 {
            let t = i as f64 * 0.3;
            features.push(vec![1.0 + t, 0.5 + t * 0.5]);
            labels.push(1.0);
            features.push(vec![-1.0 - t, -0.5 - t * 0.5]);
            labels.push(0.0);
        }
        Dataset::new(features, labels).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = EvaluationOptions::default();
        assert!(options.scale_features);
        assert_eq!(options.test_ratio, 0.2);
        assert_eq!(options.seed, 43);
        assert_eq!(options.classifier, ClassifierConfig::default());
    }

    #[test]
    fn test_holdout_evaluation_report() {
        let dataset = separable_dataset();
        let report = holdout_evaluation(&dataset, &EvaluationOptions::default()).unwrap();

        assert_eq!(report.n_train, 16);
        assert_eq!(report.n_test, 4);
        assert_eq!(report.metrics.total(), 4);
        assert!((0.0..=100.0).contains(&report.accuracy));
        assert_eq!(report.accuracy, report.metrics.accuracy());
        assert!(report.bias.is_finite());
        assert!(report.n_support_entries > 0);
    }

    #[test]
    fn test_holdout_evaluation_is_reproducible() {
        let dataset = separable_dataset();
        let options = EvaluationOptions::default()
            .with_seed(7)
            .with_classifier(ClassifierConfig::default().with_kernel(KernelKind::Rbf));
        let first = holdout_evaluation(&dataset, &options).unwrap();
        let second = holdout_evaluation(&dataset, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_holdout_evaluation_without_test_rows() {
        let dataset = separable_dataset();
        let options = EvaluationOptions::default().with_test_ratio(0.0);
        let err = holdout_evaluation(&dataset, &options).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_holdout_evaluation_constant_column() {
        let dataset = Dataset::new(
            vec![vec![1.0, 2.0], vec![1.0, 3.0], vec![1.0, 4.0]],
            vec![0.0, 1.0, 1.0],
        )
        .unwrap();
        let err = holdout_evaluation(&dataset, &EvaluationOptions::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::NumericDegeneracy { column: 0 }));

        // Without scaling the constant column is harmless
        let options = EvaluationOptions::default()
            .with_scaling(false)
            .with_test_ratio(0.4);
        assert!(holdout_evaluation(&dataset, &options).is_ok());
    }

    #[test]
    fn test_train_and_predict() {
        let train = Dataset::new(vec![vec![1.0], vec![-1.0]], vec![1.0, -1.0]).unwrap();
        let config = ClassifierConfig::default().with_degree(1);
        let predictions =
            train_and_predict(&train, &[vec![1.0], vec![-1.0], vec![0.0]], &config, false)
                .unwrap();
        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|&p| p == 0.0 || p == 1.0));
    }

    #[test]
    fn test_train_and_predict_single_scaled_row() {
        let train = separable_dataset();
        let config = ClassifierConfig::default();

        let single = train_and_predict(&train, &[vec![2.0, 1.0]], &config, true).unwrap();
        assert_eq!(single.len(), 1);

        // A row's label does not depend on the other query rows
        let batch = train_and_predict(
            &train,
            &[vec![2.0, 1.0], vec![-40.0, 7.5], vec![100.0, -3.0]],
            &config,
            true,
        )
        .unwrap();
        assert_eq!(batch[0], single[0]);

        let err = train_and_predict(&train, &[vec![2.0]], &config, true).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
