//! Numeric support routines: standardization, holdout splitting, scoring

/// Feature scaling utilities
pub mod scaling {
    use crate::core::{check_matrix, ClassifierError, Result};

    /// Mean and sample standard deviation of one column
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ColumnStats {
        pub mean: f64,
        pub std: f64,
    }

    impl ColumnStats {
        /// Compute mean and sample (n - 1) standard deviation
        pub fn from_values(values: &[f64]) -> Self {
            let n = values.len() as f64;
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            Self {
                mean,
                std: variance.sqrt(),
            }
        }

        /// True when dividing by `std` would blow up
        pub fn is_degenerate(&self) -> bool {
            !self.std.is_finite() || self.std == 0.0
        }

        /// (value - mean) / std
        pub fn standardize(&self, value: f64) -> f64 {
            (value - self.mean) / self.std
        }
    }

    /// Per-column statistics of a feature matrix
    ///
    /// Fails with `NumericDegeneracy` on the first column whose values are
    /// all equal or whose standard deviation is undefined, as with a single row.
    pub fn column_stats(features: &[Vec<f64>]) -> Result<Vec<ColumnStats>> {
        let dim = check_matrix(features)?;
        check_finite(features.iter().flatten().copied())?;

        (0..dim)
            .map(|column| {
                let values: Vec<f64> = features.iter().map(|row| row[column]).collect();
                checked_stats(&values, column)
            })
            .collect()
    }

    /// Standardize every column of `features` to zero mean and unit sample
    /// standard deviation, returning a new matrix
    pub fn scale_features(features: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let stats = column_stats(features)?;
        Ok(standardize_with(features, &stats))
    }

    /// Standardize `features` with statistics computed elsewhere
    ///
    /// Used to put query rows on the scale of the training rows. Every row must
    /// have one entry per column in `stats`.
    pub fn scale_with_stats(
        features: &[Vec<f64>],
        stats: &[ColumnStats],
    ) -> Result<Vec<Vec<f64>>> {
        let dim = check_matrix(features)?;
        if dim != stats.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: stats.len(),
                actual: dim,
            });
        }
        check_finite(features.iter().flatten().copied())?;
        Ok(standardize_with(features, stats))
    }

    fn standardize_with(features: &[Vec<f64>], stats: &[ColumnStats]) -> Vec<Vec<f64>> {
        features
            .iter()
            .map(|row| {
                row.iter()
                    .zip(stats)
                    .map(|(&value, column)| column.standardize(value))
                    .collect()
            })
            .collect()
    }

    /// Standardize a label vector the same way as a feature column
    pub fn scale_labels(labels: &[f64]) -> Result<Vec<f64>> {
        if labels.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        check_finite(labels.iter().copied())?;

        let stats = checked_stats(labels, 0)?;
        Ok(labels.iter().map(|&y| stats.standardize(y)).collect())
    }

    // Constant columns are caught by value, since rounding can leave a tiny
    // non-zero std behind (e.g. [0.1, 0.1, 0.1])
    fn checked_stats(values: &[f64], column: usize) -> Result<ColumnStats> {
        let stats = ColumnStats::from_values(values);
        let constant = values.windows(2).all(|pair| pair[0] == pair[1]);
        if constant || stats.is_degenerate() {
            Err(ClassifierError::NumericDegeneracy { column })
        } else {
            Ok(stats)
        }
    }

    fn check_finite(mut values: impl Iterator<Item = f64>) -> Result<()> {
        match values.find(|v| !v.is_finite()) {
            Some(value) => Err(ClassifierError::InvalidInput(format!(
                "non-finite value in input: {value}"
            ))),
            None => Ok(()),
        }
    }
}

/// Deterministic train/test partitioning
pub mod split {
    use crate::core::{check_labeled, ClassifierError, Result, TrainTestSplit};
    use log::{debug, warn};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Pseudo-random permutation of 0..n, fixed by `seed`
    pub fn permutation(n: usize, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rng);
        indices
    }

    /// Number of training rows for `n` rows and a holdout `ratio`
    pub fn train_size(n: usize, ratio: f64) -> usize {
        (n as f64 * (1.0 - ratio)).round() as usize
    }

    /// Partition rows into training and test sets
    ///
    /// The first `round(N * (1 - ratio))` permuted rows train, the rest test,
    /// both in permuted order. The same inputs and seed always give the same
    /// partition.
    pub fn split(
        features: &[Vec<f64>],
        labels: &[f64],
        ratio: f64,
        seed: u64,
    ) -> Result<TrainTestSplit> {
        if !(0.0..1.0).contains(&ratio) {
            return Err(ClassifierError::InvalidInput(format!(
                "Holdout ratio must be in [0, 1), got: {ratio}"
            )));
        }
        check_labeled(features, labels)?;

        let n = features.len();
        let n_train = train_size(n, ratio);
        let indices = permutation(n, seed);
        let (train_indices, test_indices) = indices.split_at(n_train);

        debug!(
            "Split {n} rows into {} train / {} test (seed {seed})",
            train_indices.len(),
            test_indices.len()
        );
        if test_indices.is_empty() {
            warn!("Holdout ratio {ratio} leaves no test rows");
        }

        let gather_rows = |idx: &[usize]| -> Vec<Vec<f64>> {
            idx.iter().map(|&i| features[i].clone()).collect()
        };
        let gather_labels =
            |idx: &[usize]| -> Vec<f64> { idx.iter().map(|&i| labels[i]).collect() };

        Ok(TrainTestSplit {
            train_features: gather_rows(train_indices),
            test_features: gather_rows(test_indices),
            train_labels: gather_labels(train_indices),
            test_labels: gather_labels(test_indices),
        })
    }
}

/// Prediction scoring
pub mod metrics {
    use crate::core::{ClassifierError, Result};
    use serde::Serialize;

    /// Percentage of positions where `predicted` equals `actual` exactly
    pub fn accuracy(predicted: &[f64], actual: &[f64]) -> Result<f64> {
        check_lengths(predicted, actual)?;
        let correct = predicted
            .iter()
            .zip(actual)
            .filter(|(pred, act)| pred == act)
            .count();
        Ok(correct as f64 / predicted.len() as f64 * 100.0)
    }

    /// Confusion counts with 1.0 as the positive class
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct EvaluationMetrics {
        pub true_positives: usize,
        pub true_negatives: usize,
        pub false_positives: usize,
        pub false_negatives: usize,
    }

    impl EvaluationMetrics {
        pub fn from_predictions(predicted: &[f64], actual: &[f64]) -> Result<Self> {
            check_lengths(predicted, actual)?;

            let mut metrics = Self {
                true_positives: 0,
                true_negatives: 0,
                false_positives: 0,
                false_negatives: 0,
            };
            for (&pred, &act) in predicted.iter().zip(actual) {
                match (pred == 1.0, act == 1.0) {
                    (true, true) => metrics.true_positives += 1,
                    (false, false) => metrics.true_negatives += 1,
                    (true, false) => metrics.false_positives += 1,
                    (false, true) => metrics.false_negatives += 1,
                }
            }
            Ok(metrics)
        }

        pub fn total(&self) -> usize {
            self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
        }

        /// Calculate accuracy as a percentage: 100 * (TP + TN) / total
        pub fn accuracy(&self) -> f64 {
            ratio(self.true_positives + self.true_negatives, self.total()) * 100.0
        }

        /// Calculate precision: TP / (TP + FP)
        pub fn precision(&self) -> f64 {
            ratio(self.true_positives, self.true_positives + self.false_positives)
        }

        /// Calculate recall (sensitivity): TP / (TP + FN)
        pub fn recall(&self) -> f64 {
            ratio(self.true_positives, self.true_positives + self.false_negatives)
        }

        /// Calculate F1 score: 2 * (precision * recall) / (precision + recall)
        pub fn f1_score(&self) -> f64 {
            let p = self.precision();
            let r = self.recall();
            if p + r == 0.0 {
                0.0
            } else {
                2.0 * (p * r) / (p + r)
            }
        }

        /// Calculate specificity: TN / (TN + FP)
        pub fn specificity(&self) -> f64 {
            ratio(self.true_negatives, self.true_negatives + self.false_positives)
        }
    }

    fn ratio(numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        }
    }

    fn check_lengths(predicted: &[f64], actual: &[f64]) -> Result<()> {
        if predicted.len() != actual.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: predicted.len(),
                actual: actual.len(),
            });
        }
        if predicted.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        Ok(())
    }
}

pub use self::metrics::{accuracy, EvaluationMetrics};
pub use self::scaling::{scale_features, scale_labels};
pub use self::split::split;
