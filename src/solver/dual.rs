//! Fixed-epoch dual coefficient solver
//!
//! Runs a fixed number of passes over the training set. On each pass every
//! sample i looks at the running quantity f = <α, y> (which already reflects
//! the updates made earlier in the same pass) and, when y_i * f < 1, moves
//! α_i by C - y_i * f. Every `checkpoint_interval` epochs the indices with
//! α_i > 0 are appended to the support list; an index that stays positive
//! is recorded once per checkpoint.
//!
//! After the loop the label sign is folded into α and the bias is the mean,
//! over the support list with repetition, of y_i - <α, K_i>.

use crate::core::{ClassifierError, Result};
use crate::kernel::{dot_product, Kernel};
use crate::solver::SimilarityMatrix;
use log::debug;

/// Output of a training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingResult {
    /// Coefficients with the label sign folded in (α_i * y_i)
    pub alpha: Vec<f64>,
    /// Bias term (b)
    pub bias: f64,
    /// Support indices collected at checkpoints, duplicates kept
    pub support_indices: Vec<usize>,
    /// Number of epochs performed
    pub epochs: usize,
}

/// Solver for the fixed-epoch coefficient update
pub struct DualSolver<'k, K: Kernel + ?Sized> {
    kernel: &'k K,
    c: f64,
    epochs: usize,
    checkpoint_interval: usize,
}

impl<'k, K: Kernel + ?Sized> DualSolver<'k, K> {
    pub fn new(kernel: &'k K, c: f64, epochs: usize, checkpoint_interval: usize) -> Self {
        Self {
            kernel,
            c,
            epochs,
            checkpoint_interval,
        }
    }

    /// Train on `features` / `labels`
    ///
    /// The caller guarantees a non-empty rectangular matrix with one label
    /// per row and a positive checkpoint interval.
    pub fn solve(&self, features: &[Vec<f64>], labels: &[f64]) -> Result<TrainingResult> {
        let n = features.len();
        let gram = SimilarityMatrix::build(self.kernel, features);

        let mut alpha = vec![0.0; n];
        let mut support_indices = Vec::new();

        for epoch in 0..self.epochs {
            for i in 0..n {
                let f = dot_product(&alpha, labels);
                let margin = labels[i] * f;
                if margin < 1.0 {
                    alpha[i] += self.c - margin;
                }
            }

            if epoch % self.checkpoint_interval == 0 {
                support_indices.extend((0..n).filter(|&i| alpha[i] > 0.0));
                debug!(
                    "Epoch {epoch}: {} support entries recorded",
                    support_indices.len()
                );
            }
        }

        for (a, &y) in alpha.iter_mut().zip(labels) {
            *a *= y;
        }

        if alpha.iter().any(|a| !a.is_finite()) {
            return Err(ClassifierError::DegenerateTraining(
                "coefficients diverged to a non-finite value".to_string(),
            ));
        }

        let bias = compute_bias(&alpha, labels, &gram, &support_indices)?;

        Ok(TrainingResult {
            alpha,
            bias,
            support_indices,
            epochs: self.epochs,
        })
    }
}

/// Mean of y_i - <α, K_i> over the support list, repetitions counted
fn compute_bias(
    alpha: &[f64],
    labels: &[f64],
    gram: &SimilarityMatrix,
    support_indices: &[usize],
) -> Result<f64> {
    if support_indices.is_empty() {
        return Err(ClassifierError::DegenerateTraining(
            "no support vectors found".to_string(),
        ));
    }

    let mut sum = 0.0;
    for &i in support_indices {
        sum += labels[i] - dot_product(alpha, gram.row(i));
    }
    let bias = sum / support_indices.len() as f64;

    if !bias.is_finite() {
        return Err(ClassifierError::DegenerateTraining(format!(
            "bias is not finite: {bias}"
        )));
    }
    Ok(bias)
}
