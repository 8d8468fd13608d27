//! Kernel classifier: fitted state, training and prediction
//!
//! `KernelClassifier` starts untrained. `train` fits coefficients with the
//! [`DualSolver`](crate::solver::DualSolver) and keeps a copy of the
//! training rows; afterwards the classifier is read-only and predicts with
//!
//! ```text
//! result = b + Σ_i α_i * y_i * K(x_i, x)
//! ```
//!
//! thresholded at 1. α already carries the label sign from training, so the
//! extra y_i factor squares it.

use crate::core::{
    check_labeled, threshold, BinaryClassifier, ClassifierConfig, ClassifierError, Dataset,
    Result,
};
use crate::kernel::{Kernel, KernelFunction, KernelKind};
use crate::solver::DualSolver;
use log::{info, warn};

/// State populated by a successful `train` call
#[derive(Debug, Clone)]
struct FittedState {
    alpha: Vec<f64>,
    bias: f64,
    support_indices: Vec<usize>,
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
    epochs: usize,
}

/// Binary classifier over a fixed training set
#[derive(Debug, Clone)]
pub struct KernelClassifier {
    config: ClassifierConfig,
    kernel: KernelFunction,
    state: Option<FittedState>,
}

impl KernelClassifier {
    /// Untrained classifier with the polynomial kernel
    pub fn new(degree: u32, c: f64, gamma: f64, coef0: f64) -> Self {
        Self::with_config(
            ClassifierConfig::default()
                .with_degree(degree)
                .with_c(c)
                .with_gamma(gamma)
                .with_coef0(coef0),
        )
    }

    /// Untrained classifier with a full configuration
    pub fn with_config(config: ClassifierConfig) -> Self {
        let kernel = KernelFunction::from_config(&config);
        Self {
            config,
            kernel,
            state: None,
        }
    }

    /// Switch kernel family; any fitted state is discarded
    pub fn with_kernel(mut self, kind: KernelKind) -> Self {
        self.config.kernel = kind;
        self.kernel = KernelFunction::from_config(&self.config);
        self.state = None;
        self
    }

    /// Fit coefficients and bias on the given training set
    ///
    /// On error the classifier keeps whatever state it had before the call.
    pub fn train(&mut self, features: &[Vec<f64>], labels: &[f64]) -> Result<()> {
        self.config.validate()?;
        check_labeled(features, labels)?;
        if labels.iter().any(|y| !y.is_finite()) {
            return Err(ClassifierError::InvalidInput(
                "labels must be finite".to_string(),
            ));
        }
        if labels.iter().any(|&y| y != 1.0 && y != -1.0) {
            warn!("Labels outside {{-1, +1}}: the margin update assumes signed labels");
        }

        let solver = DualSolver::new(
            &self.kernel,
            self.config.c,
            self.config.epochs,
            self.config.checkpoint_interval,
        );
        let result = solver.solve(features, labels)?;

        info!(
            "Trained {} kernel on {} samples: {} support entries, bias {:.6}",
            self.kernel.kind(),
            features.len(),
            result.support_indices.len(),
            result.bias
        );

        self.state = Some(FittedState {
            alpha: result.alpha,
            bias: result.bias,
            support_indices: result.support_indices,
            features: features.to_vec(),
            labels: labels.to_vec(),
            epochs: result.epochs,
        });
        Ok(())
    }

    /// Train on a validated dataset
    pub fn train_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        self.train(dataset.features(), dataset.labels())
    }

    fn fitted(&self) -> Result<&FittedState> {
        self.state.as_ref().ok_or(ClassifierError::ModelNotTrained)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn kernel(&self) -> &KernelFunction {
        &self.kernel
    }

    pub fn is_trained(&self) -> bool {
        self.state.is_some()
    }

    /// Coefficients with the label sign folded in
    pub fn alpha(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.alpha.as_slice())
    }

    /// Support indices in checkpoint order, duplicates kept
    pub fn support_indices(&self) -> Option<&[usize]> {
        self.state.as_ref().map(|s| s.support_indices.as_slice())
    }

    pub fn n_training_samples(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.labels.len())
    }

    pub fn epochs_run(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.epochs)
    }
}

impl BinaryClassifier for KernelClassifier {
    fn decision_function(&self, features: &[f64]) -> Result<f64> {
        let state = self.fitted()?;
        let dim = state.features.first().map_or(0, Vec::len);
        if features.len() != dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: dim,
                actual: features.len(),
            });
        }

        let mut result = 0.0;
        for ((x_i, &alpha_i), &y_i) in state.features.iter().zip(&state.alpha).zip(&state.labels)
        {
            result += alpha_i * y_i * self.kernel.compute(x_i, features);
        }
        result += state.bias;
        Ok(result)
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        self.decision_function(features).map(threshold)
    }

    fn bias(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.bias)
    }
}
