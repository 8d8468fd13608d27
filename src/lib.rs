//! Minimal kernel-based binary classifier
//!
//! Fits one coefficient per training sample with a fixed-epoch dual update,
//! estimates a bias from the samples that stayed active, and predicts by
//! thresholding a weighted kernel sum over the whole training set.

pub mod api;
pub mod classifier;
pub mod core;
pub mod data;
pub mod kernel;
pub mod solver;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::{holdout_evaluation, EvaluationOptions, EvaluationReport};
pub use crate::classifier::KernelClassifier;
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{ClassifierError, Result};
pub use crate::data::CsvDataset;
pub use crate::kernel::{Kernel, KernelFunction, KernelKind};
pub use crate::utils::{accuracy, scale_features, scale_labels, split, EvaluationMetrics};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
