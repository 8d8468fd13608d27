//! Configuration-time kernel selection
//!
//! A classifier runs with exactly one kernel family. `KernelKind` names the
//! family in configuration; `KernelFunction` is the concrete kernel built
//! from it once, before training starts.

use crate::core::ClassifierConfig;
use crate::kernel::{Kernel, PolynomialKernel, RBFKernel, SigmoidKernel};
use serde::Serialize;
use std::fmt;

/// Kernel family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    /// (C + <x, y>)^degree
    #[default]
    Polynomial,
    /// exp(-gamma * ||x - y||²)
    Rbf,
    /// tanh(gamma * <x, y> + coef0)
    Sigmoid,
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Polynomial => "polynomial",
            Self::Rbf => "rbf",
            Self::Sigmoid => "sigmoid",
        };
        f.write_str(name)
    }
}

/// The active kernel of a classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelFunction {
    Polynomial(PolynomialKernel),
    Rbf(RBFKernel),
    Sigmoid(SigmoidKernel),
}

impl KernelFunction {
    /// Build the kernel named by `config.kernel` from the config's parameters
    pub fn from_config(config: &ClassifierConfig) -> Self {
        match config.kernel {
            KernelKind::Polynomial => {
                Self::Polynomial(PolynomialKernel::new(config.degree, config.c))
            }
            KernelKind::Rbf => Self::Rbf(RBFKernel::new(config.gamma)),
            KernelKind::Sigmoid => Self::Sigmoid(SigmoidKernel::new(config.gamma, config.coef0)),
        }
    }

    pub fn kind(&self) -> KernelKind {
        match self {
            Self::Polynomial(_) => KernelKind::Polynomial,
            Self::Rbf(_) => KernelKind::Rbf,
            Self::Sigmoid(_) => KernelKind::Sigmoid,
        }
    }
}

impl Kernel for KernelFunction {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        match self {
            Self::Polynomial(kernel) => kernel.compute(x, y),
            Self::Rbf(kernel) => kernel.compute(x, y),
            Self::Sigmoid(kernel) => kernel.compute(x, y),
        }
    }
}
