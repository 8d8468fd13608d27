//! Sigmoid (Tanh) Kernel Implementation
//!
//! The Sigmoid kernel, also known as the Hyperbolic Tangent kernel, is defined as:
//! K(x, y) = tanh(γ * <x, y> + r)
//!
//! where:
//! - γ (gamma) is the scaling parameter for the dot product
//! - r (coef0) is the bias/offset parameter
//!
//! Output is bounded to [-1, 1]. The kernel is not positive semi-definite
//! for every parameter choice.

use crate::kernel::traits::{dot_product, Kernel};

/// Sigmoid (Hyperbolic Tangent) kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidKernel {
    /// Scaling parameter for the dot product
    pub gamma: f64,
    /// Bias/offset parameter (can be positive, negative, or zero)
    pub coef0: f64,
}

impl SigmoidKernel {
    /// Creates a new Sigmoid kernel
    ///
    /// # Examples
    /// ```
    /// use ksvm::kernel::SigmoidKernel;
    ///
    /// let kernel = SigmoidKernel::new(0.01, 0.0);
    /// assert_eq!(kernel.gamma, 0.01);
    /// assert_eq!(kernel.coef0, 0.0);
    /// ```
    pub fn new(gamma: f64, coef0: f64) -> Self {
        Self { gamma, coef0 }
    }
}

impl Kernel for SigmoidKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        (self.gamma * dot_product(x, y) + self.coef0).tanh()
    }
}
