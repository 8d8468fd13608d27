//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) controls the kernel width.

use crate::kernel::traits::{squared_distance, Kernel};

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The gamma parameter controls the "reach" of each training example:
/// - High gamma: close points have high influence
/// - Low gamma: distant points have influence
///
/// K(x, x) is always 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RBFKernel {
    gamma: f64,
}

impl RBFKernel {
    /// Create a new RBF kernel with specified gamma parameter
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Kernel for RBFKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        (-self.gamma * squared_distance(x, y)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rbf_kernel_identical_vectors() {
        let x = [1.0, -2.0, 3.5];
        for gamma in [0.001, 0.01, 1.0, 10.0, 250.0] {
            let kernel = RBFKernel::new(gamma);
            assert_eq!(kernel.compute(&x, &x), 1.0);
        }
    }

    #[test]
    fn test_rbf_kernel_computation() {
        let kernel = RBFKernel::new(0.5);

        // ||x - y||² = 1 + 1 = 2, K = exp(-0.5 * 2) = exp(-1)
        let result = kernel.compute(&[1.0, 0.0], &[0.0, 1.0]);
        assert_relative_eq!(result, (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_rbf_kernel_decays_with_distance() {
        let kernel = RBFKernel::new(1.0);
        let origin = [0.0];
        let near = kernel.compute(&origin, &[0.5]);
        let far = kernel.compute(&origin, &[2.0]);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn test_rbf_kernel_symmetry() {
        let kernel = RBFKernel::new(0.3);
        let a = [0.5, -1.0, 2.0];
        let b = [1.5, 0.25, -0.75];
        assert_eq!(kernel.compute(&a, &b), kernel.compute(&b, &a));
    }

    #[test]
    fn test_gamma_getter() {
        assert_eq!(RBFKernel::new(0.01).gamma(), 0.01);
    }
}
