//! Polynomial Kernel Implementation
//!
//! The polynomial kernel is defined as:
//! K(x, y) = (C + <x, y>)^d
//!
//! Where:
//! - C: the classifier's scale constant, used here as the additive offset
//! - d (degree): degree of the polynomial
//!
//! With d=1 and C=0 the kernel is the plain dot product.

use crate::kernel::traits::{dot_product, Kernel};

/// Polynomial kernel with configurable degree and offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialKernel {
    /// Degree of the polynomial
    pub degree: u32,
    /// Offset added to the dot product
    pub c: f64,
}

impl PolynomialKernel {
    /// Creates a new polynomial kernel
    ///
    /// # Examples
    /// ```
    /// use ksvm::kernel::{Kernel, PolynomialKernel};
    ///
    /// // (1 + x·y)³
    /// let kernel = PolynomialKernel::new(3, 1.0);
    /// assert_eq!(kernel.compute(&[1.0, 1.0], &[1.0, 0.0]), 8.0);
    /// ```
    pub fn new(degree: u32, c: f64) -> Self {
        Self { degree, c }
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        // Negative bases are kept: odd degrees stay signed
        let exponent = i32::try_from(self.degree).unwrap_or(i32::MAX);
        (self.c + dot_product(x, y)).powi(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_kernel_computation() {
        let kernel = PolynomialKernel::new(2, 1.0);

        // Dot product: 1*2 + 2*1 = 4
        // Kernel: (1 + 4)² = 25
        assert_relative_eq!(kernel.compute(&[1.0, 2.0], &[2.0, 1.0]), 25.0);
    }

    #[test]
    fn test_polynomial_reduces_to_dot_product() {
        let kernel = PolynomialKernel::new(1, 0.0);
        let x = [3.0, -1.5, 0.25];
        assert_relative_eq!(kernel.compute(&x, &x), dot_product(&x, &x));
    }

    #[test]
    fn test_polynomial_kernel_cubic() {
        let kernel = PolynomialKernel::new(3, 2.0);

        // (2 + 3*4)³ = 14³
        assert_relative_eq!(kernel.compute(&[3.0], &[4.0]), 2744.0);
    }

    #[test]
    fn test_polynomial_kernel_huge_degree_saturates() {
        // Degrees past i32::MAX must not wrap into a negative exponent
        let kernel = PolynomialKernel::new(u32::MAX, 1.0);
        assert!(kernel.compute(&[1.0], &[1.0]).is_infinite());
    }

    #[test]
    fn test_polynomial_kernel_negative_base() {
        let kernel = PolynomialKernel::new(3, 0.0);

        // (0 + (-2))³ = -8
        assert_relative_eq!(kernel.compute(&[1.0], &[-2.0]), -8.0);
    }

    #[test]
    fn test_polynomial_kernel_symmetry() {
        let kernel = PolynomialKernel::new(3, 1.0);
        let a = [0.5, -1.0, 2.0];
        let b = [1.5, 0.25, -0.75];
        assert_eq!(kernel.compute(&a, &b), kernel.compute(&b, &a));
    }

    #[test]
    fn test_polynomial_kernel_mismatched_lengths() {
        let kernel = PolynomialKernel::new(2, 1.0);
        assert!(kernel.evaluate(&[1.0, 2.0], &[1.0]).is_err());
    }
}
