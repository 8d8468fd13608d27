//! Dense similarity (Gram) matrix
//!
//! Holds K(i, j) for every pair of training rows. Built once per training
//! call and dropped after the bias has been computed.

use crate::kernel::Kernel;

/// Row-major N×N matrix of kernel values
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Evaluate `kernel` over every ordered pair of rows
    pub fn build<K: Kernel + ?Sized>(kernel: &K, rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for x_i in rows {
            for x_j in rows {
                values.push(kernel.compute(x_i, x_j));
            }
        }
        Self { n, values }
    }

    /// Row i: K(i, 0), ..., K(i, N-1)
    ///
    /// # Panics
    /// Panics if i is not a training row index
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{PolynomialKernel, RBFKernel};

    #[test]
    fn test_build_linear() {
        let kernel = PolynomialKernel::new(1, 0.0);
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];
        let matrix = SimilarityMatrix::build(&kernel, &rows);

        assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.row(1), &[2.0, 4.0, 6.0]);
        assert_eq!(matrix.row(2), &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_build_is_symmetric() {
        let kernel = RBFKernel::new(0.5);
        let rows = vec![vec![0.0, 1.0], vec![1.0, -1.0], vec![2.5, 0.5]];
        let matrix = SimilarityMatrix::build(&kernel, &rows);

        for i in 0..3 {
            assert_eq!(matrix.row(i).len(), 3);
            assert_eq!(matrix.row(i)[i], 1.0);
            for j in 0..3 {
                assert_eq!(matrix.row(i)[j], matrix.row(j)[i]);
            }
        }
    }
}
