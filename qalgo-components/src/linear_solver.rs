//! Classical exact linear-system solver
//!
//! Reference baseline for validating quantum linear-system results: computes
//! the eigenvalues of the coefficient matrix and the exact solution of
//! `M x = b` with dense decompositions.

use crate::error::{ComponentError, Result};
use log::debug;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

/// Result of an exact solve: the spectrum and the solution vector
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Eigenvalues of the coefficient matrix (complex in general)
    pub eigenvalues: Vec<Complex64>,
    /// Solution `x` of `M x = b`
    pub solution: DVector<f64>,
}

/// Exact solver for a square linear system
///
/// Holds the system, immutable once constructed; [`solve`](Self::solve)
/// produces the eigenvalues and solution in one pass. A singular matrix
/// fails the solve with no partial result.
///
/// # Example
/// ```
/// use nalgebra::{DMatrix, DVector};
/// use qalgo_components::ExactLinearSolver;
///
/// let m = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]);
/// let b = DVector::from_vec(vec![2.0, 8.0]);
/// let result = ExactLinearSolver::new(m, b).unwrap().solve().unwrap();
/// assert!((result.solution[0] - 1.0).abs() < 1e-12);
/// assert!((result.solution[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ExactLinearSolver {
    matrix: DMatrix<f64>,
    vector: DVector<f64>,
}

impl ExactLinearSolver {
    /// Create a solver for `M x = b`
    ///
    /// # Errors
    /// Returns error if `M` is not square or `b` doesn't match its row count
    pub fn new(matrix: DMatrix<f64>, vector: DVector<f64>) -> Result<Self> {
        if !matrix.is_square() {
            return Err(ComponentError::NonSquareMatrix {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        if vector.len() != matrix.nrows() {
            return Err(ComponentError::DimensionMismatch {
                expected: matrix.nrows(),
                actual: vector.len(),
            });
        }

        Ok(Self { matrix, vector })
    }

    /// The coefficient matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The right-hand side
    pub fn vector(&self) -> &DVector<f64> {
        &self.vector
    }

    /// Compute eigenvalues and the system solution
    ///
    /// # Errors
    /// Returns [`ComponentError::SingularMatrix`] when `M` has no inverse
    pub fn solve(&self) -> Result<SolveResult> {
        debug!("solving {}x{} linear system", self.matrix.nrows(), self.matrix.ncols());

        let eigenvalues: Vec<Complex64> =
            self.matrix.complex_eigenvalues().iter().copied().collect();

        let solution = self
            .matrix
            .clone()
            .lu()
            .solve(&self.vector)
            .ok_or(ComponentError::SingularMatrix)?;

        Ok(SolveResult {
            eigenvalues,
            solution,
        })
    }
}
