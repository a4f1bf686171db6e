//! Re-substitution check of a computed solution
//!
//! A failed check is diagnostic output about numerical accuracy, not an error:
//! it is returned as data and logged, and never stops the pipeline.

use crate::error::GaussError;
use crate::matrix::AugmentedMatrix;
use crate::traits::RealField;
use ndarray::Array1;

/// First equation that the solution does not satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch<T> {
    /// 0-based equation index in the original matrix
    pub row: usize,
    /// Right-hand side of the equation
    pub expected: T,
    /// Left-hand side evaluated at the solution
    pub actual: T,
}

/// Verification result
#[derive(Debug, Clone, PartialEq)]
pub struct Verification<T> {
    /// Whether every equation holds within tolerance
    pub valid: bool,
    pub first_failure: Option<Mismatch<T>>,
    /// Largest `|lhs - rhs|` over all equations, NaN if any residual is NaN
    pub max_residual: T,
}

/// Check `solution` against every equation of the original system
pub fn verify<T: RealField>(
    original: &AugmentedMatrix<T>,
    solution: &Array1<T>,
    tolerance: T,
) -> Result<Verification<T>, GaussError> {
    let n = original.n();
    if solution.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: solution.len(),
        });
    }

    let mut first_failure = None;
    let mut max_residual = T::zero();
    for (i, row) in original.as_array().rows().into_iter().enumerate() {
        let actual = row
            .iter()
            .take(n)
            .zip(solution.iter())
            .fold(T::zero(), |acc, (&a_ij, &x_j)| acc + a_ij * x_j);
        let expected = row[n];
        let residual = (actual - expected).abs();
        if residual.is_nan() || residual > max_residual {
            max_residual = residual;
        }

        // a NaN residual (e.g. `inf - inf`) never holds
        let holds = residual <= tolerance;
        if !holds && first_failure.is_none() {
            log::warn!(
                "Equation {} does not hold: left side {actual}, right side {expected}",
                i + 1
            );
            first_failure = Some(Mismatch {
                row: i,
                expected,
                actual,
            });
        }
    }

    Ok(Verification {
        valid: first_failure.is_none(),
        first_failure,
        max_residual,
    })
}
