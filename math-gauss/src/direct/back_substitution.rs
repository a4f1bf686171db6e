//! Back-substitution on a row-echelon system

use super::elimination::EchelonForm;
use crate::error::{GaussError, Stage};
use crate::traits::RealField;
use ndarray::Array1;

/// Back-substitution result
#[derive(Debug, Clone)]
pub struct Solution<T: RealField> {
    /// Solution vector, indexed like the matrix columns
    pub x: Array1<T>,
    /// Unknowns left undetermined by a zero pivot; they hold the placeholder 0
    pub free_variables: Vec<usize>,
}

impl<T: RealField> Solution<T> {
    /// Whether every unknown was determined by its own pivot
    pub fn is_unique(&self) -> bool {
        self.free_variables.is_empty()
    }
}

/// Solve the triangular system produced by [`eliminate`](super::eliminate)
///
/// A zero diagonal entry either contradicts the values already computed
/// (`InconsistentSystem`) or leaves its unknown free, in which case it is set
/// to zero. No attempt is made to describe the full family of solutions.
pub fn back_substitute<T: RealField>(
    echelon: &EchelonForm<T>,
    tolerance: T,
) -> Result<Solution<T>, GaussError> {
    let n = echelon.n();
    let a = echelon.matrix();
    let mut x = Array1::from_elem(n, T::zero());
    let mut free_variables = Vec::new();

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += a[[i, j]] * x[j];
        }
        let residual = a[[i, n]] - sum;

        let u_ii = a[[i, i]];
        if u_ii.is_negligible(tolerance) {
            if residual.is_significant(tolerance) {
                return Err(GaussError::InconsistentSystem {
                    row: echelon.permutation()[i],
                    stage: Stage::BackSubstitution,
                });
            }
            x[i] = T::zero();
            free_variables.push(i);
        } else {
            x[i] = residual / u_ii;
        }
    }

    free_variables.reverse();
    if !free_variables.is_empty() {
        log::debug!("Free variables set to 0: {free_variables:?}");
    }
    Ok(Solution { x, free_variables })
}
