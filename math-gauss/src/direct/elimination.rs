//! Forward elimination with partial pivoting
//!
//! Reduces a working copy of an augmented matrix to row-echelon form. The
//! caller keeps the original untouched, so it can still be used to verify the
//! solution afterwards.
//!
//! Two schedules share the same arithmetic:
//! - [`Schedule::Sequential`] updates the rows below a pivot one by one
//! - [`Schedule::Concurrent`] hands each row below the pivot to its own rayon
//!   task and joins them all before the next pivot is selected

use crate::config::{EliminationConfig, Schedule};
use crate::error::{GaussError, Stage};
use crate::matrix::AugmentedMatrix;
use crate::parallel;
use crate::traits::RealField;
use ndarray::{Array2, ArrayView1, ArrayViewMut1, ArrayViewMut2, Axis};

/// Row-echelon form of an augmented system
///
/// Only produced by [`eliminate`], so back-substitution never sees a matrix
/// that has not been through the forward pass.
#[derive(Debug, Clone)]
pub struct EchelonForm<T: RealField> {
    /// Upper triangular coefficients plus the transformed right-hand side
    matrix: Array2<T>,
    /// `permutation[i]` is the index in the caller's matrix of the row now at `i`
    permutation: Vec<usize>,
    /// Pivot columns left unreduced because no usable pivot was found
    skipped_pivots: Vec<usize>,
    /// Matrix dimension
    n: usize,
}

impl<T: RealField> EchelonForm<T> {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    pub fn skipped_pivots(&self) -> &[usize] {
        &self.skipped_pivots
    }

    /// Whether every pivot step found a nonzero pivot
    pub fn is_full_rank(&self) -> bool {
        self.skipped_pivots.is_empty()
    }
}

/// Reduce `matrix` to row-echelon form, or report that it has no solution
pub fn eliminate<T: RealField>(
    matrix: &AugmentedMatrix<T>,
    config: &EliminationConfig<T>,
) -> Result<EchelonForm<T>, GaussError> {
    let tol = config.tolerance;
    log::debug!(
        "Forward elimination of a {}x{} system ({})",
        matrix.n(),
        matrix.n() + 1,
        config.schedule
    );

    match config.schedule {
        Schedule::Sequential => forward_pass(matrix, tol, |pivot, mut rows, column| {
            for row in rows.axis_iter_mut(Axis(0)) {
                eliminate_row(pivot, row, column);
            }
        }),
        Schedule::Concurrent => {
            if !parallel::is_parallel_available() {
                log::debug!("rayon feature disabled, concurrent schedule runs on one thread");
            }
            parallel::install(config.num_threads, || {
                forward_pass(matrix, tol, |pivot, rows, column| {
                    parallel::parallel_for_each_row(rows, |row| {
                        eliminate_row(pivot, row, column)
                    });
                })
            })
        }
    }
}

/// Pivot loop shared by both schedules; `update_rows` zeroes `column` in every
/// row below the pivot and must return only once all of them are updated.
fn forward_pass<T, U>(
    matrix: &AugmentedMatrix<T>,
    tol: T,
    update_rows: U,
) -> Result<EchelonForm<T>, GaussError>
where
    T: RealField,
    U: Fn(ArrayView1<'_, T>, ArrayViewMut2<'_, T>, usize),
{
    let n = matrix.n();
    let mut a = matrix.as_array().clone();
    let mut permutation: Vec<usize> = (0..n).collect();
    let mut skipped_pivots = Vec::new();

    for i in 0..n {
        let pivot_row = select_pivot(&a, i);
        if pivot_row != i {
            swap_rows(&mut a, i, pivot_row);
            permutation.swap(i, pivot_row);
        }

        if a[[i, i]].is_negligible(tol) {
            if coefficients_negligible(a.row(i), n, tol) {
                if a[[i, n]].is_significant(tol) {
                    return Err(GaussError::InconsistentSystem {
                        row: permutation[i],
                        stage: Stage::Pivot,
                    });
                }
                log::debug!("Pivot {i}: trivial 0 = 0 equation, column left unreduced");
            } else {
                log::debug!("Pivot {i}: no nonzero candidate in column, column left unreduced");
            }
            skipped_pivots.push(i);
            continue;
        }

        let (upper, lower) = a.view_mut().split_at(Axis(0), i + 1);
        update_rows(upper.row(i), lower, i);
    }

    for (i, row) in a.axis_iter(Axis(0)).enumerate() {
        if coefficients_negligible(row, n, tol) && row[n].is_significant(tol) {
            return Err(GaussError::InconsistentSystem {
                row: permutation[i],
                stage: Stage::FinalSweep,
            });
        }
    }

    Ok(EchelonForm {
        matrix: a,
        permutation,
        skipped_pivots,
        n,
    })
}

/// Row in `column..n` with the largest magnitude in `column`; ties keep the
/// lowest index.
fn select_pivot<T: RealField>(a: &Array2<T>, column: usize) -> usize {
    let mut max_val = a[[column, column]].abs();
    let mut max_row = column;
    for r in (column + 1)..a.nrows() {
        let val = a[[r, column]].abs();
        if val > max_val {
            max_val = val;
            max_row = r;
        }
    }
    max_row
}

fn swap_rows<T: RealField>(a: &mut Array2<T>, i: usize, j: usize) {
    for k in 0..a.ncols() {
        a.swap([i, k], [j, k]);
    }
}

fn coefficients_negligible<T: RealField>(row: ArrayView1<'_, T>, n: usize, tol: T) -> bool {
    row.iter().take(n).all(|v| v.is_negligible(tol))
}

/// `row -= (row[column] / pivot[column]) * pivot` over columns `column..=n`
fn eliminate_row<T: RealField>(
    pivot: ArrayView1<'_, T>,
    mut row: ArrayViewMut1<'_, T>,
    column: usize,
) {
    let factor = row[column] / pivot[column];
    for k in column..pivot.len() {
        let update = factor * pivot[k];
        row[k] -= update;
    }
}
