//! Full solve pipeline: eliminate, back-substitute, verify

use crate::config::{EliminationConfig, Schedule};
use crate::direct::{Solution, back_substitute, eliminate};
use crate::error::GaussError;
use crate::matrix::AugmentedMatrix;
use crate::traits::RealField;
use crate::verify::{Verification, verify};
use ndarray::{Array1, Array2};
use std::time::{Duration, Instant};

/// Solve result
#[derive(Debug, Clone)]
pub struct GaussReport<T: RealField> {
    pub solution: Solution<T>,
    /// Re-substitution check against the caller's matrix
    pub verification: Verification<T>,
    /// Wall-clock time of the forward pass
    pub elimination_time: Duration,
    pub schedule: Schedule,
}

/// Solve `[A | b]` and check the result against the original equations
///
/// Fails only when the system is inconsistent. A solution that does not pass
/// verification is still returned; see [`GaussReport::verification`].
pub fn solve<T: RealField>(
    matrix: &AugmentedMatrix<T>,
    config: &EliminationConfig<T>,
) -> Result<GaussReport<T>, GaussError> {
    let start = Instant::now();
    let echelon = eliminate(matrix, config)?;
    let elimination_time = start.elapsed();

    let solution = back_substitute(&echelon, config.tolerance)?;
    let verification = verify(matrix, &solution.x, config.tolerance)?;

    log::info!(
        "Solved {} unknowns ({}) in {:.2?}: {} free variable(s), max residual {}",
        matrix.n(),
        config.schedule,
        elimination_time,
        solution.free_variables.len(),
        verification.max_residual
    );

    Ok(GaussReport {
        solution,
        verification,
        elimination_time,
        schedule: config.schedule,
    })
}

/// Solve `Ax = b` given as a coefficient matrix and a right-hand side
///
/// This is a convenience function that builds the augmented matrix and
/// returns only the solution vector.
pub fn solve_system<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>, GaussError> {
    let matrix = AugmentedMatrix::from_system(a, b)?;
    let echelon = eliminate(&matrix, config)?;
    Ok(back_substitute(&echelon, config.tolerance)?.x)
}
