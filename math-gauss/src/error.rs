//! Errors raised by the solver core

use std::fmt;
use thiserror::Error;

/// Pipeline stage that detected an inconsistency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Degeneracy check of a pivot step
    Pivot,
    /// Consistency sweep after the forward pass
    FinalSweep,
    /// Zero diagonal entry during back-substitution
    BackSubstitution,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Pivot => write!(f, "pivot step"),
            Stage::FinalSweep => write!(f, "final consistency sweep"),
            Stage::BackSubstitution => write!(f, "back-substitution"),
        }
    }
}

/// Errors that can occur while solving an augmented system
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    /// `row` is the 0-based index of the equation in the caller's matrix.
    #[error("System is inconsistent, no solution exists (equation {} cannot be satisfied, detected at {stage})", .row + 1)]
    InconsistentSystem { row: usize, stage: Stage },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("System has no equations")]
    EmptySystem,
    /// `row` and `column` are 0-based.
    #[error("Entry at equation {}, column {} is not a finite number", .row + 1, .column + 1)]
    NonFiniteEntry { row: usize, column: usize },
}

impl GaussError {
    /// Whether the input itself has no solution (as opposed to a shape error)
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, GaussError::InconsistentSystem { .. })
    }
}
