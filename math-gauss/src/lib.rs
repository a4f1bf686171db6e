//! Gaussian elimination for square linear systems
//!
//! This crate solves `Ax = b`, given as an augmented matrix `[A | b]`, by
//! forward elimination with partial pivoting followed by back-substitution,
//! then checks the result by substituting it back into the original system.
//!
//! # Features
//!
//! - **Partial pivoting**: largest magnitude in the column, lowest row on ties
//! - **Inconsistency detection**: `0 = c` equations are reported as
//!   [`GaussError::InconsistentSystem`] instead of producing numbers
//! - **Two schedules**: sequential, or one rayon task per row below each pivot
//! - **Generic scalar types**: works with `f64` and `f32`
//!
//! Rank-deficient but consistent systems are accepted: unknowns without a
//! pivot get the placeholder value `0` and are listed in
//! [`Solution::free_variables`].
//!
//! # Example
//!
//! ```
//! use math_gauss::{AugmentedMatrix, EliminationConfig, solve};
//! use ndarray::array;
//!
//! let matrix = AugmentedMatrix::new(array![
//!     [2.0, 1.0, -1.0, 8.0],
//!     [-3.0, -1.0, 2.0, -11.0],
//!     [-2.0, 1.0, 2.0, -3.0],
//! ])
//! .unwrap();
//!
//! let report = solve(&matrix, &EliminationConfig::<f64>::default()).unwrap();
//! assert!(report.verification.valid);
//! assert!((report.solution.x[0] - 2.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod parallel;
pub mod solve;
pub mod traits;
pub mod verify;

// Re-export main types
pub use config::{EliminationConfig, Schedule};
pub use error::{GaussError, Stage};
pub use matrix::AugmentedMatrix;
pub use traits::RealField;

// Re-export the pipeline stages
pub use direct::{EchelonForm, Solution, back_substitute, eliminate};
pub use loader::{LoadError, load_matrix, parse_matrix};
pub use solve::{GaussReport, solve, solve_system};
pub use verify::{Mismatch, Verification, verify};
