//! Scalar trait for the elimination routines
//!
//! [`RealField`] abstracts over the floating point types the solver works with.
//! Pivoting compares magnitudes, so only ordered (real) scalars qualify.
//!
//! # Implementations
//!
//! Provided for:
//! - `f64` (default, tolerance `1e-9`)
//! - `f32` (for memory-constrained applications)

use num_traits::{Float, NumAssign};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used as matrix entries.
pub trait RealField: Float + NumAssign + Send + Sync + Debug + Display + 'static {
    /// Magnitude is strictly below `tol`, i.e. treated as an exact zero
    fn is_negligible(&self, tol: Self) -> bool {
        self.abs() < tol
    }

    /// Magnitude is strictly above `tol`
    fn is_significant(&self, tol: Self) -> bool {
        self.abs() > tol
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
