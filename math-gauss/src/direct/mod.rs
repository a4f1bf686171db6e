//! Direct solvers for linear systems
//!
//! This module provides Gaussian elimination in two stages:
//! - [`eliminate`]: forward elimination with partial pivoting
//! - [`back_substitute`]: solution of the resulting triangular system

mod back_substitution;
mod elimination;

pub use back_substitution::{Solution, back_substitute};
pub use elimination::{EchelonForm, eliminate};
