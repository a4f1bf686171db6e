//! Solver configuration
//!
//! [`EliminationConfig`] carries the zero tolerance and the scheduling of the
//! forward pass. It is passed explicitly to every stage so tests can vary the
//! tolerance without touching global state.

use std::fmt;

/// How the rows below a pivot are updated during forward elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Single thread of control, rows updated one after another
    #[default]
    Sequential,
    /// One task per row below the pivot, joined before the next pivot step
    Concurrent,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Sequential => write!(f, "sequential"),
            Schedule::Concurrent => write!(f, "concurrent"),
        }
    }
}

/// Gaussian elimination configuration
#[derive(Debug, Clone)]
pub struct EliminationConfig<R> {
    /// Magnitudes strictly below this value are treated as exact zeros
    pub tolerance: R,
    /// Scheduling of the row updates in the forward pass
    pub schedule: Schedule,
    /// Number of threads for the concurrent schedule (None = rayon default)
    pub num_threads: Option<usize>,
}

impl Default for EliminationConfig<f64> {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            schedule: Schedule::Sequential,
            num_threads: None,
        }
    }
}

impl Default for EliminationConfig<f32> {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            schedule: Schedule::Sequential,
            num_threads: None,
        }
    }
}

impl<R> EliminationConfig<R>
where
    EliminationConfig<R>: Default,
{
    /// Default configuration with the concurrent forward pass
    pub fn concurrent() -> Self {
        Self::default().with_schedule(Schedule::Concurrent)
    }
}

impl<R> EliminationConfig<R> {
    /// Sets the zero tolerance.
    pub fn with_tolerance(mut self, tolerance: R) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the forward pass schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the number of threads used by the concurrent schedule.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}
