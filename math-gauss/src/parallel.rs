//! Parallel utilities with feature-gated implementations
//!
//! Provides row-parallel abstractions backed by rayon, with sequential
//! fallbacks when the `rayon` feature is disabled.

use ndarray::{ArrayViewMut1, ArrayViewMut2, Axis};

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Run `f` on every row of `rows`, one rayon task per row
///
/// Each task receives an exclusive view of its own row; the call returns once
/// every task has finished.
#[cfg(feature = "rayon")]
pub fn parallel_for_each_row<T, F>(mut rows: ArrayViewMut2<'_, T>, f: F)
where
    T: Send + Sync,
    F: Fn(ArrayViewMut1<'_, T>) + Sync + Send,
{
    use rayon::prelude::*;
    rows.axis_iter_mut(Axis(0)).into_par_iter().for_each(f);
}

/// Sequential for_each over rows (fallback)
#[cfg(not(feature = "rayon"))]
pub fn parallel_for_each_row<T, F>(mut rows: ArrayViewMut2<'_, T>, f: F)
where
    F: Fn(ArrayViewMut1<'_, T>),
{
    rows.axis_iter_mut(Axis(0)).for_each(f);
}

/// Run `op` on a dedicated pool of `num_threads` threads, or on the global
/// pool when `num_threads` is `None`
#[cfg(feature = "rayon")]
pub fn install<R, OP>(num_threads: Option<usize>, op: OP) -> R
where
    R: Send,
    OP: FnOnce() -> R + Send,
{
    let Some(threads) = num_threads else {
        return op();
    };
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(op),
        Err(err) => {
            log::warn!("Could not build a {threads}-thread pool ({err}), using the global pool");
            op()
        }
    }
}

/// Run `op` on the current thread (fallback)
#[cfg(not(feature = "rayon"))]
pub fn install<R, OP>(_num_threads: Option<usize>, op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
