//! Numerical solvers
//!
//! This module owns the HOW of the physics/numerics split:
//!
//! - **`grid`**: half-open fixed-step sweep axes ([`Axis`])
//! - **`methods`**: the adaptive ODE integrator ([`Rkf45Solver`]) and
//!   adaptive quadrature ([`SimpsonIntegrator`])
//!
//! It also owns the parallel-execution threshold. Deciding *when* to hand
//! the flux-ratio loop to Rayon is a numerical-execution concern, not a
//! physics concern, so the knob lives here rather than in `sweep`. The
//! threshold is an `AtomicUsize` so benchmarks and tests can change it at
//! runtime without a mutex on every sweep; relaxed ordering suffices
//! because the value is a performance hint, not a synchronisation point.

mod grid;
mod methods;

use std::sync::atomic::{AtomicUsize, Ordering};

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================

/// Default number of flux-ratio rows above which the sweep switches to
/// parallel iteration (only with the `parallel` feature).
///
/// Rows are coarse-grained — one row is a full VLS solve plus hundreds of
/// quadratures — so the crossover is low: with at least four rows the
/// thread-pool dispatch overhead is already amortized.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The sweep iterates sequentially when the flux-ratio axis has fewer
/// rows than this value and switches to Rayon when it has at least this
/// many — but only when the crate is compiled with the `parallel`
/// feature.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`; a zero threshold would force parallel
/// dispatch even for an empty sweep, which is never intended.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and
/// restores it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a
/// modified threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so restoring any saved value never
        // panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::Axis;
pub use methods::{Rkf45Solver, SimpsonIntegrator};

// =================================================================================================
// Tests
// =================================================================================================
