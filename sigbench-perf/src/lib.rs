#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! sigbench Timing Primitives
//!
//! Monotonic timing for fixed-iteration benchmark phases. A phase runs one
//! operation a configured number of times in a tight sequential loop, stops at
//! the first failure, and reports the elapsed wall-clock time together with
//! how many iterations actually ran.
//!
//! # Averaging
//!
//! The per-operation average is `elapsed / divisor`, reported in milliseconds.
//! The divisor is selected by [`AveragingPolicy`]:
//!
//! - [`AveragingPolicy::ConfiguredIterations`] always divides by the configured
//!   count, even when the loop stopped early. This under-reports the cost of a
//!   phase that failed part way through and is kept as the default so that
//!   reports stay comparable with earlier runs.
//! - [`AveragingPolicy::ExecutedIterations`] divides by the iterations that ran,
//!   including the one that failed.
//!
//! # Example
//!
//! ```rust
//! use sigbench_perf::{AveragingPolicy, run_phase};
//!
//! let outcome = run_phase(100, || -> Result<(), ()> { Ok(()) });
//! assert!(outcome.failure.is_none());
//! assert_eq!(outcome.timing.executed, 100);
//!
//! let avg_ms = outcome.timing.average_ms(AveragingPolicy::ConfiguredIterations);
//! assert!(avg_ms >= 0.0);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

/// Monotonic stopwatch around one phase loop
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    /// Create a timer that starts immediately
    #[inline]
    #[must_use]
    pub fn start() -> Self {
        Self { start_time: Some(Instant::now()), elapsed: Duration::ZERO }
    }

    /// Stop the timer and return the elapsed duration.
    ///
    /// Stopping again returns the same duration.
    #[inline]
    pub fn stop(&mut self) -> Duration {
        if let Some(start) = self.start_time.take() {
            self.elapsed = start.elapsed();
        }
        self.elapsed
    }
}

/// Which iteration count an average is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AveragingPolicy {
    /// Divide by the configured iteration count, even after an early stop.
    #[default]
    ConfiguredIterations,
    /// Divide by the number of iterations that actually ran.
    ExecutedIterations,
}

impl fmt::Display for AveragingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AveragingPolicy::ConfiguredIterations => write!(f, "configured iterations"),
            AveragingPolicy::ExecutedIterations => write!(f, "executed iterations"),
        }
    }
}

/// Wall-clock measurement of one benchmark phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    /// Iteration count the phase was configured with
    pub iterations: usize,
    /// Iterations that ran, counting a failed one
    pub executed: usize,
    /// Time between the monotonic start and end timestamps
    pub elapsed: Duration,
}

impl PhaseTiming {
    /// True when the loop stopped before reaching the configured count.
    #[must_use]
    pub fn stopped_early(&self) -> bool {
        self.executed < self.iterations
    }

    /// Average time per operation in milliseconds.
    ///
    /// Returns `0.0` when the selected divisor is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_ms(&self, policy: AveragingPolicy) -> f64 {
        let divisor = match policy {
            AveragingPolicy::ConfiguredIterations => self.iterations,
            AveragingPolicy::ExecutedIterations => self.executed,
        };
        if divisor == 0 {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / divisor as f64) * 1000.0
    }
}

/// First failing iteration of a phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseFailure<E> {
    /// 1-based index of the iteration that failed
    pub iteration: usize,
    /// Error reported by the operation
    pub error: E,
}

/// Result of [`run_phase`]: the timing, plus the failure that ended the loop early, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseOutcome<E> {
    /// Timing of the whole loop
    pub timing: PhaseTiming,
    /// Set when an iteration failed and the loop stopped
    pub failure: Option<PhaseFailure<E>>,
}

/// Run `operation` up to `iterations` times between two monotonic timestamps.
///
/// The loop stops at the first `Err`. Nothing is retried; the caller decides
/// what to report.
pub fn run_phase<E, F>(iterations: usize, mut operation: F) -> PhaseOutcome<E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut executed = 0_usize;
    let mut failure = None;

    let mut timer = Timer::start();
    while executed < iterations {
        executed = executed.saturating_add(1);
        if let Err(error) = operation() {
            failure = Some(PhaseFailure { iteration: executed, error });
            break;
        }
    }
    let elapsed = timer.stop();

    tracing::trace!(iterations, executed, elapsed_ns = elapsed.as_nanos(), "phase finished");

    PhaseOutcome { timing: PhaseTiming { iterations, executed, elapsed }, failure }
}
