//! Benchmark one (algorithm, label) pair.
//!
//! The runner opens a handle, allocates buffers sized from it, times the
//! keygen, sign and verify phases in that order, and appends a row. An
//! unavailable algorithm or a failed allocation skips the pair. A failing
//! operation only ends its own phase early: the next phase still runs on
//! whatever the buffers hold.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::collections::TryReserveError;
use std::fmt;
use std::io::Write;

use sigbench_perf::{AveragingPolicy, PhaseOutcome, run_phase};
use sigbench_schemes::{SchemeError, SchemeProvider, SignatureScheme};
use tracing::{error, info, instrument, warn};
use zeroize::Zeroizing;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::plan::PlanEntry;
use crate::report::{Report, ResultRow};

/// The three timed phases, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Keypair generation
    Keygen,
    /// Signing the message
    Sign,
    /// Verifying the last signature
    Verify,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Keygen => write!(f, "keypair generation"),
            Phase::Sign => write!(f, "signing"),
            Phase::Verify => write!(f, "verification"),
        }
    }
}

/// Why a pair produced no row.
#[derive(Debug)]
pub enum SkipReason {
    /// The provider could not open the algorithm.
    Unavailable(SchemeError),
    /// A key or signature buffer could not be allocated.
    Allocation(TryReserveError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unavailable(e) => write!(f, "{e}"),
            SkipReason::Allocation(e) => write!(f, "buffer allocation failed: {e}"),
        }
    }
}

/// What happened to one pair.
#[derive(Debug)]
pub enum RunOutcome {
    /// A row was appended to the report.
    Recorded(ResultRow),
    /// The pair was skipped and nothing was written.
    Skipped(SkipReason),
}

/// Buffers owned by one run, reused by every iteration.
struct Buffers {
    message: Vec<u8>,
    public_key: Vec<u8>,
    secret_key: Zeroizing<Vec<u8>>,
    signature: Vec<u8>,
    /// Length of the last signature produced; 0 until signing succeeds once.
    signature_len: usize,
}

impl Buffers {
    fn allocate(
        scheme: &dyn SignatureScheme,
        config: &BenchConfig,
    ) -> std::result::Result<Self, TryReserveError> {
        Ok(Self {
            message: config.message()?,
            public_key: zeroed(scheme.public_key_len())?,
            secret_key: Zeroizing::new(zeroed(scheme.secret_key_len())?),
            signature: zeroed(scheme.signature_len())?,
            signature_len: 0,
        })
    }

    fn last_signature(&self) -> &[u8] {
        let len = self.signature_len.min(self.signature.len());
        self.signature.get(..len).unwrap_or_default()
    }
}

fn zeroed(len: usize) -> std::result::Result<Vec<u8>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

/// Benchmark one pair and append its row to `report`.
///
/// Handle and buffers are dropped before returning on every path; the secret
/// key buffer is wiped on drop.
///
/// # Errors
/// Only a failed write to `report` is an error. Skips and operation failures
/// are logged and reflected in the returned [`RunOutcome`].
#[instrument(level = "debug", skip_all, fields(algorithm = %entry.algorithm, label = %entry.label))]
pub fn benchmark_scheme<W: Write>(
    report: &mut Report<W>,
    provider: &dyn SchemeProvider,
    entry: &PlanEntry,
    config: &BenchConfig,
) -> Result<RunOutcome> {
    let mut scheme = match provider.open(&entry.algorithm) {
        Ok(scheme) => scheme,
        Err(e) => {
            error!("{} is not available: {}", entry.algorithm, e);
            return Ok(RunOutcome::Skipped(SkipReason::Unavailable(e)));
        }
    };

    let mut buffers = match Buffers::allocate(scheme.as_ref(), config) {
        Ok(buffers) => buffers,
        Err(e) => {
            error!("Failed to allocate buffers for {}: {}", scheme.name(), e);
            return Ok(RunOutcome::Skipped(SkipReason::Allocation(e)));
        }
    };

    let iterations = config.iterations;
    info!("Benchmarking {} ({})...", scheme.name(), entry.label);

    let keygen = run_phase(iterations, || {
        scheme.keypair(&mut buffers.public_key, &mut buffers.secret_key)
    });
    let keygen_ms = summarize(Phase::Keygen, &keygen, config.averaging);

    let sign = run_phase(iterations, || -> sigbench_schemes::Result<()> {
        let len = scheme.sign(&mut buffers.signature, &buffers.message, &buffers.secret_key)?;
        buffers.signature_len = len;
        Ok(())
    });
    let sign_ms = summarize(Phase::Sign, &sign, config.averaging);

    let verify = run_phase(iterations, || {
        scheme.verify(&buffers.message, buffers.last_signature(), &buffers.public_key)
    });
    let verify_ms = summarize(Phase::Verify, &verify, config.averaging);

    let row = ResultRow {
        label: entry.label.clone(),
        scheme: scheme.name().to_string(),
        keygen_ms,
        sign_ms,
        verify_ms,
    };
    report.append(&row)?;
    Ok(RunOutcome::Recorded(row))
}

/// Log a phase's failure and average, and return the average in milliseconds.
fn summarize(phase: Phase, outcome: &PhaseOutcome<SchemeError>, policy: AveragingPolicy) -> f64 {
    let timing = &outcome.timing;
    if let Some(failure) = &outcome.failure {
        error!("{} failed on iteration {}: {}", phase, failure.iteration, failure.error);
    }
    if timing.stopped_early() {
        let divisor = match policy {
            AveragingPolicy::ConfiguredIterations => timing.iterations,
            AveragingPolicy::ExecutedIterations => timing.executed,
        };
        warn!(
            "{} stopped after {} of {} iterations; averaging over {} ({})",
            phase, timing.executed, timing.iterations, divisor, policy
        );
    }
    let average = timing.average_ms(policy);
    info!("Average {} time: {:.4} ms", phase, average);
    average
}
