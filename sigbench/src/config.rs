//! Session configuration and command-line parsing.
//!
//! [`BenchConfig`] is the validated description of one session. [`Cli`] is
//! the clap surface that produces it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::collections::TryReserveError;
use std::path::PathBuf;

use clap::Parser;
use sigbench_perf::AveragingPolicy;

use crate::error::{BenchError, Result};
use crate::logging;
use crate::plan::{BenchPlan, PlanEntry};

/// Report written in the working directory when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "results.csv";

/// Iterations per phase.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Length of the signed message in bytes.
pub const DEFAULT_MESSAGE_LEN: usize = 32;

/// Byte the message is filled with.
pub const DEFAULT_MESSAGE_FILL: u8 = 0xAB;

/// Configuration for one benchmark session.
///
/// # Examples
/// ```rust
/// use sigbench::config::BenchConfig;
/// use sigbench::plan::{BenchPlan, PlanEntry};
///
/// let config = BenchConfig::new()
///     .with_iterations(10)
///     .with_plan(BenchPlan::from_entries(vec![PlanEntry::new("ML-DSA-44", "quick")]));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.message().expect("32 bytes").len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Path of the CSV report; created or truncated at session start.
    pub output: PathBuf,
    /// Iterations per phase. Must be non-zero.
    pub iterations: usize,
    /// Length of the signed message.
    pub message_len: usize,
    /// Constant byte the message is filled with.
    pub message_fill: u8,
    /// Divisor used for phase averages.
    pub averaging: AveragingPolicy,
    /// Pairs to benchmark, in order.
    pub plan: BenchPlan,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            iterations: DEFAULT_ITERATIONS,
            message_len: DEFAULT_MESSAGE_LEN,
            message_fill: DEFAULT_MESSAGE_FILL,
            averaging: AveragingPolicy::default(),
            plan: BenchPlan::reference(),
        }
    }
}

impl BenchConfig {
    /// Reference session: 100 iterations, 32-byte message, reference plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the iteration count per phase.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the message length.
    #[must_use]
    pub fn with_message_len(mut self, message_len: usize) -> Self {
        self.message_len = message_len;
        self
    }

    /// Set the message fill byte.
    #[must_use]
    pub fn with_message_fill(mut self, message_fill: u8) -> Self {
        self.message_fill = message_fill;
        self
    }

    /// Set the averaging policy.
    #[must_use]
    pub fn with_averaging(mut self, averaging: AveragingPolicy) -> Self {
        self.averaging = averaging;
        self
    }

    /// Replace the plan.
    #[must_use]
    pub fn with_plan(mut self, plan: BenchPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns an error if the iteration count is zero, the output path is
    /// empty, or the plan is empty or has an entry the report cannot carry.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::Configuration(
                "iterations must be greater than zero".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(BenchError::Configuration("output path is empty".to_string()));
        }
        self.plan.validate()
    }

    /// The deterministic message every pair signs.
    ///
    /// # Errors
    /// Returns the allocator's error if `message_len` bytes cannot be reserved.
    pub fn message(&self) -> std::result::Result<Vec<u8>, TryReserveError> {
        let mut message = Vec::new();
        message.try_reserve_exact(self.message_len)?;
        message.resize(self.message_len, self.message_fill);
        Ok(message)
    }
}

/// Benchmark post-quantum signature schemes and write average timings to CSV.
#[derive(Parser, Debug)]
#[command(name = "sigbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV report path (created or truncated)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Iterations per phase
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Length of the signed message in bytes
    #[arg(long, default_value_t = DEFAULT_MESSAGE_LEN)]
    pub message_len: usize,

    /// Message fill byte, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0xAB", value_parser = parse_byte)]
    pub message_byte: u8,

    /// Benchmark ALGORITHM[:LABEL] instead of the reference plan (repeatable)
    #[arg(short, long = "scheme", value_name = "ALGORITHM[:LABEL]")]
    pub schemes: Vec<PlanEntry>,

    /// Divide by the iterations that ran when a phase stops early
    #[arg(long)]
    pub average_over_executed: bool,

    /// List known algorithms and exit
    #[arg(long)]
    pub list_schemes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Tracing filter directive for the verbosity flags.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        logging::directive_for(self.verbose, self.quiet)
    }

    /// Build and validate the session configuration.
    ///
    /// # Errors
    /// Returns the validation error of the resulting [`BenchConfig`].
    pub fn into_config(self) -> Result<BenchConfig> {
        let plan = if self.schemes.is_empty() {
            BenchPlan::reference()
        } else {
            BenchPlan::from_entries(self.schemes)
        };
        let averaging = if self.average_over_executed {
            AveragingPolicy::ExecutedIterations
        } else {
            AveragingPolicy::ConfiguredIterations
        };
        let config = BenchConfig::new()
            .with_output(self.output)
            .with_iterations(self.iterations)
            .with_message_len(self.message_len)
            .with_message_fill(self.message_byte)
            .with_averaging(averaging)
            .with_plan(plan);
        config.validate()?;
        Ok(config)
    }
}

fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid byte '{s}': {e}"))
}
