#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # sigbench
//!
//! Wall-clock benchmarks for post-quantum signature schemes.
//!
//! For each (algorithm, label) pair in a [`BenchPlan`], a session opens the
//! algorithm through a [`SchemeProvider`], times keypair generation, signing
//! and verification over a fixed number of iterations, and appends the three
//! averages to a CSV report:
//!
//! ```text
//! VERSION,SCHEME,KEYGEN(ms),SIGN(ms),VERIFY(ms)
//! Dilithium_II_Optimized,ML-DSA-44,0.0712,0.2254,0.0768
//! ```
//!
//! Unavailable algorithms are skipped; only failing to create or write the
//! report ends a session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sigbench::{BenchConfig, run_session};
//! use sigbench_schemes::Library;
//!
//! let summary = run_session(&BenchConfig::new(), &Library::new())?;
//! println!("All results saved to {}", summary.output.display());
//! # Ok::<(), sigbench::BenchError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod plan;
pub mod report;
pub mod runner;

pub use config::{BenchConfig, Cli};
pub use driver::{SessionSummary, list_schemes, run_session};
pub use error::{BenchError, Result};
pub use plan::{BenchPlan, PlanEntry};
pub use report::{HEADER, Report, ResultRow};
pub use runner::{Phase, RunOutcome, SkipReason, benchmark_scheme};
pub use sigbench_perf::AveragingPolicy;
