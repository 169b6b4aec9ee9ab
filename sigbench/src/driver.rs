//! Session driver: owns the report for the lifetime of one run.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::io::Write;
use std::path::PathBuf;

use sigbench_schemes::{Algorithm, SchemeProvider};
use tracing::{debug, info, instrument};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::Report;
use crate::runner::{RunOutcome, benchmark_scheme};

/// What a completed session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Report path
    pub output: PathBuf,
    /// Rows written
    pub recorded: usize,
    /// Pairs that produced no row
    pub skipped: usize,
}

/// Run every pair in the plan and write the report.
///
/// The configuration is validated before the report is created, so an invalid
/// session leaves no file behind. Skipped pairs do not fail the session.
///
/// # Errors
/// Returns a configuration error, [`crate::BenchError::ReportUnavailable`] if
/// the report cannot be created, or [`crate::BenchError::Io`] if writing to
/// it fails.
#[instrument(level = "debug", skip_all, fields(output = %config.output.display(), pairs = config.plan.len()))]
pub fn run_session(config: &BenchConfig, provider: &dyn SchemeProvider) -> Result<SessionSummary> {
    config.validate()?;

    let mut report = Report::create(&config.output)?;
    debug!(iterations = config.iterations, averaging = %config.averaging, "report created");

    let mut skipped = 0_usize;
    for entry in &config.plan {
        match benchmark_scheme(&mut report, provider, entry, config)? {
            RunOutcome::Recorded(row) => debug!(row = %row, "row written"),
            RunOutcome::Skipped(reason) => {
                debug!(reason = %reason, "pair skipped");
                skipped += 1;
            }
        }
    }

    let recorded = report.rows();
    report.finish()?;

    let summary = SessionSummary { output: config.output.clone(), recorded, skipped };
    info!(recorded = summary.recorded, skipped = summary.skipped, "session complete");
    Ok(summary)
}

/// Write the algorithm registry: name, aliases, NIST level, sizes and
/// whether the backend is compiled in.
///
/// # Errors
/// Returns [`crate::BenchError::Io`] on a write failure.
pub fn list_schemes<W: Write>(mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "{:<20} {:<14} {:>5} {:>8} {:>8} {:>9}  STATUS",
        "ALGORITHM", "ALIASES", "LEVEL", "PK", "SK", "SIG"
    )?;
    for algorithm in Algorithm::ALL {
        let status = if algorithm.is_enabled() {
            "enabled".to_string()
        } else {
            format!("disabled (feature \"{}\")", algorithm.family().feature())
        };
        let aliases = algorithm.aliases().join(",");
        writeln!(
            writer,
            "{:<20} {:<14} {:>5} {:>8} {:>8} {:>9}  {}",
            algorithm.name(),
            if aliases.is_empty() { "-" } else { aliases.as_str() },
            algorithm.nist_security_level(),
            algorithm.public_key_len(),
            algorithm.secret_key_len(),
            algorithm.signature_len(),
            status
        )?;
    }
    writer.flush()?;
    Ok(())
}
