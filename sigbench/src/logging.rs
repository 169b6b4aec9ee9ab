//! # sigbench Logging
//!
//! Diagnostics go through `tracing` to stderr so that stdout stays free for
//! the scheme listing and the final "results saved" line.
//!
//! `RUST_LOG` wins when set; otherwise the directive comes from the CLI
//! verbosity flags. Key material is never logged, only buffer lengths.
//!
//! ```rust,no_run
//! use sigbench::logging::{directive_for, init_tracing};
//!
//! init_tracing(directive_for(0, false)).expect("Failed to init tracing");
//! tracing::info!("ready");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::io::IsTerminal;

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{BenchError, Result};

/// Default filter: progress, warnings and errors.
pub const DEFAULT_DIRECTIVE: &str = "sigbench=info";

/// Filter directive for a verbosity count (`-v`, `-vv`) or `--quiet`.
///
/// Targets are matched by prefix, so `sigbench` also covers the
/// `sigbench_schemes` and `sigbench_perf` crates.
#[must_use]
pub fn directive_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "sigbench=error";
    }
    match verbosity {
        0 => DEFAULT_DIRECTIVE,
        1 => "sigbench=debug",
        _ => "sigbench=trace",
    }
}

/// Install the global tracing subscriber (call once per process).
///
/// # Errors
/// Returns [`BenchError::Logging`] if a global subscriber is already set.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| BenchError::Logging(e.to_string()))?;

    debug!("sigbench logging initialized");
    Ok(())
}
