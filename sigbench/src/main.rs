#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! `sigbench` command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use sigbench::{Cli, list_schemes, logging, run_session};
use sigbench_schemes::Library;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_directive()) {
        eprintln!("{e}");
    }

    if cli.list_schemes {
        return match list_schemes(std::io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    match run_session(&config, &Library::new()) {
        Ok(summary) => {
            println!("\nAll results saved to {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
