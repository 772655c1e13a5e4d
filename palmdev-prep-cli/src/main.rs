//! palmdev-prep - report on and generate paths to installed Palm OS SDKs.
//!
//! Scans `/opt/palmdev` (or the configured PalmDev tree) and any directories
//! given on the command line, then installs GCC specs files that make
//! `-palmos<N>` select the matching SDK.

mod cli;
mod commands;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use palmdev_prep::diagnostics::Diagnostics;
use tracing_subscriber::EnvFilter;

use cli::Cli;

/// Log level used when `RUST_LOG` is not set.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose))),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut diagnostics = Diagnostics::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = commands::common::resolve_config(&cli).and_then(|config| {
        tracing::debug!(
            palmdev_prefix = %config.palmdev_prefix.display(),
            exec_prefix = %config.exec_prefix.display(),
            targets = ?config.targets,
            "Resolved configuration"
        );

        if cli.remove {
            commands::remove::run(&cli, &config, &mut diagnostics, &mut out)
        } else {
            commands::prep::run(&cli, &config, &mut diagnostics, &mut out)
        }
    });

    if let Err(e) = result {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    if diagnostics.has_problems() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
