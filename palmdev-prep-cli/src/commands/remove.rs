//! Removal of previously installed specs files.

use std::io::Write;

use palmdev_prep::config::PrepConfig;
use palmdev_prep::diagnostics::Diagnostics;
use palmdev_prep::install::remove_spec_files;

use crate::cli::Cli;
use crate::error::CliError;

/// Remove every configured target's specs file.
pub fn run<W: Write>(
    cli: &Cli,
    config: &PrepConfig,
    diagnostics: &mut Diagnostics,
    out: &mut W,
) -> Result<(), CliError> {
    for outcome in remove_spec_files(config, diagnostics) {
        if cli.verbose && matches!(outcome.result, Ok(true)) {
            writeln!(out, "Removed '{}'", outcome.path.display())?;
        }
    }
    out.flush()?;
    Ok(())
}
