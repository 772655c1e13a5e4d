//! The main command: scan, report, choose the default SDK, write specs.

use std::io::Write;

use palmdev_prep::config::PrepConfig;
use palmdev_prep::diagnostics::Diagnostics;
use palmdev_prep::install::write_spec_files;
use palmdev_prep::report;
use palmdev_prep::sdk::{select_default, DiscoveryContext};
use palmdev_prep::specs::SpecWriter;
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

const DONE_MESSAGE: &str = "...done";
const PERMISSION_MESSAGE: &str = "Permission to write spec files denied -- try again as root";

/// Run the scan and write (or dump) the specs.
///
/// Recoverable problems are counted in `diagnostics`; only a failure to write
/// or flush `out` is returned as an error.
pub fn run<W: Write>(
    cli: &Cli,
    config: &PrepConfig,
    diagnostics: &mut Diagnostics,
    out: &mut W,
) -> Result<(), CliError> {
    let report = cli.report();

    let mut ctx = DiscoveryContext::new();
    let scans = ctx.scan_all(&config.palmdev_prefix, &cli.directories, diagnostics);

    if report {
        for scan in &scans {
            report::write_tree_scan(out, scan)?;
        }
    }

    let selection = select_default(cli.default_sdk.as_deref(), &ctx);
    if let Some(name) = &selection.unknown_request {
        diagnostics.warning(format!(
            "SDK '{}' not found -- using highest found instead",
            name
        ));
    }
    if report && selection.automatic {
        if let Some(key) = selection.key() {
            report::write_default_notice(out, key)?;
        }
    }

    let writer = SpecWriter::new(config.lib_target_subdir.as_deref());

    if let Some(target) = &cli.dump_specs {
        debug!(target = %target, "Dumping specs to standard output");
        writer.write_specs(&ctx, selection.root.as_ref(), out)?;
        out.flush()?;
        return Ok(());
    }

    if report {
        writeln!(out, "Writing SDK details to target specs files...")?;
    }

    let outcomes = write_spec_files(
        config,
        &writer,
        &ctx,
        selection.root.as_ref(),
        diagnostics,
    );

    let mut message = DONE_MESSAGE;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) if cli.verbose => writeln!(
                out,
                "Wrote {} specs to '{}'",
                outcome.target,
                outcome.path.display()
            )?,
            Ok(()) => {}
            Err(e) if e.is_permission_denied() => message = PERMISSION_MESSAGE,
            Err(_) => {}
        }
    }

    if report {
        writeln!(out, "{}", message)?;
    }

    out.flush()?;
    Ok(())
}
