//! Helpers shared by the commands.

use palmdev_prep::config::PrepConfig;

use crate::cli::Cli;
use crate::error::CliError;

/// Resolve configuration: CLI options take precedence, then the config file,
/// then built-in defaults.
pub fn resolve_config(cli: &Cli) -> Result<PrepConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => PrepConfig::load_from(path)?,
        None => PrepConfig::load()?,
    };

    if let Some(prefix) = &cli.palmdev_prefix {
        config = config.with_palmdev_prefix(prefix);
    }
    if let Some(prefix) = &cli.exec_prefix {
        config = config.with_exec_prefix(prefix);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        std::fs::write(
            &path,
            "[paths]\npalmdev_prefix = /srv/palmdev\nexec_prefix = /srv/gcc\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "palmdev-prep",
            "--config",
            path.to_str().unwrap(),
            "--exec-prefix",
            "/tmp/gcc",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.palmdev_prefix, PathBuf::from("/srv/palmdev"));
        assert_eq!(config.exec_prefix, PathBuf::from("/tmp/gcc"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let cli =
            Cli::try_parse_from(["palmdev-prep", "--config", "/nonexistent/config.ini"]).unwrap();

        assert!(matches!(resolve_config(&cli), Err(CliError::Config(_))));
    }
}
