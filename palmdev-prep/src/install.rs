//! Installing and removing per-target specs files.
//!
//! Each target's specs file is handled independently: a destination that
//! cannot be written is recorded and the remaining targets are still
//! processed.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::PrepConfig;
use crate::diagnostics::Diagnostics;
use crate::sdk::{DiscoveryContext, Root};
use crate::specs::SpecWriter;

/// Errors touching a specs file.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The specs file could not be created or written.
    #[error("can't write to '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The specs file exists but could not be removed.
    #[error("can't remove '{}': {}", .path.display(), .source)]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstallError {
    /// Whether the failure was a permissions problem.
    pub fn is_permission_denied(&self) -> bool {
        let source = match self {
            InstallError::Write { source, .. } | InstallError::Remove { source, .. } => source,
        };
        source.kind() == io::ErrorKind::PermissionDenied
    }
}

/// Location of the specs file GCC reads for `target`.
pub fn specs_file_path(exec_prefix: &Path, target: &str) -> PathBuf {
    exec_prefix.join(target).join("specs")
}

/// Result of installing one target's specs file.
#[derive(Debug)]
pub struct WriteOutcome {
    pub target: String,
    pub path: PathBuf,
    pub result: Result<(), InstallError>,
}

/// Result of removing one target's specs file.
#[derive(Debug)]
pub struct RemoveOutcome {
    pub path: PathBuf,
    /// `Ok(true)` if a file was removed, `Ok(false)` if there was none.
    pub result: Result<bool, InstallError>,
}

/// Write the rendered specs to `path`, replacing any previous file.
pub fn install_specs(
    path: &Path,
    writer: &SpecWriter,
    ctx: &DiscoveryContext,
    default_sdk: Option<&Root>,
) -> Result<(), InstallError> {
    let to_error = |source| InstallError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    writer
        .write_specs(ctx, default_sdk, &mut out)
        .map_err(to_error)?;
    out.flush().map_err(to_error)
}

/// Install specs for every configured target.
///
/// Failures are counted as errors in `diagnostics`.
pub fn write_spec_files(
    config: &PrepConfig,
    writer: &SpecWriter,
    ctx: &DiscoveryContext,
    default_sdk: Option<&Root>,
    diagnostics: &mut Diagnostics,
) -> Vec<WriteOutcome> {
    config
        .targets
        .iter()
        .map(|target| {
            let path = specs_file_path(&config.exec_prefix, target);
            let result = install_specs(&path, writer, ctx, default_sdk);

            match &result {
                Ok(()) => info!(target = %target, path = %path.display(), "Wrote specs"),
                Err(e) => diagnostics.error(e),
            }

            WriteOutcome {
                target: target.clone(),
                path,
                result,
            }
        })
        .collect()
}

/// Remove a specs file; a file that does not exist is not an error.
pub fn remove_specs(path: &Path) -> Result<bool, InstallError> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(false);
    }

    fs::remove_file(path).map_err(|source| InstallError::Remove {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Remove the specs files of every configured target.
///
/// Failures are counted as warnings in `diagnostics`.
pub fn remove_spec_files(config: &PrepConfig, diagnostics: &mut Diagnostics) -> Vec<RemoveOutcome> {
    config
        .targets
        .iter()
        .map(|target| {
            let path = specs_file_path(&config.exec_prefix, target);
            let result = remove_specs(&path);

            match &result {
                Ok(true) => info!(path = %path.display(), "Removed specs"),
                Ok(false) => {}
                Err(e) => diagnostics.warning(e),
            }

            RemoveOutcome { path, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(exec_prefix: &Path, targets: &[&str]) -> PrepConfig {
        PrepConfig {
            targets: targets.iter().map(|t| t.to_string()).collect(),
            ..PrepConfig::default().with_exec_prefix(exec_prefix)
        }
    }

    #[test]
    fn test_specs_file_path() {
        assert_eq!(
            specs_file_path(Path::new("/usr/local/lib/gcc-lib"), "m68k-palmos"),
            PathBuf::from("/usr/local/lib/gcc-lib/m68k-palmos/specs")
        );
    }

    #[test]
    fn test_write_spec_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("m68k-palmos")).unwrap();
        let config = config_for(temp.path(), &["m68k-palmos"]);
        let ctx = DiscoveryContext::new();
        let mut diagnostics = Diagnostics::new();

        let outcomes = write_spec_files(
            &config,
            &SpecWriter::new(None),
            &ctx,
            None,
            &mut diagnostics,
        );

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_ok());
        assert!(!diagnostics.has_problems());

        let written = std::fs::read_to_string(temp.path().join("m68k-palmos/specs")).unwrap();
        assert!(written.starts_with("*cpp:\n"));
    }

    #[test]
    fn test_unwritable_destination_does_not_stop_others() {
        let temp = TempDir::new().unwrap();
        // No directory for "missing-target", so creating its specs file fails
        std::fs::create_dir_all(temp.path().join("m68k-palmos")).unwrap();
        let config = config_for(temp.path(), &["missing-target", "m68k-palmos"]);
        let ctx = DiscoveryContext::new();
        let mut diagnostics = Diagnostics::new();

        let outcomes = write_spec_files(
            &config,
            &SpecWriter::new(None),
            &ctx,
            None,
            &mut diagnostics,
        );

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0].result, Err(InstallError::Write { .. })));
        assert!(outcomes[1].result.is_ok());
        assert_eq!(diagnostics.errors(), 1);
        assert!(temp.path().join("m68k-palmos/specs").exists());
    }

    #[test]
    fn test_remove_spec_files() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("m68k-palmos")).unwrap();
        std::fs::write(temp.path().join("m68k-palmos/specs"), b"*cpp:\n").unwrap();
        let config = config_for(temp.path(), &["m68k-palmos", "absent"]);
        let mut diagnostics = Diagnostics::new();

        let outcomes = remove_spec_files(&config, &mut diagnostics);

        assert!(matches!(outcomes[0].result, Ok(true)));
        assert!(matches!(outcomes[1].result, Ok(false)));
        assert!(!temp.path().join("m68k-palmos/specs").exists());
        assert!(!diagnostics.has_problems());
    }

    #[test]
    fn test_remove_failure_is_warning() {
        let temp = TempDir::new().unwrap();
        // A directory where the specs file should be cannot be removed as a file
        std::fs::create_dir_all(temp.path().join("m68k-palmos/specs")).unwrap();
        let config = config_for(temp.path(), &["m68k-palmos"]);
        let mut diagnostics = Diagnostics::new();

        let outcomes = remove_spec_files(&config, &mut diagnostics);

        assert!(matches!(outcomes[0].result, Err(InstallError::Remove { .. })));
        assert_eq!(diagnostics.warnings(), 1);
    }

    #[test]
    fn test_permission_denied_detection() {
        let err = InstallError::Write {
            path: PathBuf::from("/usr/lib/specs"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_permission_denied());
        assert!(err.to_string().starts_with("can't write to '/usr/lib/specs'"));

        let err = InstallError::Write {
            path: PathBuf::from("/usr/lib/specs"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!err.is_permission_denied());
    }
}
