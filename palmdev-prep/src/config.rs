//! Configuration for palmdev-prep.
//!
//! Settings are read from `config.ini` in the user's configuration directory
//! (e.g. `~/.config/palmdev-prep/config.ini`). Every setting is optional:
//!
//! ```ini
//! [paths]
//! palmdev_prefix = /opt/palmdev
//! exec_prefix = /usr/local/lib/gcc-lib
//!
//! [targets]
//! targets = m68k-palmos
//! lib_subdir = m68k-palmos-coff
//! ```
//!
//! Command-line options override the file.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Primary PalmDev tree, always scanned first.
pub const DEFAULT_PALMDEV_PREFIX: &str = "/opt/palmdev";

/// GCC's standard exec prefix; specs files live in `<prefix>/<target>/specs`.
pub const DEFAULT_EXEC_PREFIX: &str = "/usr/local/lib/gcc-lib";

/// Target whose specs file is installed.
pub const DEFAULT_TARGET: &str = "m68k-palmos";

/// Sub-architecture directory below each library directory.
pub const DEFAULT_LIB_SUBDIR: &str = "m68k-palmos-coff";

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or parsed.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// A setting has an unusable value.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepConfig {
    /// Primary PalmDev tree.
    pub palmdev_prefix: PathBuf,

    /// GCC exec prefix under which specs files are installed.
    pub exec_prefix: PathBuf,

    /// Targets to install specs for.
    pub targets: Vec<String>,

    /// Sub-architecture directory appended to library directories.
    pub lib_target_subdir: Option<String>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            palmdev_prefix: PathBuf::from(DEFAULT_PALMDEV_PREFIX),
            exec_prefix: PathBuf::from(DEFAULT_EXEC_PREFIX),
            targets: vec![DEFAULT_TARGET.to_string()],
            lib_target_subdir: Some(DEFAULT_LIB_SUBDIR.to_string()),
        }
    }
}

impl PrepConfig {
    /// Load from the default config file, or defaults if it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ini(&ini)
    }

    /// Build from parsed INI data, starting from the defaults.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(paths) = ini.section(Some("paths")) {
            if let Some(prefix) = paths.get("palmdev_prefix") {
                config.palmdev_prefix = non_empty_path("paths.palmdev_prefix", prefix)?;
            }
            if let Some(prefix) = paths.get("exec_prefix") {
                config.exec_prefix = non_empty_path("paths.exec_prefix", prefix)?;
            }
        }

        if let Some(targets) = ini.section(Some("targets")) {
            if let Some(list) = targets.get("targets") {
                let parsed: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned)
                    .collect();
                if parsed.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "targets.targets".to_string(),
                        reason: "at least one target is required".to_string(),
                    });
                }
                config.targets = parsed;
            }
            if let Some(subdir) = targets.get("lib_subdir") {
                let subdir = subdir.trim();
                config.lib_target_subdir = (!subdir.is_empty()).then(|| subdir.to_string());
            }
        }

        Ok(config)
    }

    /// Override the primary PalmDev tree.
    pub fn with_palmdev_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.palmdev_prefix = prefix.into();
        self
    }

    /// Override the GCC exec prefix.
    pub fn with_exec_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.exec_prefix = prefix.into();
        self
    }
}

fn non_empty_path(key: &str, value: &str) -> Result<PathBuf, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: "path must not be empty".to_string(),
        });
    }
    Ok(PathBuf::from(value))
}

/// Path of the user's config file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("palmdev-prep")
        .join("config.ini")
}
