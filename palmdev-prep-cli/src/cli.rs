//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "palmdev-prep",
    version,
    about = "Report on installed Palm OS SDKs and generate GCC specs for them",
    after_help = "Directories listed are scanned in addition to the primary PalmDev tree (/opt/palmdev unless configured otherwise)."
)]
pub struct Cli {
    /// Extra PalmDev trees to scan
    #[arg(value_name = "DIRECTORY")]
    pub directories: Vec<PathBuf>,

    /// Set default SDK
    #[arg(short = 'd', long = "default", value_name = "SDK")]
    pub default_sdk: Option<String>,

    /// Remove all files installed by palmdev-prep
    #[arg(short = 'r', long = "remove", default_value_t = false)]
    pub remove: bool,

    /// Write specs for TARGET to standard output
    #[arg(long = "dump-specs", value_name = "TARGET")]
    pub dump_specs: Option<String>,

    /// Suppress display of installation analysis
    #[arg(short = 'q', long = "quiet", visible_alias = "silent", default_value_t = false)]
    pub quiet: bool,

    /// Display extra information about actions taken
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/palmdev-prep/config.ini)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Primary PalmDev tree, overriding the config file
    #[arg(long = "palmdev-prefix", value_name = "PATH")]
    pub palmdev_prefix: Option<PathBuf>,

    /// GCC exec prefix where specs files are installed, overriding the config file
    #[arg(long = "exec-prefix", value_name = "PATH")]
    pub exec_prefix: Option<PathBuf>,
}

impl Cli {
    /// Whether the installation analysis should be printed.
    pub fn report(&self) -> bool {
        !self.quiet
    }
}
