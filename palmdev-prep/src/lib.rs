//! palmdev-prep - Palm OS SDK discovery and GCC spec generation
//!
//! This library scans PalmDev trees for installed SDKs, decides which SDK
//! version is the default, and renders the GCC spec fragments that tell the
//! compiler driver where each SDK's headers and libraries live.
//!
//! # Architecture
//!
//! ```text
//! search roots ──► DiscoveryContext ──► TreeScan ──► report (optional)
//!                        │
//!                        ├──► select_default ──► Selection
//!                        │                          │
//!                        └──────────► SpecWriter ◄──┘ ──► specs files / stdout
//! ```
//!
//! # Example
//!
//! ```no_run
//! use palmdev_prep::diagnostics::Diagnostics;
//! use palmdev_prep::sdk::{select_default, DiscoveryContext};
//! use palmdev_prep::specs::SpecWriter;
//! use std::path::{Path, PathBuf};
//!
//! let mut diagnostics = Diagnostics::new();
//! let mut ctx = DiscoveryContext::new();
//! ctx.scan_all(Path::new("/opt/palmdev"), &[PathBuf::from("/home/me/sdks")], &mut diagnostics);
//!
//! let selection = select_default(Some("4.0"), &ctx);
//!
//! let writer = SpecWriter::new(Some("m68k-palmos-coff"));
//! writer
//!     .write_specs(&ctx, selection.root.as_ref(), &mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod config;
pub mod diagnostics;
pub mod install;
pub mod intern;
pub mod report;
pub mod sdk;
pub mod specs;
