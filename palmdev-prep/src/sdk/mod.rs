//! Palm OS SDK discovery.
//!
//! A PalmDev tree is a directory holding `sdk-*` subdirectories, one per
//! installed SDK version, plus optional SDK-neutral material of its own.
//!
//! # Layout
//!
//! ```text
//! /opt/palmdev/
//! ├── include/           # Generic headers, used regardless of SDK choice
//! ├── lib/               # Generic libraries
//! ├── sdk-3.5/           # SDK root, key "3.5"
//! │   ├── include/
//! │   └── lib/
//! └── sdk-4.0/           # SDK root, key "4"
//!     ├── Incs/          # Legacy header directory name
//!     └── GCC Libraries/ # Legacy library directory name
//! ```
//!
//! Several trees may be scanned in one run. The first tree to provide a given
//! canonical key wins; later SDKs with the same key are reported as shadowed.

mod discovery;
mod key;
mod root;
mod select;

pub use discovery::{DiscoveryContext, EntryOutcome, SdkEntry, TreeScan};
pub use key::{canonical_key, canonical_key_os, is_numeric_key, matches_prefix, SDK_DIR_PREFIX};
pub use root::{Root, SubdirKind};
pub use select::{select_default, Selection};
