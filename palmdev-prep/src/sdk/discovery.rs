//! PalmDev tree scanning.
//!
//! A [`DiscoveryContext`] accumulates roots across every scanned tree. It owns
//! the string store, the ordered generic roots, and an arena of SDK roots
//! indexed by canonical key.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::key::{canonical_key, canonical_key_os, matches_prefix, SDK_DIR_PREFIX};
use super::root::Root;
use crate::diagnostics::Diagnostics;
use crate::intern::{Interned, StringStore};

/// What happened to one `sdk-*` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Registered as the SDK for its key.
    Registered(Root),

    /// Not probed: an SDK with the same key was registered earlier.
    Shadowed {
        /// Path of the registered SDK that hides this one.
        by: Interned,
    },

    /// Discarded because it has no header subdirectory.
    Invalid(Root),
}

/// One `sdk-*` directory seen during a scan.
#[derive(Debug, Clone)]
pub struct SdkEntry {
    /// Directory name as found on disk, byte for byte.
    pub name: OsString,

    /// Canonical key derived from the name.
    pub key: Interned,

    /// Whether it was used.
    pub outcome: EntryOutcome,
}

/// Record of one scanned tree, in processing order.
#[derive(Debug, Clone)]
pub struct TreeScan {
    /// The scanned directory.
    pub prefix: Interned,

    /// Every `sdk-*` directory found, sorted by name.
    pub entries: Vec<SdkEntry>,

    /// SDK-neutral material in the tree itself, if any.
    pub generic: Option<Root>,
}

/// Accumulated discovery state for one run.
#[derive(Debug, Default)]
pub struct DiscoveryContext {
    store: StringStore,
    generic_roots: Vec<Root>,
    sdk_roots: Vec<Root>,
    sdk_index: HashMap<Interned, usize>,
}

impl DiscoveryContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generic roots, in scan order.
    pub fn generic_roots(&self) -> &[Root] {
        &self.generic_roots
    }

    /// Registered SDK roots, in registration order.
    pub fn sdk_roots(&self) -> &[Root] {
        &self.sdk_roots
    }

    /// Look up a registered SDK by name; the name is canonicalised first.
    pub fn find_sdk(&self, name: &str) -> Option<&Root> {
        self.sdk_index
            .get(OsStr::new(canonical_key(name)))
            .map(|&index| &self.sdk_roots[index])
    }

    /// Scan the primary tree, then each extra tree.
    ///
    /// A missing primary tree is skipped silently. An extra path that is not
    /// an existing directory is counted as a warning and skipped. Extra paths
    /// are made absolute so the generated specs work from any directory.
    pub fn scan_all(
        &mut self,
        primary: &Path,
        extras: &[PathBuf],
        diagnostics: &mut Diagnostics,
    ) -> Vec<TreeScan> {
        let mut scans = Vec::new();

        match self.scan_tree(primary) {
            Some(scan) => scans.push(scan),
            None => debug!(path = %primary.display(), "Primary PalmDev tree not present"),
        }

        for extra in extras {
            if let Some(reason) = not_a_directory(extra) {
                diagnostics.warning(format!("can't open '{}': {}", extra.display(), reason));
                continue;
            }

            let path = std::path::absolute(extra).unwrap_or_else(|_| extra.clone());
            match self.scan_tree(&path) {
                Some(scan) => scans.push(scan),
                None => diagnostics.warning(format!("can't open '{}'", extra.display())),
            }
        }

        scans
    }

    /// Scan one tree, registering its SDKs and generic material.
    ///
    /// Returns `None` without touching the collections if `prefix` cannot be
    /// read as a directory.
    pub fn scan_tree(&mut self, prefix: &Path) -> Option<TreeScan> {
        let dir_entries = match fs::read_dir(prefix) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(path = %prefix.display(), error = %e, "Cannot open tree");
                return None;
            }
        };

        let mut names: Vec<OsString> = dir_entries
            .flatten()
            .map(|entry| entry.file_name())
            .filter(|name| matches_prefix(SDK_DIR_PREFIX, name))
            .filter(|name| prefix.join(name).is_dir())
            .collect();
        names.sort();

        let prefix_handle = self.store.intern(prefix);
        let mut entries = Vec::with_capacity(names.len());

        for name in names {
            let outcome = self.consider_sdk(prefix, &name);
            let key = self.store.intern(canonical_key_os(&name));
            entries.push(SdkEntry { name, key, outcome });
        }

        let generic = Root::probe(prefix_handle.clone());
        let generic = if generic.has_material() {
            debug!(path = %prefix.display(), "Found SDK-neutral material");
            self.generic_roots.push(generic.clone());
            Some(generic)
        } else {
            None
        };

        Some(TreeScan {
            prefix: prefix_handle,
            entries,
            generic,
        })
    }

    /// Decide the fate of one `sdk-*` directory.
    fn consider_sdk(&mut self, prefix: &Path, name: &OsStr) -> EntryOutcome {
        let key = canonical_key_os(name);

        if let Some(&index) = self.sdk_index.get(key) {
            let by = self.sdk_roots[index].path_handle().clone();
            debug!(sdk = ?name, ?key, hidden_by = ?by, "SDK shadowed");
            return EntryOutcome::Shadowed { by };
        }

        let path = self.store.intern(prefix.join(name));
        let root = Root::probe(path);

        if !root.has_headers() {
            debug!(sdk = ?name, "SDK has no headers, ignoring");
            return EntryOutcome::Invalid(root);
        }

        let key = self.store.intern(key);
        let root = root.with_key(key.clone());
        debug!(sdk = ?name, ?key, "Registered SDK");

        self.sdk_index.insert(key, self.sdk_roots.len());
        self.sdk_roots.push(root.clone());
        EntryOutcome::Registered(root)
    }
}

/// Why `path` cannot be scanned, or `None` if it is a readable directory.
fn not_a_directory(path: &Path) -> Option<String> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => None,
        Ok(_) => Some("Not a directory".to_string()),
        Err(e) => Some(e.to_string()),
    }
}
