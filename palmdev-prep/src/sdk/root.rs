//! SDK and generic roots.

use std::ffi::OsStr;
use std::path::Path;

use crate::intern::Interned;

/// The two kinds of material a root can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubdirKind {
    /// Header files, passed to the preprocessor.
    Headers,
    /// Libraries, passed to the linker.
    Libraries,
}

impl SubdirKind {
    /// Both kinds, in the order fragments are written.
    pub const ALL: [SubdirKind; 2] = [SubdirKind::Headers, SubdirKind::Libraries];

    /// Subdirectory names to probe, in priority order.
    ///
    /// The second name of each list is the layout used by older SDK installers.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            SubdirKind::Headers => &["include", "Incs"],
            SubdirKind::Libraries => &["lib", "GCC Libraries"],
        }
    }
}

/// A directory tree that may contribute headers and/or libraries.
///
/// Either a real SDK (e.g. `/opt/palmdev/sdk-3.5`, carrying a key) or the
/// SDK-neutral part of a PalmDev tree (e.g. `/opt/palmdev`, no key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    path: Interned,
    header_subdir: Option<&'static str>,
    lib_subdir: Option<&'static str>,
    key: Option<Interned>,
}

impl Root {
    /// Probe `path` for header and library subdirectories.
    pub fn probe(path: Interned) -> Self {
        let dir = Path::new(&*path);
        let header_subdir = probe_subdir(dir, SubdirKind::Headers);
        let lib_subdir = probe_subdir(dir, SubdirKind::Libraries);

        Self {
            path,
            header_subdir,
            lib_subdir,
            key: None,
        }
    }

    pub(crate) fn with_key(mut self, key: Interned) -> Self {
        self.key = Some(key);
        self
    }

    /// Full path of the root directory.
    pub fn path(&self) -> &Path {
        Path::new(&*self.path)
    }

    /// Interned path handle.
    pub fn path_handle(&self) -> &Interned {
        &self.path
    }

    /// Name of the subdirectory holding material of `kind`, if any.
    pub fn subdir(&self, kind: SubdirKind) -> Option<&'static str> {
        match kind {
            SubdirKind::Headers => self.header_subdir,
            SubdirKind::Libraries => self.lib_subdir,
        }
    }

    /// Canonical SDK key; `None` for generic roots.
    pub fn key(&self) -> Option<&OsStr> {
        self.key.as_deref()
    }

    /// Whether the root has a header subdirectory.
    pub fn has_headers(&self) -> bool {
        self.header_subdir.is_some()
    }

    /// Whether the root contributes anything at all.
    pub fn has_material(&self) -> bool {
        self.header_subdir.is_some() || self.lib_subdir.is_some()
    }
}

/// First candidate name of `kind` that exists as a directory under `dir`.
fn probe_subdir(dir: &Path, kind: SubdirKind) -> Option<&'static str> {
    kind.candidates()
        .iter()
        .copied()
        .find(|name| dir.join(name).is_dir())
}
