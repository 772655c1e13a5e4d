//! Spec fragment rendering.
//!
//! Paths and keys are written as the raw bytes the filesystem returned, so a
//! directory name that is not valid UTF-8 still reaches GCC unchanged.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use super::tree::DirTree;
use crate::sdk::{is_numeric_key, DiscoveryContext, Root, SubdirKind};

/// Spec name prefix for each kind of fragment.
fn spec_name(kind: SubdirKind) -> &'static str {
    match kind {
        SubdirKind::Headers => "cpp",
        SubdirKind::Libraries => "link",
    }
}

/// Driver option preceding each directory.
fn option(kind: SubdirKind) -> &'static str {
    match kind {
        SubdirKind::Headers => "-isystem ",
        SubdirKind::Libraries => "-L",
    }
}

/// Escape every whitespace byte with a backslash.
///
/// GCC splits spec options on whitespace, so `/opt/GCC Libraries`
/// must be written as `/opt/GCC\ Libraries` to stay one token.
pub fn escape_whitespace(path: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(path.len());
    for &b in path {
        // Same set as C isspace(): includes vertical tab
        if matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r') {
            escaped.push(b'\\');
        }
        escaped.push(b);
    }
    escaped
}

/// Write ` %{<switch>:%(<spec>_sdk_<key>)}`.
fn write_switch<W: Write>(out: &mut W, switch: &[&[u8]], spec: &str, key: &OsStr) -> io::Result<()> {
    out.write_all(b" %{")?;
    for part in switch {
        out.write_all(part)?;
    }
    write!(out, ":%({spec}_sdk_")?;
    out.write_all(key.as_bytes())?;
    out.write_all(b")}")
}

/// Renders discovered roots as GCC spec fragments.
#[derive(Debug, Clone, Default)]
pub struct SpecWriter {
    lib_target_subdir: Option<String>,
}

impl SpecWriter {
    /// Create a writer.
    ///
    /// `lib_target_subdir` is the sub-architecture directory appended below
    /// each library subdirectory (e.g. `m68k-palmos-coff`). Header
    /// directories never receive it.
    pub fn new(lib_target_subdir: Option<&str>) -> Self {
        Self {
            lib_target_subdir: lib_target_subdir.map(str::to_owned),
        }
    }

    /// Directories under `root` that become search-path entries for `kind`.
    pub fn directories(&self, root: &Root, kind: SubdirKind) -> DirTree {
        let Some(subdir) = root.subdir(kind) else {
            return DirTree::open(PathBuf::new());
        };

        let mut base = root.path().join(subdir);
        if kind == SubdirKind::Libraries {
            if let Some(target) = &self.lib_target_subdir {
                base.push(target);
            }
        }
        DirTree::open(base)
    }

    /// Write all fragments: per SDK the header then the library fragment,
    /// followed by the header and library dispatchers.
    pub fn write_specs<W: Write>(
        &self,
        ctx: &DiscoveryContext,
        default_sdk: Option<&Root>,
        out: &mut W,
    ) -> io::Result<()> {
        for sdk in ctx.sdk_roots() {
            for kind in SubdirKind::ALL {
                self.write_sdk_spec(out, sdk, kind)?;
            }
        }

        for kind in SubdirKind::ALL {
            self.write_main_spec(out, ctx, default_sdk, kind)?;
        }

        Ok(())
    }

    /// Render all fragments into a byte buffer.
    pub fn render(&self, ctx: &DiscoveryContext, default_sdk: Option<&Root>) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_specs(ctx, default_sdk, &mut buf);
        buf
    }

    fn write_dirtree<W: Write>(&self, out: &mut W, root: &Root, kind: SubdirKind) -> io::Result<()> {
        for dir in self.directories(root, kind) {
            write!(out, " {}", option(kind))?;
            out.write_all(&escape_whitespace(dir.as_os_str().as_bytes()))?;
        }
        Ok(())
    }

    fn write_sdk_spec<W: Write>(&self, out: &mut W, sdk: &Root, kind: SubdirKind) -> io::Result<()> {
        let key = sdk.key().unwrap_or_default();

        write!(out, "*{}_sdk_", spec_name(kind))?;
        out.write_all(key.as_bytes())?;
        out.write_all(b":\n")?;
        self.write_dirtree(out, sdk, kind)?;
        out.write_all(b"\n\n")
    }

    fn write_main_spec<W: Write>(
        &self,
        out: &mut W,
        ctx: &DiscoveryContext,
        default_sdk: Option<&Root>,
        kind: SubdirKind,
    ) -> io::Result<()> {
        let spec = spec_name(kind);

        write!(out, "*{}:\n+ %{{!palmos-none:", spec)?;

        for root in ctx.generic_roots() {
            self.write_dirtree(out, root, kind)?;
        }

        for sdk in ctx.sdk_roots() {
            let key = sdk.key().unwrap_or_default();
            write_switch(out, &[b"palmos", key.as_bytes()], spec, key)?;
            if is_numeric_key(key) {
                write_switch(out, &[b"palmos", key.as_bytes(), b".0"], spec, key)?;
            }
        }

        if let Some(key) = default_sdk.and_then(Root::key) {
            write_switch(out, &[b"!palmos*", b" "], spec, key)?;
        }

        out.write_all(b"}\n\n")
    }
}
