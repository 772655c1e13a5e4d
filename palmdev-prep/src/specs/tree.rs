//! Recursive directory listing.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

/// Lazy depth-first walk over a directory and all of its subdirectories.
///
/// The start directory is yielded first, then each subdirectory in pre-order
/// with siblings sorted by name. Symbolic links are not followed. A missing
/// start directory yields nothing; unreadable subdirectories are yielded but
/// not descended into.
#[derive(Debug)]
pub struct DirTree {
    pending: Vec<PathBuf>,
}

impl DirTree {
    /// Start a walk at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let pending = if root.is_dir() { vec![root] } else { Vec::new() };
        Self { pending }
    }
}

impl Iterator for DirTree {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let dir = self.pending.pop()?;

        let mut children: Vec<PathBuf> = match fs::read_dir(&dir) {
            Ok(entries) => entries
                .flatten()
                .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
                .map(|entry| entry.path())
                .collect(),
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "Cannot list directory");
                Vec::new()
            }
        };

        children.sort();
        self.pending.extend(children.into_iter().rev());

        Some(dir)
    }
}
