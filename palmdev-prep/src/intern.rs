//! Run-lifetime name interning.
//!
//! Every path and SDK key produced during discovery is stored once in a
//! [`StringStore`]. Handles are reference-counted, so equal names share one
//! allocation and comparing two handles never re-reads the filesystem names.
//!
//! Names are kept as [`OsStr`], exactly as the filesystem returned them.
//! Nothing here assumes UTF-8.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::rc::Rc;

/// A deduplicated name handle owned by a [`StringStore`].
pub type Interned = Rc<OsStr>;

/// Deduplicating name arena.
///
/// There is no eviction: names live until the store and all handles are
/// dropped together at the end of the run.
#[derive(Debug, Default)]
pub struct StringStore {
    strings: HashSet<Rc<OsStr>>,
}

impl StringStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared handle for `s`, inserting it on first use.
    pub fn intern(&mut self, s: impl AsRef<OsStr>) -> Interned {
        let s = s.as_ref();
        if let Some(existing) = self.strings.get(s) {
            return Rc::clone(existing);
        }

        let handle: Rc<OsStr> = Rc::from(s);
        self.strings.insert(Rc::clone(&handle));
        handle
    }

    /// Number of distinct names held.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the store holds no names.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
