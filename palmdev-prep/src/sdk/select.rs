//! Default SDK selection.
//!
//! The default SDK is the one GCC uses when no `-palmos<N>` option is given.

use std::ffi::OsStr;

use super::discovery::DiscoveryContext;
use super::root::Root;

/// Outcome of choosing the default SDK.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// The chosen SDK, if any SDK was found at all.
    pub root: Option<Root>,

    /// Whether the choice was made automatically (highest key).
    pub automatic: bool,

    /// A requested SDK name that matched nothing.
    pub unknown_request: Option<String>,
}

impl Selection {
    /// Key of the chosen SDK.
    pub fn key(&self) -> Option<&OsStr> {
        self.root.as_ref().and_then(Root::key)
    }
}

/// Choose the default SDK.
///
/// A requested name is canonicalised and looked up first. If it is absent
/// (or not given) the SDK with the byte-wise greatest key is chosen; on equal
/// keys the earliest registered SDK is kept.
pub fn select_default(requested: Option<&str>, ctx: &DiscoveryContext) -> Selection {
    let mut unknown_request = None;

    if let Some(name) = requested {
        match ctx.find_sdk(name) {
            Some(root) => {
                return Selection {
                    root: Some(root.clone()),
                    automatic: false,
                    unknown_request: None,
                }
            }
            None => unknown_request = Some(name.to_string()),
        }
    }

    let mut best: Option<&Root> = None;
    for sdk in ctx.sdk_roots() {
        match best {
            Some(current) if sdk.key() <= current.key() => {}
            _ => best = Some(sdk),
        }
    }

    Selection {
        root: best.cloned(),
        automatic: best.is_some(),
        unknown_request,
    }
}
