//! Canonical SDK keys.
//!
//! SDK directories are named `[palmos]sdk-<version>`, and users request SDKs
//! on the command line by version. Both are reduced to the same canonical key
//! so that `sdk-4.0`, `PalmOS-SDK-4.0` and `4` all name one SDK.
//!
//! Directory names are matched on their raw bytes. A name that is not valid
//! UTF-8 still yields a key, made of the same bytes.

use std::ffi::OsStr;
use std::ops::Range;
use std::os::unix::ffi::OsStrExt;

/// Prefix (matched case-insensitively) that marks an SDK directory.
pub const SDK_DIR_PREFIX: &str = "sdk-";

const PALMOS_PREFIX: &str = "palmos";

/// Returns true if `name` starts with `prefix`, ignoring ASCII case.
///
/// `prefix` is expected to be lower case.
pub fn matches_prefix(prefix: &str, name: impl AsRef<OsStr>) -> bool {
    strip_prefix_ignore_case(name.as_ref().as_bytes(), prefix).is_some()
}

fn strip_prefix_ignore_case<'a>(name: &'a [u8], prefix: &str) -> Option<&'a [u8]> {
    let head = name.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        name.get(prefix.len()..)
    } else {
        None
    }
}

/// Byte range of the key within `name`.
///
/// Every cut falls next to an ASCII byte, so the range is valid for both
/// `str` and `OsStr` slicing.
fn key_range(name: &[u8]) -> Range<usize> {
    let mut rest = name;

    if let Some(stripped) = strip_prefix_ignore_case(rest, PALMOS_PREFIX) {
        rest = stripped.strip_prefix(b"-").unwrap_or(stripped);
    }
    if let Some(stripped) = strip_prefix_ignore_case(rest, SDK_DIR_PREFIX) {
        rest = stripped;
    }
    let rest = rest.strip_suffix(b".0").unwrap_or(rest);

    let start = rest.as_ptr() as usize - name.as_ptr() as usize;
    start..start + rest.len()
}

/// Derive the canonical key from an SDK directory name or a requested version.
///
/// Strips an optional `palmos` prefix (with one following `-`), an optional
/// `sdk-` prefix, then a single trailing `.0`.
///
/// Only one `.0` is removed, so the function is not idempotent on names
/// ending in `.0.0`: `sdk-4.0.0` gives `4.0`, which in turn gives `4`.
/// Such a directory answers to `-palmos4.0`, never to `-palmos4`.
///
/// # Examples
///
/// ```
/// use palmdev_prep::sdk::canonical_key;
///
/// assert_eq!(canonical_key("sdk-4.0"), "4");
/// assert_eq!(canonical_key("PalmOS-SDK-4.0"), "4");
/// assert_eq!(canonical_key("sdk-3.5"), "3.5");
/// assert_eq!(canonical_key("5r3"), "5r3");
/// assert_eq!(canonical_key("sdk-4.0.0"), "4.0");
/// ```
pub fn canonical_key(name: &str) -> &str {
    &name[key_range(name.as_bytes())]
}

/// [`canonical_key`] for a raw directory name.
pub fn canonical_key_os(name: &OsStr) -> &OsStr {
    let bytes = name.as_bytes();
    OsStr::from_bytes(&bytes[key_range(bytes)])
}

/// Whether a key consists only of decimal digits.
///
/// Numeric keys answer to both `-palmosN` and `-palmosN.0`.
pub fn is_numeric_key(key: impl AsRef<OsStr>) -> bool {
    key.as_ref().as_bytes().iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_key_equivalent_names() {
        assert_eq!(canonical_key("PalmOS-SDK-4.0"), "4");
        assert_eq!(canonical_key("sdk-4"), "4");
        assert_eq!(canonical_key("sdk-4.0"), "4");
        assert_eq!(canonical_key("SDK-4.0"), "4");
        assert_eq!(canonical_key("palmossdk-4"), "4");
        assert_eq!(canonical_key("4.0"), "4");
    }

    #[test]
    fn test_canonical_key_keeps_other_versions() {
        assert_eq!(canonical_key("sdk-3.5"), "3.5");
        assert_eq!(canonical_key("sdk-4.10"), "4.10");
        assert_eq!(canonical_key("sdk-beta"), "beta");
        assert_eq!(canonical_key("sdk-5r3"), "5r3");
    }

    #[test]
    fn test_canonical_key_strips_only_one_zero_suffix() {
        assert_eq!(canonical_key("sdk-4.0.0"), "4.0");
        // A second pass strips the next `.0`
        assert_eq!(canonical_key(canonical_key("sdk-4.0.0")), "4");
    }

    #[test]
    fn test_canonical_key_raw_bytes() {
        let name = OsStr::from_bytes(b"PalmOS-sdk-4\xff.0");
        assert_eq!(canonical_key_os(name).as_bytes(), b"4\xff");

        let plain = OsStr::from_bytes(b"sdk-4\xff");
        assert_eq!(canonical_key_os(plain).as_bytes(), b"4\xff");
    }

    #[test]
    fn test_canonical_key_os_matches_str() {
        for name in ["PalmOS-SDK-4.0", "sdk-3.5", "sdk-4.0.0", "", "palm", "beta"] {
            assert_eq!(canonical_key_os(OsStr::new(name)), canonical_key(name));
        }
    }

    #[test]
    fn test_canonical_key_short_names() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(canonical_key("sdk"), "sdk");
        assert_eq!(canonical_key("palm"), "palm");
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("sdk-", "sdk-4"));
        assert!(matches_prefix("sdk-", "SDK-4"));
        assert!(matches_prefix("sdk-", "Sdk-"));
        assert!(!matches_prefix("sdk-", "sdk"));
        assert!(!matches_prefix("sdk-", "palmos-sdk-4"));
        assert!(!matches_prefix("sdk-", "include"));
    }

    #[test]
    fn test_matches_prefix_multibyte_name() {
        assert!(!matches_prefix("sdk-", "sd\u{e9}-4"));
    }

    #[test]
    fn test_matches_prefix_non_utf8_name() {
        assert!(matches_prefix("sdk-", OsStr::from_bytes(b"sdk-4\xff")));
        assert!(!matches_prefix("sdk-", OsStr::from_bytes(b"\xffsdk-4")));
    }

    #[test]
    fn test_is_numeric_key() {
        assert!(is_numeric_key("4"));
        assert!(is_numeric_key("35"));
        assert!(!is_numeric_key("3.5"));
        assert!(!is_numeric_key("beta"));
        assert!(!is_numeric_key("5r3"));
    }

    proptest! {
        /// Canonicalising an already canonical key is a no-op, provided the
        /// name does not end in `.0.0`. Minor versions here start at 1, and
        /// the double-zero tail is covered by
        /// `test_canonical_key_strips_only_one_zero_suffix`.
        #[test]
        fn prop_canonical_key_idempotent_without_double_zero(
            major in 1u32..20,
            minor in proptest::option::of(1u32..10),
            zero in any::<bool>(),
        ) {
            let mut name = format!("sdk-{}", major);
            if let Some(minor) = minor {
                name.push_str(&format!(".{}", minor));
            }
            if zero {
                name.push_str(".0");
            }

            let key = canonical_key(&name);
            prop_assert_eq!(canonical_key(key), key);
        }

        /// Prefix case never changes the key.
        #[test]
        fn prop_canonical_key_case_insensitive_prefix(
            version in "[0-9]{1,2}(\\.[1-9])?",
            upper_palmos in any::<bool>(),
            upper_sdk in any::<bool>(),
        ) {
            let palmos = if upper_palmos { "PALMOS" } else { "palmos" };
            let sdk = if upper_sdk { "SDK-" } else { "sdk-" };

            let plain = format!("sdk-{}", version);
            let decorated = format!("{}{}{}", palmos, sdk, version);

            prop_assert_eq!(canonical_key(&decorated), canonical_key(&plain));
        }
    }
}
