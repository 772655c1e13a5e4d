//! Human-readable installation report.
//!
//! ```text
//! Checking SDKs in /opt/palmdev
//!   sdk-3.5        headers in 'include', libraries in 'lib'
//!   sdk-4          UNUSED -- hidden by /usr/local/palmdev/sdk-4
//!   and material in /opt/palmdev used regardless of SDK choice
//!     (common)     headers in 'include', no libraries
//!
//! When GCC is given no -palmos options, SDK '4' will be used by default
//! ```
//!
//! Names and paths are copied to the output as raw bytes.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::sdk::{EntryOutcome, Root, SdkEntry, SubdirKind, TreeScan};

const NAME_WIDTH: usize = 13;

/// Describe what a root provides.
pub fn describe_root(root: &Root) -> String {
    let headers = match root.subdir(SubdirKind::Headers) {
        Some(dir) => format!("headers in '{}'", dir),
        None => "no headers".to_string(),
    };
    let libraries = match root.subdir(SubdirKind::Libraries) {
        Some(dir) => format!("libraries in '{}'", dir),
        None => "no libraries".to_string(),
    };
    format!("{}, {}", headers, libraries)
}

/// Describe the fate of one SDK directory.
pub fn describe_entry(entry: &SdkEntry) -> Vec<u8> {
    match &entry.outcome {
        EntryOutcome::Shadowed { by } => {
            let mut status = b"UNUSED -- hidden by ".to_vec();
            status.extend_from_slice(by.as_bytes());
            status
        }
        EntryOutcome::Invalid(_) => b"INVALID -- no headers".to_vec(),
        EntryOutcome::Registered(root) => describe_root(root).into_bytes(),
    }
}

/// `  <name padded to 13 bytes>\t<status>`
fn write_line<W: Write>(out: &mut W, name: &[u8], status: &[u8]) -> io::Result<()> {
    out.write_all(b"  ")?;
    out.write_all(name)?;
    for _ in name.len()..NAME_WIDTH {
        out.write_all(b" ")?;
    }
    out.write_all(b"\t")?;
    out.write_all(status)?;
    out.write_all(b"\n")
}

fn write_path<W: Write>(out: &mut W, before: &str, path: &OsStr, after: &str) -> io::Result<()> {
    out.write_all(before.as_bytes())?;
    out.write_all(path.as_bytes())?;
    out.write_all(after.as_bytes())
}

/// Write the report block for one scanned tree.
pub fn write_tree_scan<W: Write>(out: &mut W, scan: &TreeScan) -> io::Result<()> {
    write_path(out, "Checking SDKs in ", &scan.prefix, "\n")?;

    for entry in &scan.entries {
        write_line(out, entry.name.as_bytes(), &describe_entry(entry))?;
    }
    if scan.entries.is_empty() {
        writeln!(out, "  (none)")?;
    }

    if let Some(generic) = &scan.generic {
        write_path(
            out,
            "  and material in ",
            &scan.prefix,
            " used regardless of SDK choice\n",
        )?;
        write_line(out, b"  (common)", describe_root(generic).as_bytes())?;
    }

    writeln!(out)
}

/// Write the notice naming an automatically chosen default SDK.
pub fn write_default_notice<W: Write>(out: &mut W, key: &OsStr) -> io::Result<()> {
    write_path(
        out,
        "When GCC is given no -palmos options, SDK '",
        key,
        "' will be used by default\n",
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::DiscoveryContext;
    use tempfile::TempDir;

    fn render(scan: &TreeScan) -> String {
        let mut buf = Vec::new();
        write_tree_scan(&mut buf, scan).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_lists_each_outcome() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::create_dir_all(first.path().join("sdk-4").join("include")).unwrap();
        std::fs::create_dir_all(second.path().join("sdk-2").join("lib")).unwrap();
        std::fs::create_dir_all(second.path().join("sdk-3.5").join("Incs")).unwrap();
        std::fs::create_dir_all(second.path().join("sdk-3.5").join("lib")).unwrap();
        std::fs::create_dir_all(second.path().join("sdk-4.0").join("include")).unwrap();

        let mut ctx = DiscoveryContext::new();
        ctx.scan_tree(first.path()).unwrap();
        let scan = ctx.scan_tree(second.path()).unwrap();

        let expected = format!(
            "Checking SDKs in {second}\n\
             \x20 sdk-2        \tINVALID -- no headers\n\
             \x20 sdk-3.5      \theaders in 'Incs', libraries in 'lib'\n\
             \x20 sdk-4.0      \tUNUSED -- hidden by {first}/sdk-4\n\
             \n",
            first = first.path().display(),
            second = second.path().display(),
        );
        assert_eq!(render(&scan), expected);
    }

    #[test]
    fn test_report_empty_tree_with_common_material() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("include")).unwrap();

        let mut ctx = DiscoveryContext::new();
        let scan = ctx.scan_tree(temp.path()).unwrap();

        let expected = format!(
            "Checking SDKs in {t}\n\
             \x20 (none)\n\
             \x20 and material in {t} used regardless of SDK choice\n\
             \x20   (common)   \theaders in 'include', no libraries\n\
             \n",
            t = temp.path().display(),
        );
        assert_eq!(render(&scan), expected);
    }

    #[test]
    fn test_default_notice() {
        let mut buf = Vec::new();
        write_default_notice(&mut buf, OsStr::new("4")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "When GCC is given no -palmos options, SDK '4' will be used by default\n\n"
        );
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_report_keeps_non_utf8_name() {
        let temp = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"sdk-4\xff");
        std::fs::create_dir_all(temp.path().join(name).join("include")).unwrap();

        let mut ctx = DiscoveryContext::new();
        let scan = ctx.scan_tree(temp.path()).unwrap();

        let mut buf = Vec::new();
        write_tree_scan(&mut buf, &scan).unwrap();

        let mut expected = b"  sdk-4\xff       \t".to_vec();
        expected.extend_from_slice(b"headers in 'include', no libraries\n");
        assert!(buf.windows(expected.len()).any(|window| window == expected));
    }
}
