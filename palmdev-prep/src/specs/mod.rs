//! GCC spec fragment generation.
//!
//! For each SDK the writer emits a `cpp_sdk_<key>` fragment listing its header
//! directories and a `link_sdk_<key>` fragment listing its library
//! directories. The `cpp` and `link` dispatcher fragments then add the
//! generic directories and select one SDK fragment from the `-palmos<key>`
//! options given to the driver:
//!
//! ```text
//! *cpp_sdk_4:
//!  -isystem /opt/palmdev/sdk-4/include -isystem /opt/palmdev/sdk-4/include/Core
//!
//! *link_sdk_4:
//!  -L/opt/palmdev/sdk-4/lib/m68k-palmos-coff
//!
//! *cpp:
//! + %{!palmos-none: -isystem /opt/palmdev/include %{palmos4:%(cpp_sdk_4)} %{palmos4.0:%(cpp_sdk_4)} %{!palmos*: %(cpp_sdk_4)}}
//!
//! *link:
//! + %{!palmos-none: -L/opt/palmdev/lib/m68k-palmos-coff %{palmos4:%(link_sdk_4)} %{palmos4.0:%(link_sdk_4)} %{!palmos*: %(link_sdk_4)}}
//! ```

mod tree;
mod writer;

pub use tree::DirTree;
pub use writer::{escape_whitespace, SpecWriter};
