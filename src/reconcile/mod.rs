//! Reconciling the output directory with the public path.
//!
//! The work is split the same way the manifest and dev-server consumers see it: splitting
//! output paths by their separator convention, matching `/`-delimited selectors against the
//! end of those paths, recognising external URLs, and the two derived values built on top.
//! Everything here is a pure function of a [`crate::BuildConfig`] snapshot.

mod content_base;
mod filters;
mod manifest_prefix;
mod segments;
mod style;

pub use content_base::content_base;
pub use filters::{is_external_url, public_path_portion};
pub use manifest_prefix::{manifest_key_prefix, prefixed_manifest_key};
pub use segments::{is_trailing_subsequence, selector_segments, trailing_match};
pub use style::{PathStyle, SplitPath};
