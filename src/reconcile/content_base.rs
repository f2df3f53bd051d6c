use std::borrow::Cow;

use tracing::debug;

use super::filters::public_path_portion;
use super::segments::{selector_segments, trailing_match};
use super::style::PathStyle;
use crate::config::BuildConfig;

/// Directory a development server should serve as its document root.
///
/// This is the output path with the public path (or the manifest key prefix, when set)
/// removed from its end: `/tmp/public/build` served under `/build/` gives `/tmp/public`.
/// The output path's own separator convention is kept.
///
/// Never fails. When the two paths cannot be lined up the output path is returned unchanged.
pub fn content_base(config: &BuildConfig) -> String {
    let selector = match config.manifest_key_prefix.as_deref() {
        Some(prefix) => Cow::Borrowed(prefix),
        None => public_path_portion(&config.public_path),
    };

    let needle = selector_segments(&selector);
    if needle.is_empty() {
        return config.output_path.clone();
    }

    let output = PathStyle::detect(&config.output_path).split(&config.output_path);
    match trailing_match(&output.segments, &needle) {
        Some(consumed) => {
            let base = output.join_prefix(output.segments.len() - consumed);
            debug!(
                output_path = %config.output_path,
                selector = %selector,
                content_base = %base,
                "resolved content base"
            );
            base
        }
        None => {
            debug!(
                output_path = %config.output_path,
                selector = %selector,
                "selector does not match the end of the output path, serving the output path"
            );
            config.output_path.clone()
        }
    }
}
