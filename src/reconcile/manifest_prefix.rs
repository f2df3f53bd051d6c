use tracing::debug;

use super::filters::is_external_url;
use super::segments::{selector_segments, trailing_match};
use super::style::PathStyle;
use crate::config::BuildConfig;
use crate::error::{AmbiguityReason, AmbiguousPrefixError};

/// Prefix prepended to the keys written into `manifest.json`.
///
/// An explicit `manifest_key_prefix` always wins and is only normalised. Otherwise the public
/// path must be a trailing part of the output path (`/build/` for `/tmp/public/build` gives
/// `build/`). External URLs and public paths that do
/// not line up with the output path are rejected, since the prefix would be a guess.
///
/// Non-empty prefixes never start with `/` and end with exactly one `/`; repeated slashes
/// inside an explicit prefix are collapsed (`/a//b` gives `a/b/`). The one exception is a root
/// public path or override (`/` or empty), which yields the empty prefix `""` so manifest keys
/// are left unprefixed.
pub fn manifest_key_prefix(config: &BuildConfig) -> Result<String, AmbiguousPrefixError> {
    if let Some(prefix) = config.manifest_key_prefix.as_deref() {
        return Ok(normalise_explicit_prefix(prefix));
    }

    if is_external_url(&config.public_path) {
        debug!(public_path = %config.public_path, "external public path needs an explicit manifest key prefix");
        return Err(AmbiguityReason::ExternalPublicPath {
            public_path: config.public_path.clone(),
        }
        .into());
    }

    let needle = selector_segments(&config.public_path);
    let output = PathStyle::detect(&config.output_path).split(&config.output_path);
    if trailing_match(&output.segments, &needle).is_none() {
        debug!(
            output_path = %config.output_path,
            public_path = %config.public_path,
            "public path does not match the end of the output path"
        );
        return Err(AmbiguityReason::OutputPathMismatch {
            output_path: config.output_path.clone(),
            public_path: config.public_path.clone(),
        }
        .into());
    }

    Ok(with_trailing_slash(&needle.join("/")))
}

/// Join a manifest key prefix and an asset path into a manifest key.
///
/// Backslashes in the asset path are normalised to `/` so keys look the same on every platform.
pub fn prefixed_manifest_key(prefix: &str, asset_path: &str) -> String {
    let asset_path = asset_path.replace('\\', "/");
    format!("{}{}", prefix, asset_path.trim_start_matches('/'))
}

fn normalise_explicit_prefix(prefix: &str) -> String {
    with_trailing_slash(&selector_segments(prefix).join("/"))
}

fn with_trailing_slash(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value}/")
    }
}
