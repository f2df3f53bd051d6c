//! Build configuration snapshot consumed by the path reconciler.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name picked up by [`BuildConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "public-paths.json";

/// Immutable snapshot of the three settings the reconciler reads.
///
/// The owning build tool is free to change its own configuration between
/// calls; it hands the reconciler a fresh snapshot each time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Absolute directory the bundler writes built assets into.
    pub output_path: String,
    /// Root-relative path, absolute URL, or relative path assets are served under.
    pub public_path: String,
    /// Explicit manifest key prefix that wins over anything derived from `public_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_key_prefix: Option<String>,
}

impl BuildConfig {
    /// Snapshot without a manifest key prefix override.
    pub fn new(output_path: impl Into<String>, public_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            public_path: public_path.into(),
            manifest_key_prefix: None,
        }
    }

    /// Return the snapshot with an explicit manifest key prefix.
    pub fn with_manifest_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.manifest_key_prefix = Some(prefix.into());
        self
    }

    /// Read a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("build config not found at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse build config {}", path.display()))
    }

    /// Look for [`DEFAULT_CONFIG_FILE`] in `dir`.
    ///
    /// A missing file yields `Ok(None)`; a file that exists but cannot be parsed is an error.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.is_file() {
            return Ok(None);
        }
        Self::from_path(&candidate).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_camel_case_fields() {
        let config: BuildConfig = serde_json::from_str(
            r#"{"outputPath": "/tmp/public/build", "publicPath": "/build/", "manifestKeyPrefix": "build/"}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            BuildConfig::new("/tmp/public/build", "/build/").with_manifest_key_prefix("build/")
        );
    }

    #[test]
    fn manifest_key_prefix_is_optional() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"outputPath": "/srv/app/build", "publicPath": "/build"}"#)
                .unwrap();
        assert_eq!(config.manifest_key_prefix, None);
    }

    #[test]
    fn discover_returns_none_without_config_file() -> Result<()> {
        let dir = tempdir()?;
        assert!(BuildConfig::discover(dir.path())?.is_none());
        Ok(())
    }

    #[test]
    fn discover_reads_config_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"outputPath": "/var/www/public/assets", "publicPath": "https://cdn.example.com/assets"}"#,
        )?;

        let config = BuildConfig::discover(dir.path())?.expect("config should be discovered");
        assert_eq!(config.output_path, "/var/www/public/assets");
        assert_eq!(config.public_path, "https://cdn.example.com/assets");
        Ok(())
    }

    #[test]
    fn reports_the_offending_file_on_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = BuildConfig::discover(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse build config"));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
