//! Command line front-end printing the derived paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};

use crate::config::BuildConfig;
use crate::reconcile::{content_base, manifest_key_prefix};

/// Arguments accepted by the `public-paths` binary.
#[derive(Debug, Parser)]
#[command(
    name = "public-paths",
    version,
    about = "Derive the dev-server content base and manifest key prefix from a build config"
)]
pub struct Cli {
    /// Value to print.
    #[command(subcommand)]
    pub command: Command,
}

/// Derived value to compute.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the directory a development server should serve.
    ContentBase(ConfigArgs),
    /// Print the prefix for keys in manifest.json.
    ManifestPrefix(ConfigArgs),
}

/// Build settings, read from a JSON file and overridden by flags.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// JSON build config (defaults to `public-paths.json` in the working directory, if present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Absolute directory built assets are written to.
    #[arg(long, value_name = "PATH")]
    pub output_path: Option<String>,
    /// Path or URL assets are served under.
    #[arg(long, value_name = "PATH_OR_URL")]
    pub public_path: Option<String>,
    /// Explicit prefix for manifest keys (e.g. build/).
    #[arg(long, value_name = "PREFIX")]
    pub manifest_key_prefix: Option<String>,
}

impl ConfigArgs {
    /// Merge the config file (explicit or discovered in `cwd`) with the flags.
    pub fn resolve(&self, cwd: &Path) -> Result<BuildConfig> {
        let file = match &self.config {
            Some(path) => Some(BuildConfig::from_path(&cwd.join(path))?),
            None => BuildConfig::discover(cwd)?,
        };

        let output_path = self
            .output_path
            .clone()
            .or_else(|| file.as_ref().map(|config| config.output_path.clone()))
            .ok_or_else(|| anyhow!("no output path configured; pass --output-path or set `outputPath`"))?;
        let public_path = self
            .public_path
            .clone()
            .or_else(|| file.as_ref().map(|config| config.public_path.clone()))
            .ok_or_else(|| anyhow!("no public path configured; pass --public-path or set `publicPath`"))?;
        let manifest_key_prefix = self
            .manifest_key_prefix
            .clone()
            .or_else(|| file.and_then(|config| config.manifest_key_prefix));

        Ok(BuildConfig {
            output_path,
            public_path,
            manifest_key_prefix,
        })
    }
}

/// Execute `cli` relative to `cwd` and return the line to print.
pub fn run(cli: &Cli, cwd: &Path) -> Result<String> {
    match &cli.command {
        Command::ContentBase(args) => {
            let config = args.resolve(cwd)?;
            Ok(content_base(&config))
        }
        Command::ManifestPrefix(args) => {
            let config = args.resolve(cwd)?;
            manifest_key_prefix(&config).context("failed to derive manifest key prefix")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("public-paths").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn prints_content_base_from_flags() -> Result<()> {
        let cwd = tempdir()?;
        let cli = parse(&[
            "content-base",
            "--output-path",
            "/tmp/public/build",
            "--public-path",
            "/build/",
        ]);
        assert_eq!(run(&cli, cwd.path())?, "/tmp/public");
        Ok(())
    }

    #[test]
    fn flags_override_discovered_config() -> Result<()> {
        let cwd = tempdir()?;
        fs::write(
            cwd.path().join("public-paths.json"),
            r#"{"outputPath": "/tmp/public/build", "publicPath": "/subdirectory/build"}"#,
        )?;

        let cli = parse(&["manifest-prefix", "--manifest-key-prefix", "/build"]);
        assert_eq!(run(&cli, cwd.path())?, "build/");
        Ok(())
    }

    #[test]
    fn reads_explicit_config_file() -> Result<()> {
        let cwd = tempdir()?;
        fs::write(
            cwd.path().join("build-config.json"),
            r#"{"outputPath": "C:\\projects\\app\\web\\build", "publicPath": "/build/"}"#,
        )?;

        let cli = parse(&["manifest-prefix", "--config", "build-config.json"]);
        assert_eq!(run(&cli, cwd.path())?, "build/");
        Ok(())
    }

    #[test]
    fn surfaces_ambiguous_prefix_errors() -> Result<()> {
        let cwd = tempdir()?;
        let cli = parse(&[
            "manifest-prefix",
            "--output-path",
            "/tmp/public/build",
            "--public-path",
            "https://cdn.example.com",
        ]);

        let err = run(&cli, cwd.path()).unwrap_err();
        assert!(format!("{err:#}").contains("manifestKeyPrefix"));
        Ok(())
    }

    #[test]
    fn requires_output_and_public_paths() -> Result<()> {
        let cwd = tempdir()?;
        let cli = parse(&["content-base", "--public-path", "/build/"]);

        let err = run(&cli, cwd.path()).unwrap_err();
        assert!(err.to_string().contains("--output-path"));
        Ok(())
    }
}
