#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reconcile;

pub use config::BuildConfig;
pub use error::{AmbiguityReason, AmbiguousPrefixError};
pub use reconcile::{content_base, manifest_key_prefix, prefixed_manifest_key};
