//! Error raised when the manifest key prefix cannot be derived.

use thiserror::Error;

/// Why the manifest key prefix could not be derived from the public path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmbiguityReason {
    /// The public path points at another host, so it says nothing about the output directory.
    #[error("public path `{public_path}` is an absolute URL")]
    ExternalPublicPath {
        /// Offending public path.
        public_path: String,
    },
    /// The public path is not a trailing part of the output directory.
    #[error("public path `{public_path}` does not match the end of output path `{output_path}`")]
    OutputPathMismatch {
        /// Configured output directory.
        output_path: String,
        /// Configured public path.
        public_path: String,
    },
}

/// Configuration defect: an explicit `manifestKeyPrefix` is required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Cannot determine how to prefix the keys in manifest.json ({reason}). \
     Set `manifestKeyPrefix` (or pass `--manifest-key-prefix`) to choose what path (e.g. build/) to use"
)]
pub struct AmbiguousPrefixError {
    /// Which check failed.
    pub reason: AmbiguityReason,
}

impl From<AmbiguityReason> for AmbiguousPrefixError {
    fn from(reason: AmbiguityReason) -> Self {
        Self { reason }
    }
}
