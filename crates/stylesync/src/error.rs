//! Error types for theme synchronization.
//!
//! Only conditions that abort a run live here. A pattern that does not match
//! its target document is not an error: it is recorded as a skipped
//! [`Substitution`](crate::Substitution) in the report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The theme config could not be read.
    #[error("cannot read theme config {}: {source}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The theme config is not valid JSON or lacks a required section.
    #[error("failed to parse theme config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A target stylesheet could not be read.
    ///
    /// Documents rewritten by earlier passes stay rewritten.
    #[error("cannot read stylesheet {}: {source}", path.display())]
    StylesheetNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A target stylesheet could not be written back.
    #[error("failed to write stylesheet {}: {source}", path.display())]
    StylesheetWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A substitution pattern failed to compile.
    #[error("invalid substitution pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for synchronization operations.
pub type Result<T> = std::result::Result<T, SyncError>;
