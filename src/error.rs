//! Error types for version scraping and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an operation.
///
/// Reading a version source never produces one of these; see [`SourceError`].
#[derive(Debug, Error)]
pub enum Error {
    /// Pattern failed to compile
    #[error("Invalid pattern for {tool}: {source}")]
    Regex {
        tool: String,
        #[source]
        source: regex::Error,
    },

    /// Pattern compiled but does not have exactly one capture group
    #[error("Pattern for {tool} must have exactly one capture group, found {found}")]
    InvalidPattern { tool: String, found: usize },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single tool's version could not be determined.
///
/// Always recoverable: the reporter logs it and shows the placeholder.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Missing, permission denied, a directory, not valid UTF-8...
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no version found in {}", path.display())]
    Unmatched { path: PathBuf },
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;
