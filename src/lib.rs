//! # Version Scraper
//!
//! Collects the versions of the tools used in a pipeline run from the small
//! `v_*.txt` files the run leaves behind, and renders them as a MultiQC
//! custom-content section.
//!
//! A version that cannot be read or matched is never an error: it shows up
//! in the report as an `N/A` placeholder.
//!
//! ## Example
//!
//! ```rust,no_run
//! use version_scraper::{report::{self, ReportMeta}, VersionReporter};
//!
//! let results = VersionReporter::builtin().collect();
//! print!("{}", report::render(&ReportMeta::default(), &results));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod report;
pub mod versions;

// Re-export commonly used types and functions
pub use error::{Error, Result, SourceError};
pub use handlers::handle_report;
pub use versions::{ToolSpec, VersionReporter, VersionResults, VersionValue};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
