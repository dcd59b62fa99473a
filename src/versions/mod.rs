//! # Version Scraping
//!
//! Reads the version files an upstream pipeline run leaves behind and turns
//! each into a display value. One file, one pattern, one attempt per tool.

pub mod detector;
pub mod reporter;
pub mod results;
pub mod spec;

pub use detector::{extract_version, read_version};
pub use reporter::VersionReporter;
pub use results::{PLACEHOLDER, VersionResults, VersionValue};
pub use spec::ToolSpec;
