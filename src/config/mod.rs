//! Built-in tool table and report metadata.
//!
//! There is no runtime configuration: adding a tool means adding a row to
//! [`TOOL_TABLE`].

use crate::versions::ToolSpec;
use once_cell::sync::Lazy;

/// `(name, source file, pattern)` in report order.
pub const TOOL_TABLE: &[(&str, &str, &str)] = &[
    ("ICGC-FeatureCounts", "v_pipeline.txt", r"(\S+)"),
    ("Nextflow", "v_nextflow.txt", r"(\S+)"),
    ("featureCounts", "v_featurecounts.txt", r"featureCounts v(\S+)"),
];

pub const REPORT_ID: &str = "icgc-featurecounts-software-versions";
pub const SECTION_NAME: &str = "nf-icgc-featureCounts Software Versions";
pub const SECTION_HREF: &str = "https://github.com/apeltzer/nf-icgc-featureCounts";
pub const PLOT_TYPE: &str = "html";
pub const DESCRIPTION: &str = "are collected at run time from the software output.";

static BUILTIN_TOOLS: Lazy<Vec<ToolSpec>> = Lazy::new(|| {
    TOOL_TABLE
        .iter()
        .map(|(name, path, pattern)| {
            ToolSpec::new(*name, *path, pattern).expect("built-in tool pattern is valid")
        })
        .collect()
});

/// The built-in tools, compiled once.
pub fn builtin_tools() -> &'static [ToolSpec] {
    &BUILTIN_TOOLS
}
