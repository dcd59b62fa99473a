//! # Software Versions Report
//!
//! Renders scraped versions as a MultiQC custom-content document: a few
//! metadata keys followed by an HTML definition list in a literal block.

use crate::config;
use crate::error::Result;
use crate::versions::VersionResults;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write;

/// Fixed header fields of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub id: String,
    pub section_name: String,
    pub section_href: String,
    pub plot_type: String,
    pub description: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            id: config::REPORT_ID.to_string(),
            section_name: config::SECTION_NAME.to_string(),
            section_href: config::SECTION_HREF.to_string(),
            plot_type: config::PLOT_TYPE.to_string(),
            description: config::DESCRIPTION.to_string(),
        }
    }
}

/// Render the full YAML document.
pub fn render(meta: &ReportMeta, results: &VersionResults) -> String {
    let mut out = String::new();

    for (key, value) in [
        ("id", &meta.id),
        ("section_name", &meta.section_name),
        ("section_href", &meta.section_href),
        ("plot_type", &meta.plot_type),
        ("description", &meta.description),
    ] {
        let _ = writeln!(out, "{}: {}", key, single_quoted(value));
    }

    out.push_str("data: |\n");
    out.push_str("    <dl class=\"dl-horizontal\">\n");
    for (name, value) in results.iter() {
        let _ = writeln!(out, "        <dt>{}</dt><dd>{}</dd>", name, value);
    }
    out.push_str("    </dl>\n");

    out
}

/// Render and write the report to `writer`.
pub fn write_report<W: Write>(meta: &ReportMeta, results: &VersionResults, mut writer: W) -> Result<()> {
    writer.write_all(render(meta, results).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
