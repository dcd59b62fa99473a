use crate::report::{self, ReportMeta};
use crate::versions::VersionReporter;
use log::info;
use std::io::Write;
use std::path::Path;

/// Scrape the built-in tools under `base_dir` and write the report to `writer`.
pub fn handle_report<W: Write>(base_dir: &Path, writer: W) -> crate::Result<()> {
    let reporter = VersionReporter::builtin().with_base_dir(base_dir);
    let results = reporter.collect();

    let available = results.iter().filter(|(_, v)| v.is_available()).count();
    info!("Resolved {}/{} tool versions", available, results.len());

    report::write_report(&ReportMeta::default(), &results, writer)
}
