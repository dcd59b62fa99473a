use log::{debug, info};
use std::path::{Path, PathBuf};

use super::detector::read_version;
use super::results::{VersionResults, VersionValue};
use super::spec::ToolSpec;

/// Scrapes every configured tool in one sequential pass.
#[derive(Debug, Clone)]
pub struct VersionReporter {
    tools: Vec<ToolSpec>,
    base_dir: PathBuf,
}

impl VersionReporter {
    /// Reporter over `tools`, reading relative paths from the working directory.
    pub fn new(tools: Vec<ToolSpec>) -> Self {
        Self {
            tools,
            base_dir: PathBuf::from("."),
        }
    }

    /// Reporter over the built-in pipeline tools.
    pub fn builtin() -> Self {
        Self::new(crate::config::builtin_tools().to_vec())
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Read every source, in order.
    ///
    /// Never fails: a tool whose file cannot be read or does not match keeps
    /// [`VersionValue::NotAvailable`].
    pub fn collect(&self) -> VersionResults {
        let mut results = VersionResults::new();
        for tool in &self.tools {
            results.insert(tool.name(), VersionValue::NotAvailable);
        }

        for tool in &self.tools {
            match read_version(tool, &self.base_dir) {
                Ok(version) => {
                    debug!("{} version: {}", tool.name(), version);
                    results.insert(tool.name(), VersionValue::Found(version));
                }
                Err(e) => info!("{} version not available: {}", tool.name(), e),
            }
        }

        results
    }
}

impl Default for VersionReporter {
    fn default() -> Self {
        Self::builtin()
    }
}
