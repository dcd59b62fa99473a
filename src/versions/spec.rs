use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Where to find one tool's version and how to pull it out of the file.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    name: String,
    path: PathBuf,
    pattern: Regex,
}

impl ToolSpec {
    /// Compile `pattern` and bind it to a tool name and source file.
    ///
    /// The pattern must contain exactly one capture group; its text becomes
    /// the version.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        pattern: &str,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| Error::Regex {
            tool: name.clone(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = pattern.captures_len() - 1;
        if found != 1 {
            return Err(Error::InvalidPattern { tool: name, found });
        }

        Ok(Self {
            name,
            path: path.into(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}
