use std::fmt;

/// Shown in place of a version that could not be determined.
pub const PLACEHOLDER: &str = r#"<span style="color:#999999;">N/A</span>"#;

/// Outcome of scraping one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionValue {
    /// Raw capture, without the `v` prefix
    Found(String),
    NotAvailable,
}

impl VersionValue {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(version) => write!(f, "v{}", version),
            Self::NotAvailable => f.write_str(PLACEHOLDER),
        }
    }
}

/// Versions keyed by tool name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionResults {
    entries: Vec<(String, VersionValue)>,
}

impl VersionResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `name`. A known name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: VersionValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&VersionValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
