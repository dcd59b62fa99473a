use crate::error::SourceError;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;

use super::spec::ToolSpec;

/// Read the tool's source file and extract its version.
///
/// Relative source paths are resolved against `base_dir`. Any failure to
/// read the file as text is reported as [`SourceError::Unreadable`].
pub fn read_version(spec: &ToolSpec, base_dir: &Path) -> Result<String, SourceError> {
    let path = base_dir.join(spec.path());
    debug!("Reading version source for {} from {:?}", spec.name(), path);

    let content = fs::read_to_string(&path).map_err(|source| SourceError::Unreadable {
        path: path.clone(),
        source,
    })?;

    extract_version(&content, spec.pattern()).ok_or(SourceError::Unmatched { path })
}

/// First capture group of the first match anywhere in `content`.
pub fn extract_version(content: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|version| version.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spec(pattern: &str) -> ToolSpec {
        ToolSpec::new("tool", "v_tool.txt", pattern).unwrap()
    }

    #[test]
    fn test_extract_searches_whole_content() {
        let re = Regex::new(r"featureCounts v(\S+)").unwrap();
        let content = "\n       ==========     _____ _    _ ____  _____\n\n\tfeatureCounts v2.0.1\n\n";
        assert_eq!(extract_version(content, &re).as_deref(), Some("2.0.1"));
    }

    #[test]
    fn test_extract_first_match_wins() {
        let re = Regex::new(r"(\S+)").unwrap();
        assert_eq!(
            extract_version("  21.04.0 build 5587\n", &re).as_deref(),
            Some("21.04.0")
        );
    }

    #[test]
    fn test_extract_keeps_capture_verbatim() {
        let re = Regex::new(r"(\S+)").unwrap();
        assert_eq!(
            extract_version("1.0dev-<b>\n", &re).as_deref(),
            Some("1.0dev-<b>")
        );
    }

    #[test]
    fn test_extract_no_match() {
        let re = Regex::new(r"featureCounts v(\S+)").unwrap();
        assert_eq!(extract_version("subread 2.0.1\n", &re), None);
        let re = Regex::new(r"(\S+)").unwrap();
        assert_eq!(extract_version(" \n\t\n", &re), None);
    }

    #[test]
    fn test_read_version_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("v_tool.txt"), "1.2.3\n").unwrap();

        let version = read_version(&spec(r"(\S+)"), dir.path()).unwrap();
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn test_read_version_missing_file() {
        let dir = TempDir::new().unwrap();

        let err = read_version(&spec(r"(\S+)"), dir.path()).unwrap_err();
        match err {
            SourceError::Unreadable { path, source } => {
                assert_eq!(path, dir.path().join("v_tool.txt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_read_version_directory_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("v_tool.txt")).unwrap();

        let err = read_version(&spec(r"(\S+)"), dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn test_read_version_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("v_tool.txt"), [0xff, 0xfe, b'1']).unwrap();

        let err = read_version(&spec(r"(\S+)"), dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
    }

    #[test]
    fn test_read_version_unmatched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("v_tool.txt"), "").unwrap();

        let err = read_version(&spec(r"(\S+)"), dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::Unmatched { .. }));
    }
}
