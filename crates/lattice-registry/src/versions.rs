//! Library version lookup table.
//!
//! Maps library identifiers to semantic version strings for display widgets.
//! Initialized empty and populated explicitly, either programmatically or
//! from a `versions.json` manifest (a flat JSON object of name to version).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Mapping from library identifier to semantic version string.
#[derive(Debug, Clone, Default)]
pub struct VersionTable {
    versions: HashMap<String, String>,
}

impl VersionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a `versions.json` manifest.
    pub fn load(path: &Path) -> Result<Self, VersionError> {
        let content = fs::read_to_string(path).map_err(|source| VersionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let versions: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| VersionError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { versions })
    }

    /// Record `version` for `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.versions.insert(name.into(), version.into());
    }

    /// Look up the version registered for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Errors that can occur loading a version manifest.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("Failed to read version manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid version manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn insert_and_get() {
        let mut table = VersionTable::new();
        assert!(table.is_empty());

        table.insert("core", "1.2.3");
        assert_eq!(table.get("core"), Some("1.2.3"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn loads_manifest() {
        let temp = tempdir().unwrap();
        let manifest = temp.path().join("versions.json");
        fs::write(&manifest, r#"{ "core": "1.2.3", "router": "0.9.0" }"#).unwrap();

        let table = VersionTable::load(&manifest).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("core"), Some("1.2.3"));
        assert_eq!(table.get("router"), Some("0.9.0"));
    }

    #[test]
    fn malformed_manifest_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let manifest = temp.path().join("versions.json");
        fs::write(&manifest, "not json").unwrap();

        let err = VersionTable::load(&manifest).unwrap_err();
        assert!(matches!(err, VersionError::Parse { .. }));
    }

    #[test]
    fn missing_manifest_is_a_read_error() {
        let err = VersionTable::load(Path::new("/nonexistent/versions.json")).unwrap_err();
        assert!(matches!(err, VersionError::Read { .. }));
    }
}
