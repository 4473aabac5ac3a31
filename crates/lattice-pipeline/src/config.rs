//! Configuration file (`docs.toml`) for the documentation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::browsers::DEFAULT_BROWSERS;

/// Configuration file structure (docs.toml).
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    #[serde(default)]
    pub docs: DocsSection,
    #[serde(default)]
    pub styles: StylesSection,
    #[serde(default)]
    pub site: SiteSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocsSection {
    /// Source directory for documentation pages
    #[serde(default = "default_docs_dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StylesSection {
    /// The stylesheet entry point compiled in place
    #[serde(default = "default_styles_entry")]
    pub entry: String,
    /// Browserslist-style support matrix for lowering and vendor prefixes
    #[serde(default = "default_browsers")]
    pub browsers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    /// The external static-site generator command
    #[serde(default = "default_site_command")]
    pub command: String,
    /// Default dev-server port for the watch task
    #[serde(default = "default_port")]
    pub port: u16,
    /// Library version manifest consumed by the version-display widget
    #[serde(default = "default_versions_manifest")]
    pub versions: String,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_styles_entry() -> String {
    "docs/styles/style.css".to_string()
}
fn default_browsers() -> Vec<String> {
    DEFAULT_BROWSERS.iter().map(|q| q.to_string()).collect()
}
fn default_site_command() -> String {
    "mkdocs".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_versions_manifest() -> String {
    "versions.json".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            docs: DocsSection::default(),
            styles: StylesSection::default(),
            site: SiteSection::default(),
        }
    }
}

impl Default for DocsSection {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
        }
    }
}

impl Default for StylesSection {
    fn default() -> Self {
        Self {
            entry: default_styles_entry(),
            browsers: default_browsers(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            command: default_site_command(),
            port: default_port(),
            versions: default_versions_manifest(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from `path` if it exists.
    ///
    /// A missing file yields the defaults; a file that exists but is
    /// malformed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: DocsConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Directory holding the style sources (the entry point's parent).
    pub fn styles_dir(&self) -> PathBuf {
        Path::new(&self.styles.entry)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    }
}

/// Errors that can occur loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
