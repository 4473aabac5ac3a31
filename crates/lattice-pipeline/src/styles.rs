//! Stylesheet compilation.
//!
//! The site embeds one stylesheet entry point. Compilation parses it with
//! lightningcss, lowers and vendor-prefixes it against the configured browser
//! matrix, minifies, and writes the result beside the source as
//! `<stem>.min.css`.

use std::fs;
use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use lightningcss::targets::Browsers;
use walkdir::WalkDir;

use crate::browsers::parse_browsers;
use crate::config::DocsConfig;

/// Suffix of compiled output files, which are skipped when scanning sources.
pub(crate) const OUTPUT_SUFFIX: &str = ".min.css";

/// Compile `entry` against `browsers` and write the sibling output file.
///
/// Returns the output path.
pub fn compile_styles(entry: &Path, browsers: Browsers) -> Result<PathBuf, StyleError> {
    let source = fs::read_to_string(entry).map_err(|source| StyleError::Read {
        path: entry.to_path_buf(),
        source,
    })?;

    // lightningcss errors borrow the source, so stringify before returning.
    let stylesheet = StyleSheet::parse(&source, ParserOptions::default())
        .map_err(|e| StyleError::Parse(e.to_string()))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets: browsers.into(),
            ..Default::default()
        })
        .map_err(|e| StyleError::Print(e.to_string()))?;

    let out_path = sibling_output_path(entry);
    fs::write(&out_path, output.code).map_err(|source| StyleError::Write {
        path: out_path.clone(),
        source,
    })?;

    Ok(out_path)
}

/// The style compilation task.
///
/// Compilation errors are routed to the logging callback and otherwise
/// swallowed; the task itself always completes.
pub fn build_styles(config: &DocsConfig) {
    let entry = Path::new(&config.styles.entry);
    let browsers = parse_browsers(&config.styles.browsers);

    match compile_styles(entry, browsers) {
        Ok(output) => {
            tracing::info!("Compiled {} -> {}", entry.display(), output.display());
        }
        Err(error) => {
            tracing::error!("Style compilation failed: {error}");
        }
    }
}

/// Stylesheet sources under `dir`, excluding compiled output.
pub fn style_sources(dir: &Path) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if (ext == "css" || ext == "scss") && !name.ends_with(OUTPUT_SUFFIX) {
            sources.push(path.to_path_buf());
        }
    }

    sources.sort();
    sources
}

fn sibling_output_path(entry: &Path) -> PathBuf {
    let stem = entry
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("style");
    entry.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Errors that can occur compiling styles.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Failed to read stylesheet {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSS parse error: {0}")]
    Parse(String),

    #[error("CSS print error: {0}")]
    Print(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn compiles_beside_the_source() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("style.css");
        fs::write(
            &entry,
            r#"
.button {
    background-color: blue;
    padding: 10px;
}
"#,
        )
        .unwrap();

        let output = compile_styles(&entry, Browsers::default()).unwrap();

        assert_eq!(output, temp.path().join("style.min.css"));
        let compiled = fs::read_to_string(&output).unwrap();
        assert!(!compiled.contains('\n'));
        assert!(compiled.contains(".button"));
    }

    #[test]
    fn prefixes_for_the_legacy_matrix() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("style.css");
        fs::write(
            &entry,
            ".box { user-select: none; }",
        )
        .unwrap();

        let browsers = Browsers {
            firefox: Some(4 << 16),
            ie: Some(8 << 16),
            ..Browsers::default()
        };
        let output = compile_styles(&entry, browsers).unwrap();
        let compiled = fs::read_to_string(output).unwrap();

        assert!(compiled.contains("-moz-user-select"));
        assert!(compiled.contains("user-select"));
    }

    #[test]
    fn parse_failure_reports_no_output() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("style.css");
        fs::write(&entry, ".broken {{{").unwrap();

        let err = compile_styles(&entry, Browsers::default()).unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
        assert!(!temp.path().join("style.min.css").exists());
    }

    #[test]
    fn task_swallows_compilation_errors() {
        let temp = tempdir().unwrap();
        let entry = temp.path().join("style.css");
        fs::write(&entry, ".broken {{{").unwrap();

        let mut config = DocsConfig::default();
        config.styles.entry = entry.display().to_string();

        // Completes despite the parse error; no output is produced.
        build_styles(&config);
        assert!(!temp.path().join("style.min.css").exists());
    }

    #[test]
    fn missing_entry_is_a_read_error() {
        let err = compile_styles(Path::new("/nonexistent/style.css"), Browsers::default())
            .unwrap_err();
        assert!(matches!(err, StyleError::Read { .. }));
    }

    #[test]
    fn source_scan_skips_compiled_output() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("style.css"), "").unwrap();
        fs::write(temp.path().join("style.min.css"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let sources = style_sources(temp.path());

        assert_eq!(sources, vec![temp.path().join("style.css")]);
    }
}
