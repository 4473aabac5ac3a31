//! Watch commands: dev server plus style rebuilds.

use anyhow::{Context, Result};
use lattice_pipeline::{style_sources, DocsConfig, SiteGenerator, StyleWatcher};

use super::styles;

/// Run the watch command: spawn the generator's dev server, then rebuild
/// styles on every source change until interrupted.
pub async fn run(config: &DocsConfig, port: u16, open_browser: bool) -> Result<()> {
    SiteGenerator::new(&config.site.command).serve(port);
    tracing::info!("Server now running on port: {}", port);

    if open_browser {
        let url = format!("http://localhost:{port}");
        let _ = open::that(&url);
    }

    run_styles(config).await
}

/// Run the watch-styles command: style rebuilds alone.
pub async fn run_styles(config: &DocsConfig) -> Result<()> {
    let styles_dir = config.styles_dir();
    let sources = style_sources(&styles_dir);
    tracing::info!(
        "Watching {} style sources in {}",
        sources.len(),
        styles_dir.display()
    );

    let (_watcher, mut rx) = StyleWatcher::new(&styles_dir)
        .with_context(|| format!("Failed to watch {}", styles_dir.display()))?;

    while let Some(event) = rx.recv().await {
        tracing::debug!("Style source changed: {event:?}");
        styles::run(config);
    }

    Ok(())
}
