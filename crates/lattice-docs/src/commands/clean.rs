//! Clean command.

use anyhow::Result;
use lattice_pipeline::{DocsConfig, SiteGenerator};

/// Run the clean command.
pub async fn run(config: &DocsConfig) -> Result<()> {
    SiteGenerator::new(&config.site.command).clean();
    tracing::info!("Documentation is now cleaned.");

    Ok(())
}
