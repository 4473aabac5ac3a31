//! Site build command.

use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use lattice_demos::register_demo_components;
use lattice_pipeline::{DocsConfig, SiteGenerator};
use lattice_reactive::VirtualScheduler;
use lattice_registry::{ComponentRegistry, VersionTable};

use super::styles;

/// Run the build command.
pub async fn run(config: &DocsConfig) -> Result<()> {
    tracing::info!("Building documentation...");

    let components = register_demo_manifest(config);
    tracing::info!("Registered {} demo components", components);

    styles::run(config);

    SiteGenerator::new(&config.site.command).build();
    tracing::info!("Documentation is now built.");

    Ok(())
}

/// Register the demo component manifest the docs runtime will install.
///
/// Running the registration here surfaces manifest problems (duplicate
/// names, a missing version table) at build time instead of first page load.
fn register_demo_manifest(config: &DocsConfig) -> usize {
    let versions = match VersionTable::load(Path::new(&config.site.versions)) {
        Ok(table) => table,
        Err(error) => {
            tracing::warn!("Version manifest unavailable ({error}); using an empty table");
            VersionTable::new()
        }
    };

    let mut registry = ComponentRegistry::new();
    let scheduler = Rc::new(VirtualScheduler::new());

    match register_demo_components(&mut registry, scheduler, Rc::new(versions)) {
        Ok(count) => count,
        Err(error) => {
            tracing::error!("Demo registration failed: {error}");
            0
        }
    }
}
