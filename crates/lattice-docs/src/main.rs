//! Lattice docs CLI - build tasks for the documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lattice_pipeline::DocsConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lattice-docs")]
#[command(about = "Build tasks for the Lattice documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to docs.toml config file
    #[arg(short, long, default_value = "docs.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile styles, then build the documentation site
    Build,

    /// Clean stale generator output
    Clean,

    /// Run the generator's dev server and rebuild styles on change
    Watch {
        /// Port for the dev server
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Rebuild styles whenever style sources change
    WatchStyles,

    /// Compile the stylesheet entry point once
    BuildStyles,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = DocsConfig::load(&cli.config)?;

    // A bare invocation runs the default task, a full build.
    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            commands::build::run(&config).await?;
        }
        Commands::Clean => {
            commands::clean::run(&config).await?;
        }
        Commands::Watch { port, no_open } => {
            commands::watch::run(&config, port, !no_open).await?;
        }
        Commands::WatchStyles => {
            commands::watch::run_styles(&config).await?;
        }
        Commands::BuildStyles => {
            commands::styles::run(&config);
        }
    }

    Ok(())
}
