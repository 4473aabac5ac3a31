//! Stylesheet compilation and site-generator orchestration for the Lattice
//! documentation site.
//!
//! The site itself is produced by an external static-site generator; this
//! crate compiles the one stylesheet entry point the site embeds (lowered and
//! vendor-prefixed for the documented browser matrix), spawns the generator's
//! build/clean/serve commands, and watches style sources during development.

pub mod browsers;
pub mod config;
pub mod site;
pub mod styles;
pub mod watcher;

pub use browsers::{parse_browsers, DEFAULT_BROWSERS};
pub use config::{ConfigError, DocsConfig};
pub use site::SiteGenerator;
pub use styles::{build_styles, compile_styles, style_sources, StyleError};
pub use watcher::{StyleEvent, StyleWatcher};
