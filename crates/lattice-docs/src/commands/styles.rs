//! Style compilation command.

use lattice_pipeline::{build_styles, DocsConfig};

/// Run the build-styles command.
///
/// Compilation errors are logged and swallowed by the task itself, so this
/// never fails the invocation.
pub fn run(config: &DocsConfig) {
    build_styles(config);
}
