//! Widget displaying a library's version from the shared lookup table.

use std::any::Any;

use lattice_reactive::Observable;
use lattice_registry::{ComponentError, VersionTable, ViewModel};

/// Read-only display of one library's version, prefixed with `v`.
///
/// The version is resolved once at construction; a library absent from the
/// table is a construction error rather than an empty display.
#[derive(Debug, Clone)]
pub struct VersionDisplay {
    version: Observable<String>,
}

impl VersionDisplay {
    pub fn new(versions: &VersionTable, lib: &str) -> Result<Self, ComponentError> {
        let version = versions
            .get(lib)
            .ok_or_else(|| ComponentError::UnknownLibrary(lib.to_string()))?;

        Ok(Self {
            version: Observable::new(format!("v{version}")),
        })
    }

    /// The displayed version string, e.g. `v1.2.3`.
    pub fn version(&self) -> &Observable<String> {
        &self.version
    }
}

impl ViewModel for VersionDisplay {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
