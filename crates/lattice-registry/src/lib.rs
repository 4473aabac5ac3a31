//! Component registration and view-model lifecycle for Lattice.
//!
//! A [`ComponentRegistry`] maps component names to [`ComponentDefinition`]s —
//! a view-model factory paired with the component's inline template markup.
//! Definitions are registered once and immutable thereafter; instantiation
//! runs the factory against a caller-supplied [`Params`] bag and yields a
//! boxed [`ViewModel`].
//!
//! The registry is an explicit injected object, not a process global: callers
//! create one at startup and thread it to wherever components are mounted.

pub mod params;
pub mod registry;
pub mod versions;

pub use params::{ParamValue, Params};
pub use registry::{
    ComponentDefinition, ComponentError, ComponentRegistry, RegistryError, ViewModel,
};
pub use versions::{VersionError, VersionTable};
