//! Component registry mapping names to view-model factories and templates.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::rc::Rc;

use crate::params::Params;

/// Object-safe view-model surface.
///
/// View-models are plain structs holding observable state; this trait exists
/// so the registry can hand instances back type-erased while callers keep the
/// ability to downcast to the concrete type.
pub trait ViewModel: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn ViewModel {
    /// Downcast to a concrete view-model type.
    pub fn downcast_ref<T: ViewModel>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: ViewModel>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl std::fmt::Debug for dyn ViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ViewModel")
    }
}

type Factory = Rc<dyn Fn(&Params) -> Result<Box<dyn ViewModel>, ComponentError>>;

/// A registered component: view-model factory plus inline template markup.
///
/// Immutable once registered.
#[derive(Clone)]
pub struct ComponentDefinition {
    factory: Factory,
    template: Cow<'static, str>,
}

impl ComponentDefinition {
    pub fn new(
        factory: impl Fn(&Params) -> Result<Box<dyn ViewModel>, ComponentError> + 'static,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            factory: Rc::new(factory),
            template: template.into(),
        }
    }

    /// The component's inline template markup, stored verbatim.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Run the factory to produce a fresh view-model instance.
    pub fn instantiate(&self, params: &Params) -> Result<Box<dyn ViewModel>, ComponentError> {
        (self.factory)(params)
    }
}

impl std::fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("template", &self.template)
            .finish()
    }
}

/// An explicit, injected mapping from component name to definition.
///
/// Starts empty; registration is once-only per name.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDefinition>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component definition under `name`.
    ///
    /// Fails if the name is already taken; the original definition is left
    /// intact.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: ComponentDefinition,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.components.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.components.insert(name, definition);
        Ok(())
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.get(name)
    }

    /// Check if a component exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Get all registered component names.
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Instantiate a fresh view-model for the named component.
    pub fn instantiate(
        &self,
        name: &str,
        params: &Params,
    ) -> Result<Box<dyn ViewModel>, RegistryError> {
        let definition = self
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        Ok(definition.instantiate(params)?)
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Component already registered: {0}")]
    Duplicate(String),

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Component(#[from] ComponentError),
}

/// Errors raised by component factories.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("Missing required param: {0}")]
    MissingParam(&'static str),

    #[error("No version registered for library: {0}")]
    UnknownLibrary(String),
}
