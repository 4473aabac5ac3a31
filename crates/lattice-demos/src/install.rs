//! Registration of the demo components and their inline templates.

use std::rc::Rc;

use lattice_reactive::Scheduler;
use lattice_registry::{
    ComponentDefinition, ComponentError, ComponentRegistry, Params, RegistryError, VersionTable,
    ViewModel,
};

use crate::animation_showcase::AnimationShowcase;
use crate::like_widget::LikeWidget;
use crate::sequence_demo::{PersonCard, SequenceDemo};
use crate::version_display::VersionDisplay;

const LIKE_WIDGET_TEMPLATE: &str = r#"<button data-bind="click: like">Like</button>
<button data-bind="click: dislike">Dislike</button>"#;

const ANIMATION_SHOWCASE_TEMPLATE: &str = r#"<select data-bind="options: animations, value: selectedAnimation"></select>
<button data-bind="click: showAgain">Show Again</button>
<div class="animation-showcase lattice-entity" data-bind="css: { 'animateIn': showAnimation }">
  <div data-bind="css: selectedAnimation">This is animated:<span data-bind="text: selectedAnimation"></span></div>
</div>"#;

const SEQUENCE_DEMO_TEMPLATE: &str = r#"<button data-bind="click: showAgain">Show List</button>
<div class="list" data-bind="foreach: peopleList">
  <person params="name: $data"></person>
</div>"#;

const PERSON_TEMPLATE: &str = r#"<div class="flipInX" data-bind="text: name"></div>"#;

const VERSION_DISPLAY_TEMPLATE: &str =
    r#"<span class="lib-version" data-bind="text: version"></span>"#;

/// Register every demo component against `registry`.
///
/// The scheduler and version table are captured by the factories, so each
/// instantiation shares them. Returns the number of components registered.
pub fn register_demo_components(
    registry: &mut ComponentRegistry,
    scheduler: Rc<dyn Scheduler>,
    versions: Rc<VersionTable>,
) -> Result<usize, RegistryError> {
    registry.register(
        "like-widget",
        ComponentDefinition::new(
            |params: &Params| {
                let value = params
                    .value("value")
                    .ok_or(ComponentError::MissingParam("value"))?;
                Ok(Box::new(LikeWidget::new(value)) as Box<dyn ViewModel>)
            },
            LIKE_WIDGET_TEMPLATE,
        ),
    )?;

    let showcase_scheduler = Rc::clone(&scheduler);
    registry.register(
        "animation-showcase",
        ComponentDefinition::new(
            move |_params: &Params| {
                Ok(Box::new(AnimationShowcase::new(Rc::clone(&showcase_scheduler)))
                    as Box<dyn ViewModel>)
            },
            ANIMATION_SHOWCASE_TEMPLATE,
        ),
    )?;

    let sequence_scheduler = Rc::clone(&scheduler);
    registry.register(
        "sequence-demo",
        ComponentDefinition::new(
            move |_params: &Params| {
                Ok(Box::new(SequenceDemo::new(Rc::clone(&sequence_scheduler)))
                    as Box<dyn ViewModel>)
            },
            SEQUENCE_DEMO_TEMPLATE,
        ),
    )?;

    registry.register(
        "person",
        ComponentDefinition::new(
            |params: &Params| Ok(Box::new(PersonCard::new(params)?) as Box<dyn ViewModel>),
            PERSON_TEMPLATE,
        ),
    )?;

    registry.register(
        "version-display",
        ComponentDefinition::new(
            move |params: &Params| {
                let lib = params
                    .text("lib")
                    .ok_or(ComponentError::MissingParam("lib"))?;
                Ok(Box::new(VersionDisplay::new(&versions, lib)?) as Box<dyn ViewModel>)
            },
            VERSION_DISPLAY_TEMPLATE,
        ),
    )?;

    Ok(registry.len())
}
