//! Sequence demo: clear-then-refill a people list to drive staggered
//! entrance animations, plus the nested per-item person card.

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

use lattice_reactive::{ObservableList, Scheduler};
use lattice_registry::{ComponentError, Params, ViewModel};

/// The fixed list shown by the demo.
pub const PEOPLE: [&str; 10] = [
    "Person 1", "Person 2", "Person 3", "Person 4", "Person 5", "Person 6", "Person 7", "Person 8",
    "Person 9", "Person 10",
];

/// Delay between emptying the list and refilling it, so downstream rendering
/// observes the empty state before the full one.
const REFILL_DELAY: Duration = Duration::from_millis(20);

/// View-model for the sequence demo.
pub struct SequenceDemo {
    people: ObservableList<String>,
    scheduler: Rc<dyn Scheduler>,
}

impl SequenceDemo {
    /// Create the demo and run the first fill cycle.
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        let demo = Self {
            people: ObservableList::new(),
            scheduler,
        };
        demo.show_again();
        demo
    }

    pub fn people(&self) -> &ObservableList<String> {
        &self.people
    }

    /// Empty the list now, refill it with [`PEOPLE`] after the delay.
    pub fn show_again(&self) {
        self.people.clear();
        let people = self.people.clone();
        self.scheduler.schedule(
            REFILL_DELAY,
            Box::new(move || {
                people.replace(PEOPLE.iter().map(|name| name.to_string()).collect());
            }),
        );
    }
}

impl ViewModel for SequenceDemo {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Mount-time options handed to the host framework's sequencing capability.
///
/// The staggering itself — offsetting each item's entrance by its list
/// position times the interval — is performed by the framework, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    /// Namespace grouping the items that stagger together.
    pub namespace: &'static str,
    /// Per-item entrance offset within the namespace.
    pub stagger: Option<Duration>,
}

/// Per-item card nested inside the sequence demo's list rendering.
#[derive(Debug, Clone)]
pub struct PersonCard {
    name: String,
    mount: MountOptions,
}

impl PersonCard {
    pub fn new(params: &Params) -> Result<Self, ComponentError> {
        let name = params
            .text("name")
            .ok_or(ComponentError::MissingParam("name"))?
            .to_string();

        Ok(Self {
            name,
            mount: MountOptions {
                namespace: "person",
                stagger: Some(Duration::from_millis(70)),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mount_options(&self) -> &MountOptions {
        &self.mount
    }
}

impl ViewModel for PersonCard {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_reactive::VirtualScheduler;
    use pretty_assertions::assert_eq;

    fn demo() -> (VirtualScheduler, SequenceDemo) {
        let scheduler = VirtualScheduler::new();
        let demo = SequenceDemo::new(Rc::new(scheduler.clone()));
        (scheduler, demo)
    }

    #[test]
    fn starts_empty_then_fills_after_the_delay() {
        let (scheduler, demo) = demo();

        assert!(demo.people().is_empty());

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(demo.people().items(), PEOPLE.to_vec());
    }

    #[test]
    fn show_again_empties_immediately() {
        let (scheduler, demo) = demo();
        scheduler.advance(Duration::from_millis(20));
        assert_eq!(demo.people().len(), 10);

        demo.show_again();
        assert!(demo.people().is_empty());
    }

    #[test]
    fn repeat_cycles_yield_the_same_list() {
        let (scheduler, demo) = demo();
        scheduler.advance(Duration::from_millis(20));
        let first = demo.people().items();

        demo.show_again();
        scheduler.advance(Duration::from_millis(20));
        let second = demo.people().items();

        assert_eq!(first, second);
        assert_eq!(second.len(), 10);
        assert_eq!(second[0], "Person 1");
        assert_eq!(second[9], "Person 10");
    }

    #[test]
    fn person_card_takes_its_name_param() {
        let params = Params::new().with_text("name", "Person 3");
        let card = PersonCard::new(&params).unwrap();

        assert_eq!(card.name(), "Person 3");
        assert_eq!(card.mount_options().namespace, "person");
        assert_eq!(
            card.mount_options().stagger,
            Some(Duration::from_millis(70))
        );
    }

    #[test]
    fn person_card_requires_a_name() {
        let err = PersonCard::new(&Params::new()).unwrap_err();
        assert!(matches!(err, ComponentError::MissingParam("name")));
    }
}
