//! Entrance-animation showcase with a timer-driven replay trigger.

use std::any::Any;
use std::rc::Rc;
use std::time::Duration;

use lattice_reactive::{Observable, Scheduler, Subscription};
use lattice_registry::ViewModel;

/// The fixed set of entrance animation names offered by the showcase.
pub const ANIMATIONS: [&str; 27] = [
    "fadeIn",
    "fadeInDown",
    "fadeInDownBig",
    "fadeInLeft",
    "fadeInLeftBig",
    "fadeInRight",
    "fadeInRightBig",
    "fadeInUp",
    "fadeInUpBig",
    "flipInX",
    "flipInY",
    "lightSpeedIn",
    "rotateIn",
    "rotateInDownLeft",
    "rotateInDownRight",
    "rotateInUpLeft",
    "rotateInUpRight",
    "rollIn",
    "zoomIn",
    "zoomInDown",
    "zoomInLeft",
    "zoomInRight",
    "zoomInUp",
    "slideInDown",
    "slideInLeft",
    "slideInRight",
    "slideInUp",
];

/// Delay between dropping and re-raising the display flag. Long enough for
/// the renderer to observe the off state and restart the CSS animation.
const REPLAY_DELAY: Duration = Duration::from_millis(20);

/// View-model for the animation showcase.
///
/// `show_animation` gates the animated element's CSS class; replaying an
/// animation means forcing the flag off and scheduling it back on after
/// [`REPLAY_DELAY`]. Every change of `selected_animation` replays as well,
/// via a subscription held for the view-model's lifetime.
pub struct AnimationShowcase {
    selected_animation: Observable<String>,
    show_animation: Observable<bool>,
    scheduler: Rc<dyn Scheduler>,
    _selection_replay: Subscription,
}

impl AnimationShowcase {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        let selected_animation = Observable::new(String::new());
        let show_animation = Observable::new(false);

        let replay_flag = show_animation.clone();
        let replay_scheduler = Rc::clone(&scheduler);
        let _selection_replay =
            selected_animation.subscribe(move |_| replay(&replay_flag, &replay_scheduler));

        let showcase = Self {
            selected_animation,
            show_animation,
            scheduler,
            _selection_replay,
        };

        // Initial selection; the subscription above schedules the first
        // replay, so the flag stays off until the delay elapses.
        showcase.selected_animation.set("rollIn".to_string());
        showcase
    }

    /// The animation names offered by the select control.
    pub fn animations(&self) -> &'static [&'static str] {
        &ANIMATIONS
    }

    pub fn selected_animation(&self) -> &Observable<String> {
        &self.selected_animation
    }

    pub fn show_animation(&self) -> &Observable<bool> {
        &self.show_animation
    }

    /// Choose an animation. Selecting a different name replays it.
    pub fn select(&self, name: impl Into<String>) {
        self.selected_animation.set(name.into());
    }

    /// Replay the current animation.
    ///
    /// Calls are not debounced: each one schedules its own delayed flag-set,
    /// so rapid triggers overlap.
    pub fn show_again(&self) {
        replay(&self.show_animation, &self.scheduler);
    }
}

fn replay(flag: &Observable<bool>, scheduler: &Rc<dyn Scheduler>) {
    flag.set(false);
    let flag = flag.clone();
    scheduler.schedule(REPLAY_DELAY, Box::new(move || flag.set(true)));
}

impl ViewModel for AnimationShowcase {
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

    fn showcase() -> (VirtualScheduler, AnimationShowcase) {
        let scheduler = VirtualScheduler::new();
        let showcase = AnimationShowcase::new(Rc::new(scheduler.clone()));
        (scheduler, showcase)
    }

    #[test]
    fn starts_on_roll_in_with_the_flag_down() {
        let (_scheduler, showcase) = showcase();

        assert_eq!(showcase.selected_animation().get(), "rollIn");
        assert!(!showcase.show_animation().get());
    }

    #[test]
    fn offers_the_full_animation_list() {
        let (_scheduler, showcase) = showcase();

        assert_eq!(showcase.animations().len(), 27);
        assert!(showcase.animations().contains(&"rollIn"));
        assert_eq!(showcase.animations()[0], "fadeIn");
        assert_eq!(showcase.animations()[26], "slideInUp");
    }

    #[test]
    fn show_again_raises_the_flag_after_the_delay() {
        let (scheduler, showcase) = showcase();

        showcase.show_again();
        assert!(!showcase.show_animation().get());

        scheduler.advance(Duration::from_millis(20));
        assert!(showcase.show_animation().get());
    }

    #[test]
    fn selecting_an_animation_replays_it() {
        let (scheduler, showcase) = showcase();
        scheduler.advance(Duration::from_millis(20));
        assert!(showcase.show_animation().get());

        showcase.select("zoomIn");
        assert!(!showcase.show_animation().get());
        assert_eq!(showcase.selected_animation().get(), "zoomIn");

        scheduler.advance(Duration::from_millis(20));
        assert!(showcase.show_animation().get());
    }

    #[test]
    fn rapid_triggers_schedule_independent_flag_sets() {
        let (scheduler, showcase) = showcase();
        scheduler.advance(Duration::from_millis(20));

        // Three triggers before any delay elapses: three pending callbacks,
        // no coalescing.
        showcase.show_again();
        showcase.show_again();
        showcase.show_again();
        assert_eq!(scheduler.pending(), 3);

        scheduler.advance(Duration::from_millis(20));
        assert!(showcase.show_animation().get());
        assert_eq!(scheduler.pending(), 0);
    }
}
