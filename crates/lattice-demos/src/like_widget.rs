//! Like/dislike widget bound to a caller-owned observable.

use std::any::Any;

use lattice_reactive::Observable;
use lattice_registry::ViewModel;

/// A two-button widget writing the caller's choice back into an observable
/// the caller owns.
///
/// Both operations are unconditional single writes: no validation, no other
/// side effects.
#[derive(Debug, Clone)]
pub struct LikeWidget {
    chosen: Observable<String>,
}

impl LikeWidget {
    /// Bind the widget to an externally supplied observable.
    pub fn new(value: Observable<String>) -> Self {
        Self { chosen: value }
    }

    /// Record a "like", regardless of prior state.
    pub fn like(&self) {
        self.chosen.set("like".to_string());
    }

    /// Record a "dislike", regardless of prior state.
    pub fn dislike(&self) {
        self.chosen.set("dislike".to_string());
    }

    /// The bound observable.
    pub fn chosen(&self) -> &Observable<String> {
        &self.chosen
    }
}

impl ViewModel for LikeWidget {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
