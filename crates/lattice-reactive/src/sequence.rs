//! Ordered, mutable sequence with structural-change notification.
//!
//! [`ObservableList<T>`] supports two structural mutations — reset to empty
//! and bulk replace — and announces each one to subscribers as a
//! [`ListChange`]. Per-item mutation is deliberately absent: downstream list
//! rendering reacts to the whole sequence being torn down and refilled, which
//! is what drives per-item entrance animations.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::observable::Subscription;

/// A structural change announced to list subscribers.
#[derive(Debug, PartialEq, Eq)]
pub enum ListChange<'a, T> {
    /// The sequence was reset to empty.
    Cleared,
    /// The sequence was replaced wholesale with these items.
    Replaced(&'a [T]),
}

type Listener<T> = Rc<dyn for<'a> Fn(ListChange<'a, T>)>;

struct Inner<T> {
    items: Vec<T>,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A shared, subscribable ordered sequence.
///
/// Cloning an `ObservableList` clones the handle; both handles alias the same
/// items.
pub struct ObservableList<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableList")
            .field("items", &inner.items)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ObservableList<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                items: Vec::new(),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Snapshot the current items.
    pub fn items(&self) -> Vec<T> {
        self.inner.borrow().items.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Reset the sequence to empty and announce [`ListChange::Cleared`].
    ///
    /// The reset is announced even when the sequence was already empty: the
    /// empty state itself is what downstream renderers key their teardown on.
    pub fn clear(&self) {
        self.inner.borrow_mut().items.clear();
        self.notify(Structural::Cleared);
    }

    /// Replace the whole sequence and announce [`ListChange::Replaced`].
    pub fn replace(&self, items: Vec<T>) {
        self.inner.borrow_mut().items = items;
        self.notify(Structural::Replaced);
    }

    /// Register a listener for structural changes.
    pub fn subscribe(&self, listener: impl for<'a> Fn(ListChange<'a, T>) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Invoke each live listener with a change built from the post-mutation
    /// items, without holding the interior borrow.
    fn notify(&self, change: Structural) {
        let items = self.inner.borrow().items.clone();
        let snapshot: Vec<(u64, Listener<T>)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            let alive = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if alive {
                let event = match change {
                    Structural::Cleared => ListChange::Cleared,
                    Structural::Replaced => ListChange::Replaced(&items),
                };
                listener(event);
            }
        }
    }
}

/// Which structural mutation to announce.
#[derive(Clone, Copy)]
enum Structural {
    Cleared,
    Replaced,
}
