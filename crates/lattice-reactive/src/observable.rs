//! Single-value observable container.
//!
//! [`Observable<T>`] wraps exactly one value at a time. Setting a new value
//! notifies subscribers synchronously, in subscription order, after the value
//! is stored. Setting a value equal to the current one is a no-op.
//!
//! Listeners may re-enter the container (read it, set other observables,
//! subscribe, or drop their own [`Subscription`]); the interior borrow is
//! never held while a listener runs.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// A shared, subscribable single-value container.
///
/// Cloning an `Observable` clones the handle, not the value: both handles
/// read and write the same interior state.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Clone the current value out of the container.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Register a listener invoked synchronously after every change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
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
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Store `value` and notify subscribers.
    ///
    /// A value equal to the current one is a no-op: nothing is stored and no
    /// listener runs.
    pub fn set(&self, value: T) {
        if self.inner.borrow().value == value {
            return;
        }
        self.inner.borrow_mut().value = value.clone();

        // Snapshot the listener list, then invoke without holding the borrow.
        // Liveness is re-checked per listener so a subscription dropped by an
        // earlier listener in this batch no longer fires.
        let snapshot: Vec<(u64, Listener<T>)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            let alive = self
                .inner
                .borrow()
                .listeners
                .iter()
                .any(|(lid, _)| *lid == id);
            if alive {
                listener(&value);
            }
        }
    }
}

/// RAII guard for a registered listener.
///
/// Dropping the guard removes the listener. If the container itself was
/// dropped first, the guard is inert.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_returns_current_value() {
        let value = Observable::new("like".to_string());
        assert_eq!(value.get(), "like");

        value.set("dislike".to_string());
        assert_eq!(value.get(), "dislike");
    }

    #[test]
    fn set_notifies_synchronously() {
        let value = Observable::new(0u32);
        let seen = Rc::new(Cell::new(0u32));

        let seen_clone = Rc::clone(&seen);
        let _sub = value.subscribe(move |v| seen_clone.set(*v));

        value.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let value = Observable::new(0u32);
        let order = Rc::new(RefCell::new(Vec::new()));

        let o1 = Rc::clone(&order);
        let _a = value.subscribe(move |_| o1.borrow_mut().push("first"));
        let o2 = Rc::clone(&order);
        let _b = value.subscribe(move |_| o2.borrow_mut().push("second"));

        value.set(1);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn equal_set_is_a_no_op() {
        let value = Observable::new("rollIn".to_string());
        let fired = Rc::new(Cell::new(0u32));

        let fired_clone = Rc::clone(&fired);
        let _sub = value.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        value.set("rollIn".to_string());
        assert_eq!(fired.get(), 0);

        value.set("zoomIn".to_string());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let value = Observable::new(0u32);
        let fired = Rc::new(Cell::new(0u32));

        let fired_clone = Rc::clone(&fired);
        let sub = value.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        value.set(1);
        drop(sub);
        value.set(2);

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn listener_may_set_another_observable() {
        let source = Observable::new(String::new());
        let mirror = Observable::new(String::new());

        let mirror_clone = mirror.clone();
        let _sub = source.subscribe(move |v| mirror_clone.set(v.clone()));

        source.set("rollIn".to_string());
        assert_eq!(mirror.get(), "rollIn");
    }

    #[test]
    fn subscription_dropped_mid_batch_does_not_fire() {
        let value = Observable::new(0u32);
        let fired = Rc::new(Cell::new(false));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        // First listener drops the second one's subscription.
        let slot_clone = Rc::clone(&slot);
        let _killer = value.subscribe(move |_| {
            slot_clone.borrow_mut().take();
        });

        let fired_clone = Rc::clone(&fired);
        let victim = value.subscribe(move |_| fired_clone.set(true));
        *slot.borrow_mut() = Some(victim);

        value.set(1);
        assert!(!fired.get());
    }

    #[test]
    fn guard_is_inert_after_container_drop() {
        let value = Observable::new(0u32);
        let sub = value.subscribe(|_| {});
        drop(value);
        drop(sub);
    }
}
