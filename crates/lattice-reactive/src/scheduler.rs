//! Scheduled-callback capability for timer-driven view-model state.
//!
//! View-models never call real timers directly; they receive a [`Scheduler`]
//! at construction and hand it the callbacks they want to run later. The
//! host runtime supplies its own event-loop-backed implementation; tests and
//! out-of-runtime registration use [`VirtualScheduler`], which runs callbacks
//! only when virtual time is advanced explicitly.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A capability for running a callback after a delay on the same logical
/// thread.
pub trait Scheduler {
    /// Schedule `callback` to run once `delay` has elapsed.
    ///
    /// Scheduling the same delay twice runs both callbacks; there is no
    /// coalescing.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

struct QueueEntry {
    deadline: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

struct Inner {
    now: Duration,
    next_seq: u64,
    queue: Vec<QueueEntry>,
}

/// Deterministic scheduler driven by explicit [`advance`](Self::advance)
/// calls.
///
/// Cloning yields another handle to the same queue and clock. Due callbacks
/// run in (deadline, submission order); callbacks scheduled while advancing
/// also run if their deadline falls inside the advanced window.
pub struct VirtualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl Clone for VirtualScheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                now: Duration::ZERO,
                next_seq: 0,
                queue: Vec::new(),
            })),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Advance virtual time by `delta`, running every callback whose deadline
    /// falls within the window.
    pub fn advance(&self, delta: Duration) {
        let target = self.inner.borrow().now + delta;

        loop {
            // Pull the earliest due entry, then run it with no borrow held so
            // the callback can schedule more work or touch observables.
            let entry = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.deadline <= target)
                    .min_by_key(|(_, e)| (e.deadline, e.seq))
                    .map(|(i, _)| i);

                match due {
                    Some(index) => {
                        let entry = inner.queue.swap_remove(index);
                        inner.now = inner.now.max(entry.deadline);
                        Some(entry)
                    }
                    None => None,
                }
            };

            match entry {
                Some(entry) => (entry.callback)(),
                None => break,
            }
        }

        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.now + delay;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.queue.push(QueueEntry {
            deadline,
            seq,
            callback,
        });
    }
}

impl std::fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("VirtualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.queue.len())
            .finish()
    }
}
