//! Event subscription primitives.
//!
//! The host exposes its event streams as [`Event`] handles. Subscribing
//! registers a listener and returns a [`Disposable`] that cancels the
//! subscription; cancellation is idempotent. The emitting side is an
//! [`EventEmitter`], owned by whoever produces the stream.
//!
//! Channel types stay out of the public surface on purpose: listeners are
//! plain callbacks, and transports (in-process, IPC bridges) live behind the
//! emitter.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::dispose::Disposable;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct ListenerSet<T> {
    entries: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

impl<T> ListenerSet<T> {
    fn entries(&self) -> std::sync::MutexGuard<'_, Vec<(u64, Listener<T>)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The producing side of an event stream.
///
/// Owned by the host (or by a service acting for it). Hand subscribers an
/// [`Event`] via [`EventEmitter::event`]; they never see the emitter itself.
pub struct EventEmitter<T> {
    set: Arc<ListenerSet<T>>,
}

impl<T> EventEmitter<T> {
    /// Create an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self {
            set: Arc::new(ListenerSet {
                entries: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// The subscribable handle for this stream.
    #[must_use]
    pub fn event(&self) -> Event<T> {
        Event {
            set: Arc::downgrade(&self.set),
        }
    }

    /// Invoke every current listener with `payload`, in subscription order.
    ///
    /// Listeners are snapshotted before the first call, so a listener may
    /// subscribe or cancel (itself included) without deadlocking. A listener
    /// cancelled by an earlier listener still receives the in-flight event.
    pub fn emit(&self, payload: &T) {
        let listeners: Vec<Listener<T>> = self
            .set
            .entries()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(payload);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.set.entries().len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            set: Arc::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// The subscribing side of an event stream.
///
/// Holds only a weak link to the emitter: when the host drops the stream,
/// outstanding handles turn inert and new subscriptions come back already
/// disposed.
pub struct Event<T> {
    set: Weak<ListenerSet<T>>,
}

impl<T> Event<T> {
    /// Register `listener` and return the subscription's [`Disposable`].
    ///
    /// Disposing it removes the listener; disposing twice is a no-op.
    /// Dropping the handle without disposing keeps the subscription alive
    /// for as long as the emitter lives.
    pub fn subscribe<F>(&self, listener: F) -> Disposable
    where
        F: Fn(&T) + Send + Sync + 'static,
        T: 'static,
    {
        let Some(set) = self.set.upgrade() else {
            let dead = Disposable::new();
            dead.dispose();
            return dead;
        };

        let id = set.next_id.fetch_add(1, Ordering::Relaxed);
        set.entries().push((id, Arc::new(listener)));

        let weak = Arc::downgrade(&set);
        Disposable::with_callback(move || {
            if let Some(set) = weak.upgrade() {
                set.entries().retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Whether the emitting side is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.set.strong_count() > 0
    }
}

impl<T> Clone for Event<T> {
    fn clone(&self) -> Self {
        Self {
            set: Weak::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("live", &self.is_live())
            .finish()
    }
}
