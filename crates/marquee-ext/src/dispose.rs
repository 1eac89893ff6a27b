//! One-shot disposable resources with parent/child cleanup.
//!
//! Extensions hand resources (event subscriptions, registered commands) to
//! the host as [`Disposable`] handles. Disposing a node releases its whole
//! subtree: every registered child is disposed depth-first before the node's
//! own release callback runs. A node's callback never fires twice.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

/// Errors from disposable registration.
#[derive(Debug, Error)]
pub enum DisposeError {
    /// A disposable cannot own itself; disposal would never terminate.
    #[error("a disposable cannot be registered as its own child")]
    SelfRegistration,
}

type DisposeCallback = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Inner {
    /// Children to dispose of when this node is disposed or cleared.
    to_dispose: Vec<Disposable>,
    /// Whether this node is already disposed.
    is_disposed: bool,
    /// Release callback, taken (and therefore run) at most once.
    on_dispose: Option<DisposeCallback>,
}

/// A shared handle to a one-shot disposable resource.
///
/// Handles are cheap to clone; clones refer to the same node. Registering a
/// child parks it on the parent so that disposing the parent releases the
/// whole subtree. Disposal is idempotent: the release callback runs at most
/// once, and repeat calls are no-ops.
#[derive(Clone, Default)]
pub struct Disposable {
    inner: Arc<Mutex<Inner>>,
}

impl Disposable {
    /// Create a disposable with no release callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a disposable that runs `callback` when disposed.
    #[must_use]
    pub fn with_callback(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                to_dispose: Vec::new(),
                is_disposed: false,
                on_dispose: Some(Box::new(callback)),
            })),
        }
    }

    // Disposal frequently runs during teardown; a listener that panicked
    // must not prevent the rest of the tree from being released.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether this node has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lock().is_disposed
    }

    /// Number of children currently registered on this node.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.lock().to_dispose.len()
    }

    /// Register `child` so it is disposed together with this node.
    ///
    /// Parent and child must be distinct nodes. If this node is already
    /// disposed the child is disposed immediately instead of being retained:
    /// a disposed parent will never be disposed again, so a retained child
    /// would leak.
    pub fn register(&self, child: Disposable) -> Result<(), DisposeError> {
        if Arc::ptr_eq(&self.inner, &child.inner) {
            return Err(DisposeError::SelfRegistration);
        }
        let parent_disposed = {
            let mut inner = self.lock();
            if inner.is_disposed {
                true
            } else {
                inner.to_dispose.push(child.clone());
                false
            }
        };
        if parent_disposed {
            child.dispose();
        }
        Ok(())
    }

    /// Dispose every current child and empty the child list.
    ///
    /// The node itself stays live: its flag is untouched and its callback
    /// does not run. Children are drained under the lock before any of their
    /// callbacks fire, so mutual registration cannot recurse forever.
    pub fn clear(&self) {
        let children = std::mem::take(&mut self.lock().to_dispose);
        for child in children {
            child.dispose();
        }
    }

    /// Dispose this node and its whole subtree.
    ///
    /// Children are disposed first, then the node's own callback runs once
    /// and the node is marked disposed. Calling `dispose` again is a no-op.
    /// Callbacks are invoked outside the node lock, so a callback may safely
    /// touch the tree it is part of.
    pub fn dispose(&self) {
        self.clear();
        let callback = {
            let mut inner = self.lock();
            if inner.is_disposed {
                None
            } else {
                inner.is_disposed = true;
                inner.on_dispose.take()
            }
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Disposable")
            .field("is_disposed", &inner.is_disposed)
            .field("children", &inner.to_dispose.len())
            .finish_non_exhaustive()
    }
}
