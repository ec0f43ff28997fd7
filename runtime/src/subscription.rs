//! Subscriber bookkeeping for the Store.
//!
//! Listeners live in a registry shared between the store and the
//! [`Subscription`] handles it hands out. Handles hold only a weak
//! reference, so a handle that outlives its store is inert.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A registered state listener
pub(crate) type Listener<S> = Rc<dyn Fn(&S)>;

/// Ordered set of listeners keyed by subscription id
pub(crate) struct Registry<S> {
    next_id: u64,
    listeners: Vec<(u64, Listener<S>)>,
}

impl<S> Registry<S> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, listener: Listener<S>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    /// Listeners in registration order, detached from the registry so that
    /// callbacks may subscribe or unsubscribe while being notified.
    pub(crate) fn snapshot(&self) -> Vec<Listener<S>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

/// Handle to a registered subscriber
///
/// Returned by [`Store::subscribe`](crate::Store::subscribe) and
/// [`Store::watch`](crate::Store::watch). Dropping the handle does not
/// detach the subscriber; call [`Subscription::unsubscribe`].
#[must_use = "the subscriber stays registered; keep the handle to unsubscribe later"]
pub struct Subscription<S> {
    id: u64,
    registry: Weak<RefCell<Registry<S>>>,
}

impl<S> Subscription<S> {
    pub(crate) const fn new(id: u64, registry: Weak<RefCell<Registry<S>>>) -> Self {
        Self { id, registry }
    }

    /// Identifier of this subscription within its store
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Detach the subscriber
    ///
    /// Returns `true` if the subscriber was still registered. Calling it again,
    /// or after the store is gone, returns `false`.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };

        let mut registry = registry.borrow_mut();
        let removed = registry.remove(self.id);
        if removed {
            metrics::gauge!("store.subscribers").set(registry.len() as f64);
            tracing::trace!(subscriber = self.id, "Subscriber removed");
        }
        removed
    }

    /// Whether the subscriber is still registered with a live store
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl<S> fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
