//! Notification capture for store tests.

use statefold_core::{action::Action, reducer::Reducer};
use statefold_runtime::{Store, Subscription};
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// Subscriber that keeps a copy of every state it is notified with
///
/// # Example
///
/// ```ignore
/// let recorder = NotificationRecorder::attach(&store);
///
/// store.dispatch(AppAction::Increment);
/// store.dispatch(AppAction::Increment);
///
/// assert_eq!(recorder.count(), 2);
/// assert_eq!(recorder.last().map(|s| s.counter.value), Some(2));
/// ```
pub struct NotificationRecorder<S> {
    snapshots: Rc<RefCell<Vec<S>>>,
    subscription: Subscription<S>,
}

impl<S> NotificationRecorder<S>
where
    S: Clone + Debug + 'static,
{
    /// Subscribe a new recorder to `store`
    #[must_use]
    pub fn attach<R>(store: &Store<R>) -> Self
    where
        R: Reducer<State = S>,
        R::Action: Action,
    {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshots);
        let subscription = store.subscribe(move |state: &S| sink.borrow_mut().push(state.clone()));

        Self {
            snapshots,
            subscription,
        }
    }

    /// Number of notifications received
    #[must_use]
    pub fn count(&self) -> usize {
        self.snapshots.borrow().len()
    }

    /// Every state received, oldest first
    #[must_use]
    pub fn snapshots(&self) -> Vec<S> {
        self.snapshots.borrow().clone()
    }

    /// The most recent state received
    #[must_use]
    pub fn last(&self) -> Option<S> {
        self.snapshots.borrow().last().cloned()
    }

    /// Stop recording; returns `false` if already detached
    pub fn detach(&self) -> bool {
        self.subscription.unsubscribe()
    }
}

impl<S> Debug for NotificationRecorder<S>
where
    S: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationRecorder")
            .field("snapshots", &self.snapshots.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}
