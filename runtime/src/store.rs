//! The Store - runtime coordinator for a reducer.

use crate::config::StoreConfig;
use crate::subscription::{Registry, Subscription};
use statefold_core::{action::Action, reducer::Reducer};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (an immutable snapshot, replaced on every dispatch)
/// 2. Reducer (state transition logic)
/// 3. Subscribers (notified once after every dispatch)
///
/// Cloning a Store yields another handle to the same state. The state is
/// dropped with the last handle. Callbacks registered on the store should
/// capture a [`WeakStore`] rather than a clone, otherwise the store keeps
/// itself alive through its own subscriber.
///
/// # Type Parameters
///
/// - `R`: Reducer implementation; its `State` and `Action` types define the store
///
/// # Example
///
/// ```
/// use statefold_core::{Action, Reducer};
/// use statefold_runtime::Store;
///
/// #[derive(Debug)]
/// enum Step {
///     Forward,
///     Back,
/// }
///
/// impl Action for Step {
///     fn action_type(&self) -> &'static str {
///         match self {
///             Self::Forward => "step/forward",
///             Self::Back => "step/back",
///         }
///     }
/// }
///
/// struct StepReducer;
///
/// impl Reducer for StepReducer {
///     type State = i32;
///     type Action = Step;
///
///     fn reduce(&self, state: &i32, action: &Step) -> i32 {
///         match action {
///             Step::Forward => state + 1,
///             Step::Back => state - 1,
///         }
///     }
/// }
///
/// let store = Store::with_state(10, StepReducer);
/// let seen = std::rc::Rc::new(std::cell::Cell::new(0));
/// let sink = std::rc::Rc::clone(&seen);
/// let subscription = store.subscribe(move |position| sink.set(*position));
///
/// store.dispatch(Step::Forward);
/// assert_eq!(seen.get(), 11);
///
/// subscription.unsubscribe();
/// store.dispatch(Step::Back);
/// assert_eq!(seen.get(), 11);
/// assert_eq!(*store.get_state(), 10);
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    inner: Rc<Inner<R>>,
}

struct Inner<R>
where
    R: Reducer,
{
    state: RefCell<Rc<R::State>>,
    reducer: R,
    subscribers: Rc<RefCell<Registry<R::State>>>,
    config: StoreConfig,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: fmt::Debug + 'static,
    R::Action: Action,
{
    /// Create a store whose initial state is the reducer state's default
    #[must_use]
    pub fn new(reducer: R) -> Self
    where
        R::State: Default,
    {
        Self::with_state(R::State::default(), reducer)
    }

    /// Create a store with an explicit initial state
    #[must_use]
    pub fn with_state(initial_state: R::State, reducer: R) -> Self {
        Self::with_config(initial_state, reducer, StoreConfig::default())
    }

    /// Create a store with an explicit initial state and configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::with_config(
    ///     AppState::default(),
    ///     AppReducer::default(),
    ///     StoreConfig::new("app").with_state_tracing(true),
    /// );
    /// ```
    #[must_use]
    pub fn with_config(initial_state: R::State, reducer: R, config: StoreConfig) -> Self {
        tracing::debug!(store = %config.label, "Store created");

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial_state)),
                reducer,
                subscribers: Rc::new(RefCell::new(Registry::new())),
                config,
            }),
        }
    }

    /// The configuration this store was created with
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Dispatch an action
    ///
    /// Runs the reducer on the current snapshot, replaces the snapshot with
    /// the result, then notifies every subscriber exactly once with the new
    /// state. Returns the new snapshot.
    ///
    /// Actions no reducer recognizes are not an error: the state passes
    /// through unchanged and subscribers are still notified.
    ///
    /// Subscribers may dispatch from their callback through a [`WeakStore`].
    /// The nested dispatch runs to completion before the remaining
    /// subscribers of the outer dispatch are called.
    ///
    /// # Panics
    ///
    /// A panicking reducer is a programming defect. The panic propagates to
    /// the caller and the previous snapshot stays current.
    #[tracing::instrument(
        skip_all,
        name = "store_dispatch",
        fields(store = %self.inner.config.label, action = action.action_type())
    )]
    pub fn dispatch(&self, action: R::Action) -> Rc<R::State> {
        tracing::debug!("Processing action");
        metrics::counter!("store.actions.total", "action_type" => action.action_type())
            .increment(1);

        let current = self.get_state();

        let next = {
            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = Instant::now();
            let next = self.inner.reducer.reduce(&current, &action);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            Rc::new(next)
        };

        if self.inner.config.trace_state {
            tracing::trace!(state = ?next, "State replaced");
        }

        *self.inner.state.borrow_mut() = Rc::clone(&next);
        self.notify(&next);

        tracing::debug!("Action processing completed");
        next
    }

    /// Current state snapshot
    ///
    /// The snapshot is shared and immutable; later dispatches replace the
    /// store's snapshot without affecting ones already handed out.
    #[must_use]
    pub fn get_state(&self) -> Rc<R::State> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.counter.value);
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let snapshot = self.get_state();
        f(&snapshot)
    }

    /// Register a callback invoked after every dispatch
    ///
    /// Callbacks run in registration order. The returned handle detaches the
    /// callback; dropping it leaves the callback registered. Subscribers added
    /// or removed while a dispatch is notifying take effect from the next
    /// dispatch.
    ///
    /// A callback that needs the store should capture [`Store::downgrade`].
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R::State>
    where
        F: Fn(&R::State) + 'static,
    {
        let (id, count) = {
            let mut registry = self.inner.subscribers.borrow_mut();
            let id = registry.insert(Rc::new(listener));
            (id, registry.len())
        };

        metrics::counter!("store.subscriptions.total").increment(1);
        metrics::gauge!("store.subscribers").set(count as f64);
        tracing::trace!(store = %self.inner.config.label, subscriber = id, count, "Subscriber registered");

        Subscription::new(id, Rc::downgrade(&self.inner.subscribers))
    }

    /// Register a callback invoked only when a selected value changes
    ///
    /// `selector` runs after every dispatch; `on_change` receives the new
    /// value when it differs from the previously selected one. The first
    /// comparison is against the value selected at registration time, so
    /// registering does not fire the callback.
    ///
    /// This is how a component subscribes to a single slice:
    ///
    /// ```ignore
    /// store.watch(|s| s.counter.value, |value| redraw(*value));
    /// ```
    pub fn watch<T, Sel, F>(&self, selector: Sel, on_change: F) -> Subscription<R::State>
    where
        T: PartialEq + Clone + 'static,
        Sel: Fn(&R::State) -> T + 'static,
        F: Fn(&T) + 'static,
    {
        let last = RefCell::new(self.state(&selector));

        self.subscribe(move |state| {
            let selected = selector(state);
            if *last.borrow() == selected {
                return;
            }

            *last.borrow_mut() = selected.clone();
            on_change(&selected);
        })
    }

    /// Number of registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// A handle that does not keep the store alive
    #[must_use]
    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self, state: &R::State) {
        let listeners = self.inner.subscribers.borrow().snapshot();
        tracing::trace!(subscribers = listeners.len(), "Notifying subscribers");

        for listener in listeners {
            listener(state);
        }
    }
}

impl<R> Clone for Store<R>
where
    R: Reducer,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R> fmt::Debug for Store<R>
where
    R: Reducer,
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("label", &self.inner.config.label)
            .field("state", &self.inner.state.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Non-owning handle to a [`Store`]
///
/// Obtained from [`Store::downgrade`]. Meant to be captured by subscriber
/// callbacks; once every `Store` handle is gone it resolves to nothing.
pub struct WeakStore<R>
where
    R: Reducer,
{
    inner: Weak<Inner<R>>,
}

impl<R> WeakStore<R>
where
    R: Reducer,
    R::State: fmt::Debug + 'static,
    R::Action: Action,
{
    /// The store, if any `Store` handle is still alive
    #[must_use]
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }

    /// Dispatch to the store if it is still alive
    ///
    /// Returns the new snapshot, or `None` when the store has been dropped.
    pub fn dispatch(&self, action: R::Action) -> Option<Rc<R::State>> {
        let Some(store) = self.upgrade() else {
            tracing::debug!(action = action.action_type(), "Store gone, action dropped");
            return None;
        };

        Some(store.dispatch(action))
    }
}

impl<R> Clone for WeakStore<R>
where
    R: Reducer,
{
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R> fmt::Debug for WeakStore<R>
where
    R: Reducer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakStore")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
