//! # Statefold Runtime
//!
//! Runtime implementation for the Statefold architecture.
//!
//! This crate provides the [`Store`] that owns the current state, runs the
//! reducer for every dispatched action, and notifies subscribers.
//!
//! ## Core Components
//!
//! - **Store**: Holds the state snapshot and the reducer; the only writer
//! - **Subscription**: Handle returned by `subscribe`/`watch`, used to detach
//! - **`WeakStore`**: Non-owning store handle for use inside subscriber callbacks
//! - **`StoreConfig`**: Label and tracing options for a store
//!
//! ## Data Flow
//!
//! ```text
//! dispatch(action) → reducer(&state, &action) → replace snapshot → notify subscribers
//! ```
//!
//! The store is single-threaded: handles are cheap `Rc` clones meant to be
//! passed to the components that need them, and every dispatch runs to
//! completion before returning.
//!
//! ## Example
//!
//! ```
//! use statefold_core::{Action, Reducer};
//! use statefold_runtime::Store;
//!
//! #[derive(Debug)]
//! enum Toggle {
//!     Flip,
//! }
//!
//! impl Action for Toggle {
//!     fn action_type(&self) -> &'static str {
//!         "toggle/flip"
//!     }
//! }
//!
//! struct ToggleReducer;
//!
//! impl Reducer for ToggleReducer {
//!     type State = bool;
//!     type Action = Toggle;
//!
//!     fn reduce(&self, state: &bool, _action: &Toggle) -> bool {
//!         !state
//!     }
//! }
//!
//! let store = Store::new(ToggleReducer);
//! store.dispatch(Toggle::Flip);
//! assert!(store.state(|on| *on));
//! ```

/// Store configuration
pub mod config;

/// The Store runtime
pub mod store;

/// Subscriber registry and subscription handles
pub mod subscription;

pub use config::StoreConfig;
pub use store::{Store, WeakStore};
pub use subscription::Subscription;
