//! Root state and store for the widgets.

use crate::action::AppAction;
use crate::counter::CounterReducer;
use crate::todos::TodosReducer;
use serde::{Deserialize, Serialize};
use statefold_core::combine_slices;
use statefold_runtime::{Store, StoreConfig};

combine_slices! {
    /// Aggregate state read by every widget
    ///
    /// Serializes as `{ "counter": { "value": n }, "todos": { "list": [..] } }`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AppState;

    /// Root reducer: hands every action to both slices
    #[derive(Debug, Clone, Copy, Default)]
    pub struct AppReducer for AppAction {
        /// Counter slice
        counter: CounterReducer,
        /// Todo list slice
        todos: TodosReducer,
    }
}

/// The store shared by all widgets
pub type AppStore = Store<AppReducer>;

/// Create the application store with every slice at its default
#[must_use]
pub fn create_store() -> AppStore {
    create_store_with(AppState::default())
}

/// Create the application store from an explicit initial state
#[must_use]
pub fn create_store_with(initial_state: AppState) -> AppStore {
    Store::with_config(initial_state, AppReducer::default(), StoreConfig::new("widgets"))
}
