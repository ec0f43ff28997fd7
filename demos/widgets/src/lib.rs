//! # Widgets
//!
//! A counter and a to-do list sharing one Statefold store.
//!
//! This crate showcases:
//! - Two slice reducers receiving the same action stream
//! - A root state declared with `combine_slices!`
//! - An action enum that doubles as the JSON wire contract
//! - Components that dispatch from handlers and re-draw on slice changes
//!
//! ## Architecture
//!
//! ```text
//! CounterWidget ─┐                          ┌─ CounterReducer → counter
//!                ├─ dispatch(AppAction) ─→ AppReducer
//! TodosWidget ───┘                          └─ TodosReducer   → todos
//!        ↑                                         │
//!        └──────────── watch(slice) ←──── notify ←─┘
//! ```
//!
//! ## Example
//!
//! ```
//! use widgets::{create_store, AppAction};
//!
//! let store = create_store();
//!
//! store.dispatch(AppAction::Increment);
//! store.dispatch(AppAction::add_todo("buy milk"));
//!
//! let state = store.get_state();
//! assert_eq!(state.counter.value, 1);
//! assert_eq!(*state.todos.list, vec!["buy milk".to_string()]);
//! ```

pub mod action;
pub mod app;
pub mod components;
pub mod counter;
pub mod error;
pub mod todos;

// Re-export commonly used types
pub use action::AppAction;
pub use app::{AppReducer, AppState, AppStore, create_store, create_store_with};
pub use components::{App, CounterWidget, TodosWidget};
pub use counter::{CounterReducer, CounterState};
pub use error::WidgetError;
pub use todos::{TodoState, TodosReducer};
