//! Todo list slice.

use crate::action::AppAction;
use serde::{Deserialize, Serialize};
use statefold_core::Reducer;
use std::sync::Arc;

/// Todo list state
///
/// Items keep insertion order and may repeat. The list is shared between
/// snapshots until an append replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Item texts, oldest first
    pub list: Arc<Vec<String>>,
}

impl TodoState {
    /// Build a state holding `items` in order
    #[must_use]
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            list: Arc::new(items.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Item texts, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.list.iter().map(String::as_str)
    }
}

/// Todo list reducer
///
/// Handles `todos/add` by appending the payload verbatim; every other action
/// returns the state unchanged and shares its list.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Create a new todos reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodoState;
    type Action = AppAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::AddTodo { payload } => {
                let mut list = Vec::with_capacity(state.list.len() + 1);
                list.extend(state.list.iter().cloned());
                list.push(payload.clone());

                TodoState {
                    list: Arc::new(list),
                }
            },
            AppAction::Increment | AppAction::Decrement | AppAction::Unknown => state.clone(),
        }
    }
}
