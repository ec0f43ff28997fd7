//! Actions shared by the counter and todos widgets.
//!
//! On the wire an action is a JSON object tagged by `type`:
//!
//! ```text
//! { "type": "counter/increment" }
//! { "type": "counter/decrement" }
//! { "type": "todos/add", "payload": "buy milk" }
//! ```

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};
use statefold_core::Action;

/// Every action the UI can dispatch
///
/// Each slice reducer receives every action and matches on all variants, so
/// adding a variant forces every slice to decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AppAction {
    /// Add one to the counter
    #[serde(rename = "counter/increment")]
    Increment,

    /// Subtract one from the counter
    #[serde(rename = "counter/decrement")]
    Decrement,

    /// Append a to-do item
    #[serde(rename = "todos/add")]
    AddTodo {
        /// Item text, kept verbatim
        payload: String,
    },

    /// Any action type no slice recognizes
    #[serde(other)]
    Unknown,
}

impl AppAction {
    /// Convenience constructor for [`AppAction::AddTodo`]
    #[must_use]
    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::AddTodo {
            payload: text.into(),
        }
    }

    /// Decode an action from a JSON value
    ///
    /// Never fails: a value that does not match any known shape (missing
    /// `type`, missing or non-string `payload`, not an object) becomes
    /// [`AppAction::Unknown`], which every slice passes through.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(action) => action,
            Err(error) => {
                tracing::warn!(%error, "Malformed action treated as unknown");
                Self::Unknown
            },
        }
    }

    /// Decode an action from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidJson`] only when `text` is not JSON.
    /// Well-formed JSON of the wrong shape decodes to [`AppAction::Unknown`].
    pub fn from_json(text: &str) -> Result<Self, WidgetError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }
}

impl Action for AppAction {
    fn action_type(&self) -> &'static str {
        match self {
            Self::Increment => "counter/increment",
            Self::Decrement => "counter/decrement",
            Self::AddTodo { .. } => "todos/add",
            Self::Unknown => "unknown",
        }
    }
}
