//! Error types for the widgets crate.

use thiserror::Error;

/// Errors raised at the boundary where raw input becomes an [`AppAction`](crate::AppAction)
///
/// The store itself never fails: unknown actions pass through every slice.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The text was not JSON at all
    #[error("Action is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
