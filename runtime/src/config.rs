//! Configuration for [`Store`](crate::Store) instances.

/// Configuration for a Store
///
/// # Example
///
/// ```
/// use statefold_runtime::StoreConfig;
///
/// let config = StoreConfig::new("app").with_state_tracing(true);
/// assert_eq!(config.label, "app");
/// assert!(config.trace_state);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name recorded on every dispatch span
    pub label: String,
    /// Log the full state after each dispatch at `trace` level
    pub trace_state: bool,
}

impl StoreConfig {
    /// Create a configuration with the given label and default options
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            trace_state: false,
        }
    }

    /// Set the label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Enable or disable state snapshots in the trace log
    #[must_use]
    pub const fn with_state_tracing(mut self, enabled: bool) -> Self {
        self.trace_state = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("store")
    }
}
