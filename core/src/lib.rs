//! # Statefold Core
//!
//! Core traits for building UI state with a single reducer-driven store.
//!
//! ## Core Concepts
//!
//! - **State**: Plain data for a slice of the application
//! - **Action**: A closed enum describing an intended state change
//! - **Reducer**: Pure function `(&State, &Action) → State`
//! - **Slice**: A named sub-state owned by exactly one reducer
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: dispatch → reduce → notify
//! - State is replaced, never mutated in place
//! - Reducers are total: actions a slice does not handle pass through
//!
//! ## Example
//!
//! ```
//! use statefold_core::{Action, Reducer};
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Tick {
//!     Up,
//!     Other,
//! }
//!
//! impl Action for Tick {
//!     fn action_type(&self) -> &'static str {
//!         match self {
//!             Self::Up => "tick/up",
//!             Self::Other => "other",
//!         }
//!     }
//! }
//!
//! struct TickReducer;
//!
//! impl Reducer for TickReducer {
//!     type State = u32;
//!     type Action = Tick;
//!
//!     fn reduce(&self, state: &u32, action: &Tick) -> u32 {
//!         match action {
//!             Tick::Up => state + 1,
//!             Tick::Other => *state,
//!         }
//!     }
//! }
//!
//! assert_eq!(TickReducer.reduce(&1, &Tick::Up), 2);
//! assert_eq!(TickReducer.reduce(&1, &Tick::Other), 1);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Action module - the input type dispatched to a store
///
/// Actions are closed enums with one variant per kind of change. Each
/// action reports a stable string tag used on the wire and in logs.
pub mod action {
    /// Common behaviour for dispatchable actions
    ///
    /// # Example
    ///
    /// ```
    /// use statefold_core::Action;
    ///
    /// #[derive(Debug)]
    /// enum LampAction {
    ///     Toggle,
    /// }
    ///
    /// impl Action for LampAction {
    ///     fn action_type(&self) -> &'static str {
    ///         match self {
    ///             Self::Toggle => "lamp/toggle",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LampAction::Toggle.action_type(), "lamp/toggle");
    /// ```
    pub trait Action: std::fmt::Debug {
        /// The discriminator tag of this action (e.g. `"counter/increment"`)
        fn action_type(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for state transitions
///
/// Reducers are pure functions: `(&State, &Action) → State`
///
/// They hold all of the state transition logic and are deterministic and
/// testable without a store.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer produces
    /// - `Action`: The action type this reducer receives
    ///
    /// # Contract
    ///
    /// - Total: every action yields a state. Actions the reducer does not
    ///   handle return the input unchanged.
    /// - Pure: no side effects, and identical inputs yield equal outputs.
    /// - Non-mutating: the input state is borrowed immutably and a new value
    ///   is returned. Unchanged parts may be shared with the input.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Compute the next state from the current state and an action
        fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
    }
}

// Re-export commonly used items
pub use action::Action;
pub use reducer::Reducer;
