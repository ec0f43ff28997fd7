//! Counter slice.

use crate::action::AppAction;
use serde::{Deserialize, Serialize};
use statefold_core::Reducer;

/// Counter state
///
/// No bounds are enforced; the value may go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count value
    pub value: i64,
}

/// Counter reducer
///
/// Handles `counter/increment` and `counter/decrement`; every other action
/// returns the state unchanged. Arithmetic wraps at the `i64` limits so the
/// reducer is total.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = AppAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::Increment => CounterState {
                value: state.value.wrapping_add(1),
            },
            AppAction::Decrement => CounterState {
                value: state.value.wrapping_sub(1),
            },
            AppAction::AddTodo { .. } | AppAction::Unknown => *state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefold_testing::ReducerTest;

    #[test]
    fn test_increment() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState::default())
            .when_action(AppAction::Increment)
            .then_state(|state| assert_eq!(state.value, 1))
            .run();
    }

    #[test]
    fn test_decrement() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState { value: 5 })
            .when_action(AppAction::Decrement)
            .then_state(|state| assert_eq!(state.value, 4))
            .run();
    }

    #[test]
    fn test_goes_negative() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState::default())
            .when_actions([AppAction::Decrement, AppAction::Decrement])
            .then_state(|state| assert_eq!(state.value, -2))
            .run();
    }

    #[test]
    fn test_ignores_todo_actions() {
        ReducerTest::new(CounterReducer::new())
            .given_state(CounterState { value: 3 })
            .when_actions([AppAction::add_todo("a"), AppAction::Unknown])
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_wraps_at_limits() {
        let reducer = CounterReducer::new();

        let top = reducer.reduce(&CounterState { value: i64::MAX }, &AppAction::Increment);
        assert_eq!(top.value, i64::MIN);

        let bottom = reducer.reduce(&CounterState { value: i64::MIN }, &AppAction::Decrement);
        assert_eq!(bottom.value, i64::MAX);
    }
}
