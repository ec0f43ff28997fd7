//! Reducer composition utilities
//!
//! **`combine_slices!`** declares an aggregate state from named slices, each
//! owned by its own reducer, and generates the combined reducer.
//!
//! # Examples
//!
//! ## Combining Slices
//!
//! ```
//! use statefold_core::{combine_slices, Reducer};
//!
//! #[derive(Debug, Clone)]
//! pub enum Msg {
//!     Bump,
//!     Rename(String),
//! }
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct BumpReducer;
//!
//! impl Reducer for BumpReducer {
//!     type State = i64;
//!     type Action = Msg;
//!
//!     fn reduce(&self, state: &i64, action: &Msg) -> i64 {
//!         match action {
//!             Msg::Bump => state + 1,
//!             Msg::Rename(_) => *state,
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct NameReducer;
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = Msg;
//!
//!     fn reduce(&self, state: &String, action: &Msg) -> String {
//!         match action {
//!             Msg::Rename(name) => name.clone(),
//!             Msg::Bump => state.clone(),
//!         }
//!     }
//! }
//!
//! combine_slices! {
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct RootState;
//!
//!     #[derive(Debug, Clone, Copy, Default)]
//!     pub struct RootReducer for Msg {
//!         /// Bump count
//!         bumps: BumpReducer,
//!         /// Display name
//!         name: NameReducer,
//!     }
//! }
//!
//! let root = RootReducer::default();
//! let state = root.reduce(&RootState::default(), &Msg::Bump);
//! let state = root.reduce(&state, &Msg::Rename("ada".to_string()));
//! assert_eq!(state.bumps, 1);
//! assert_eq!(state.name, "ada");
//! assert_eq!(RootState::SLICE_NAMES, &["bumps", "name"]);
//! ```

/// Declares an aggregate state and its combined reducer from a fixed list
/// of named slices.
///
/// For every `name: SliceReducer` entry the macro generates:
/// - a `pub name: <SliceReducer as Reducer>::State` field on the state struct
/// - a `pub name: SliceReducer` field on the reducer struct
///
/// The generated reducer hands the same action to every slice reducer and
/// assembles their results into a new aggregate with the same fields.
/// `SLICE_NAMES` lists the slice keys in declaration order.
///
/// Attributes written before each struct (derives, docs) are forwarded to it.
/// Attributes written before a slice entry are forwarded to the state field.
#[macro_export]
macro_rules! combine_slices {
    (
        $(#[$state_meta:meta])*
        $state_vis:vis struct $state:ident;

        $(#[$reducer_meta:meta])*
        $reducer_vis:vis struct $reducer:ident for $action:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $slice:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$state_meta])*
        $state_vis struct $state {
            $(
                $(#[$field_meta])*
                pub $field: <$slice as $crate::reducer::Reducer>::State,
            )+
        }

        impl $state {
            /// Slice keys in declaration order
            pub const SLICE_NAMES: &'static [&'static str] = &[$(stringify!($field)),+];
        }

        $(#[$reducer_meta])*
        $reducer_vis struct $reducer {
            $(
                #[doc = concat!("Reducer owning the `", stringify!($field), "` slice")]
                pub $field: $slice,
            )+
        }

        impl $crate::reducer::Reducer for $reducer {
            type State = $state;
            type Action = $action;

            fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
                $state {
                    $(
                        $field: $crate::reducer::Reducer::reduce(&self.$field, &state.$field, action),
                    )+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::reducer::Reducer;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        SetName(String),
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct CountReducer;

    impl Reducer for CountReducer {
        type State = i32;
        type Action = TestAction;

        fn reduce(&self, state: &i32, action: &TestAction) -> i32 {
            match action {
                TestAction::Increment => state + 1,
                TestAction::Decrement => state - 1,
                TestAction::SetName(_) => *state,
            }
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct NameReducer;

    impl Reducer for NameReducer {
        type State = String;
        type Action = TestAction;

        fn reduce(&self, state: &String, action: &TestAction) -> String {
            match action {
                TestAction::SetName(name) => name.clone(),
                TestAction::Increment | TestAction::Decrement => state.clone(),
            }
        }
    }

    combine_slices! {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct TestState;

        #[derive(Debug, Clone, Copy, Default)]
        struct TestReducer for TestAction {
            counter: CountReducer,
            name: NameReducer,
        }
    }

    #[test]
    fn test_combine_slices_routes_to_every_slice() {
        let reducer = TestReducer::default();

        let state = reducer.reduce(&TestState::default(), &TestAction::Increment);
        assert_eq!(state.counter, 1);
        assert_eq!(state.name, "");

        let state = reducer.reduce(&state, &TestAction::SetName("Alice".to_string()));
        assert_eq!(state.counter, 1);
        assert_eq!(state.name, "Alice");

        let state = reducer.reduce(&state, &TestAction::Decrement);
        assert_eq!(state.counter, 0);
        assert_eq!(state.name, "Alice");
    }

    #[test]
    fn test_combine_slices_leaves_input_untouched() {
        let reducer = TestReducer::default();
        let before = TestState {
            counter: 7,
            name: "Bob".to_string(),
        };

        let after = reducer.reduce(&before, &TestAction::Increment);

        assert_eq!(before.counter, 7);
        assert_eq!(after.counter, 8);
    }

    #[test]
    fn test_slice_names_follow_declaration_order() {
        assert_eq!(TestState::SLICE_NAMES, &["counter", "name"]);
    }

    fn test_action() -> impl Strategy<Value = TestAction> {
        prop_oneof![
            Just(TestAction::Increment),
            Just(TestAction::Decrement),
            "[a-z]{0,8}".prop_map(TestAction::SetName),
        ]
    }

    proptest! {
        #[test]
        fn combined_matches_individual_slices(actions in prop::collection::vec(test_action(), 0..32)) {
            let reducer = TestReducer::default();
            let mut combined = TestState::default();
            let mut counter = 0;
            let mut name = String::new();

            for action in &actions {
                combined = reducer.reduce(&combined, action);
                counter = CountReducer.reduce(&counter, action);
                name = NameReducer.reduce(&name, action);
            }

            prop_assert_eq!(combined.counter, counter);
            prop_assert_eq!(combined.name, name);
        }
    }
}
