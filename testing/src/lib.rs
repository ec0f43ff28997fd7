//! # Statefold Testing
//!
//! Testing utilities and helpers for the Statefold store.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness that also checks reducer purity
//! - [`NotificationRecorder`]: Captures the snapshots a store hands to subscribers
//! - [`init_test_tracing`]: Routes `tracing` output to the test writer
//!
//! ## Example
//!
//! ```ignore
//! use statefold_testing::{NotificationRecorder, ReducerTest};
//!
//! ReducerTest::new(CounterReducer)
//!     .given_state(CounterState { value: 0 })
//!     .when_action(AppAction::Increment)
//!     .then_state(|state| assert_eq!(state.value, 1))
//!     .run();
//!
//! let store = Store::new(AppReducer::default());
//! let recorder = NotificationRecorder::attach(&store);
//! store.dispatch(AppAction::Increment);
//! assert_eq!(recorder.count(), 1);
//! ```


/// Subscriber that records every notification
pub mod recorder;

pub use recorder::NotificationRecorder;
pub use reducer_test::{ReducerTest, assertions};

/// Install a `tracing` subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
/// The filter honours `RUST_LOG` and defaults to `debug`.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
