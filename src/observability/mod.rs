//! Observability helpers for the Slack provider.
//!
//! The crate only emits `tracing` events and spans; installing a subscriber
//! is left to the host.

pub mod logging;

pub use logging::*;
