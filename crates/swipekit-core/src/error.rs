//! Error taxonomy for the automation layer.
//!
//! Errors fall into four categories with distinct propagation rules:
//!
//! - [`AutomationError::InvalidArgument`] and [`AutomationError::Lookup`] are
//!   programmer errors. They surface immediately and are never retried.
//! - [`AutomationError::Driver`] wraps a transport or protocol failure from
//!   the automation server. It propagates to the caller unchanged; this layer
//!   performs no local recovery.
//! - [`AutomationError::Timeout`] is raised when a bounded wait expires.
//!
//! The one deliberate exception is probe operations
//! ([`PageOperations::is_visible`](crate::page::PageOperations::is_visible)
//! and friends), which convert any failure into boolean `false` at the call
//! boundary. No component in this layer retries automatically; retry is an
//! explicit caller-level wrapper ([`util::retry`](crate::util::retry)).

use thiserror::Error;

use crate::driver::DriverError;
use crate::selector::Platform;

/// Errors produced by the gesture, selector, and page layers.
#[derive(Error, Debug)]
pub enum AutomationError {
    /// A caller contract violation: bad direction, percentage, or scale.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A logical element name is not present in the page's selector table.
    #[error("No selector named '{name}' for platform {platform}")]
    Lookup {
        /// The logical element name that was requested.
        name: String,
        /// The platform the lookup was resolved against.
        platform: Platform,
    },

    /// A failure reported by the automation server.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// A bounded wait expired before its condition held.
    #[error("Timeout after {timeout_ms}ms {operation}")]
    Timeout {
        /// What the wait was for, e.g. `waiting for element 'login-button'`.
        operation: String,
        /// The configured bound in milliseconds.
        timeout_ms: u64,
    },
}
