//! Automation driver trait for backend-agnostic device control.
//!
//! This module defines the [`AutomationDriver`] trait, the consumed boundary
//! between this library and whatever actually talks to the automation server
//! (an HTTP client for a remote Appium endpoint, a scripted fake for tests).
//! Gestures, page operations, and specs only ever see this trait; they never
//! know how a pointer batch reaches a device.
//!
//! The single driver handle is exclusively owned by the running test process
//! for the session's lifetime. Operations against it are sequential: every
//! call suspends the caller until the server responds, and no two components
//! submit actions concurrently. Once a pointer batch is submitted it runs to
//! completion or failure; there is no cancellation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::element::ElementHandle;
use crate::geometry::Size;
use crate::pointer::PointerSequence;

/// Errors reported by driver implementations.
///
/// This enum unifies transport and protocol failures behind a single type so
/// the layers above can handle them uniformly regardless of the backend.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A command was rejected or failed on the automation server.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// The backend is not connected to an automation server.
    #[error("Not connected to automation server")]
    NotConnected,

    /// The connection to the automation server was lost mid-command.
    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    /// The server did not respond within the transport deadline.
    #[error("Operation timed out")]
    Timeout,

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for backend-agnostic mobile device automation.
///
/// Implementors provide the raw device capabilities: executing pointer-action
/// batches, resolving locator strings into element handles, and answering
/// window/platform queries. All methods are async; each one is a round-trip
/// to the automation server.
#[async_trait]
pub trait AutomationDriver: Send + Sync {
    /// Submit one atomic batch of pointer-action sequences.
    ///
    /// Sequences in the batch (one per finger) run concurrently; the server
    /// interleaves their steps. The call returns once the whole batch has
    /// been replayed.
    async fn perform_pointer_actions(&self, batch: &[PointerSequence]) -> Result<(), DriverError>;

    /// Release all pointer state held by the previous batch.
    ///
    /// Must be called after every batch: a finger left logically pressed
    /// leaks into the next gesture.
    async fn release_pointer_actions(&self) -> Result<(), DriverError>;

    /// The size of the device window in screen points.
    async fn window_size(&self) -> Result<Size, DriverError>;

    /// Resolve a platform-native locator string into an element handle.
    ///
    /// Returns `Ok(None)` when no element matches — absence is an answer,
    /// not an error. The locator string is opaque to this library; its
    /// meaning (accessibility id, resource id, …) belongs to the backend.
    async fn find_element(
        &self,
        locator: &str,
    ) -> Result<Option<Arc<dyn ElementHandle>>, DriverError>;

    /// The platform name reported by the server's session capabilities,
    /// e.g. `"Android"` or `"iOS"`.
    async fn platform_name(&self) -> Result<String, DriverError>;

    /// Suspend the session for the given duration.
    async fn pause(&self, duration: Duration) -> Result<(), DriverError>;

    /// Dismiss the on-screen keyboard.
    ///
    /// Fails when no keyboard is up; callers that don't care wrap this in a
    /// probe (see [`PageOperations::hide_keyboard`](crate::page::PageOperations::hide_keyboard)).
    async fn hide_keyboard(&self) -> Result<(), DriverError>;

    /// Capture a screenshot of the current screen.
    ///
    /// # Returns
    ///
    /// Raw PNG image bytes.
    async fn screenshot(&self) -> Result<Vec<u8>, DriverError>;
}

impl fmt::Debug for dyn AutomationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn AutomationDriver")
    }
}
