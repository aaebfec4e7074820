//! Element handle trait.
//!
//! An [`ElementHandle`] is a live reference to one on-screen element,
//! produced by [`AutomationDriver::find_element`](crate::driver::AutomationDriver::find_element).
//! Handles are created per lookup and do not outlive a test step; a handle
//! whose element has left the screen reports failures (or `false` from the
//! probes) rather than going stale silently.
//!
//! Note that the handle exposes instantaneous probes only
//! (`is_displayed`, `is_existing`); timeout-bounded waiting lives in
//! [`PageOperations`](crate::page::PageOperations) so that `Timeout` stays a
//! first-class condition of this layer.

use std::fmt;

use async_trait::async_trait;

use crate::driver::DriverError;
use crate::geometry::Rect;

/// A live handle to an on-screen element.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// The element's bounding box in screen coordinates.
    async fn rect(&self) -> Result<Rect, DriverError>;

    /// Tap the element.
    async fn click(&self) -> Result<(), DriverError>;

    /// Type text into the element.
    async fn set_value(&self, text: &str) -> Result<(), DriverError>;

    /// Clear the element's current value.
    async fn clear_value(&self) -> Result<(), DriverError>;

    /// The element's visible text.
    async fn text(&self) -> Result<String, DriverError>;

    /// Whether the element is currently displayed.
    async fn is_displayed(&self) -> Result<bool, DriverError>;

    /// Whether the element still exists in the UI hierarchy.
    async fn is_existing(&self) -> Result<bool, DriverError>;

    /// Scroll the element into the viewport.
    async fn scroll_into_view(&self) -> Result<(), DriverError>;
}

impl fmt::Debug for dyn ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn ElementHandle")
    }
}
