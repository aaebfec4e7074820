//! Page-level operations.
//!
//! [`PageOperations`] is the capability concrete pages compose instead of
//! inheriting from a base class: a bundle of element-level operations over
//! the session. Waits poll the driver at a fixed interval until a bounded
//! timeout; probes (`is_visible`, `element_exists`) never fail and convert
//! any resolution failure into `false` — a deliberate boundary conversion
//! for checks that run against elements which may legitimately not exist.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::element::ElementHandle;
use crate::error::AutomationError;
use crate::geometry::Direction;
use crate::gestures::{Gestures, DEFAULT_SCREEN_SWIPE_PERCENTAGE};
use crate::session::Session;

/// How often waits re-probe the driver.
pub(crate) const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Settle time after a scroll swipe before re-probing.
const SCROLL_SETTLE: Duration = Duration::from_millis(500);

/// Element-level operations over a session.
#[derive(Clone)]
pub struct PageOperations {
    session: Session,
}

impl PageOperations {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Waits until the element is present and displayed, returning its
    /// handle.
    ///
    /// Polls every [`POLL_INTERVAL`]; fails with
    /// [`AutomationError::Timeout`] when the bound expires. Driver faults
    /// during polling propagate immediately.
    pub async fn wait_visible(
        &self,
        locator: &str,
        timeout: Duration,
    ) -> Result<Arc<dyn ElementHandle>, AutomationError> {
        let start = Instant::now();
        loop {
            if let Some(element) = self.session.driver().find_element(locator).await? {
                if element.is_displayed().await? {
                    return Ok(element);
                }
            }
            if start.elapsed() >= timeout {
                return Err(AutomationError::Timeout {
                    operation: format!("waiting for element '{locator}'"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Waits until the element is gone or no longer displayed.
    pub async fn wait_hidden(
        &self,
        locator: &str,
        timeout: Duration,
    ) -> Result<(), AutomationError> {
        let start = Instant::now();
        loop {
            let displayed = match self.session.driver().find_element(locator).await? {
                Some(element) => element.is_displayed().await?,
                None => false,
            };
            if !displayed {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(AutomationError::Timeout {
                    operation: format!("waiting for element '{locator}' to disappear"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Waits for the element, then taps it.
    pub async fn click(&self, locator: &str, timeout: Duration) -> Result<(), AutomationError> {
        let element = self.wait_visible(locator, timeout).await?;
        element.click().await?;
        Ok(())
    }

    /// Waits for the element, clears it, and types `value`.
    pub async fn set_text(
        &self,
        locator: &str,
        value: &str,
        timeout: Duration,
    ) -> Result<(), AutomationError> {
        let element = self.wait_visible(locator, timeout).await?;
        element.clear_value().await?;
        element.set_value(value).await?;
        Ok(())
    }

    /// Waits for the element and reads its text.
    pub async fn read_text(
        &self,
        locator: &str,
        timeout: Duration,
    ) -> Result<String, AutomationError> {
        let element = self.wait_visible(locator, timeout).await?;
        Ok(element.text().await?)
    }

    /// Probe: whether the element is currently displayed.
    ///
    /// Never fails. Any resolution failure — element absent, driver fault,
    /// anything — reads as "not visible".
    pub async fn is_visible(&self, locator: &str) -> bool {
        match self.session.driver().find_element(locator).await {
            Ok(Some(element)) => element.is_displayed().await.unwrap_or(false),
            Ok(None) | Err(_) => false,
        }
    }

    /// Probe: whether the element exists in the hierarchy, displayed or not.
    ///
    /// Never fails, same conversion as [`is_visible`](Self::is_visible).
    pub async fn element_exists(&self, locator: &str) -> bool {
        match self.session.driver().find_element(locator).await {
            Ok(Some(element)) => element.is_existing().await.unwrap_or(false),
            Ok(None) | Err(_) => false,
        }
    }

    /// Waits for the element and scrolls it into the viewport.
    pub async fn scroll_into_view(
        &self,
        locator: &str,
        timeout: Duration,
    ) -> Result<(), AutomationError> {
        let element = self.wait_visible(locator, timeout).await?;
        element.scroll_into_view().await?;
        Ok(())
    }

    /// Swipes up through the page until the element is visible, at most
    /// `max_swipes` times. Returns whether the element was found.
    pub async fn scroll_until_visible(
        &self,
        locator: &str,
        max_swipes: u32,
    ) -> Result<bool, AutomationError> {
        let gestures = Gestures::new(self.session.clone());
        for _ in 0..max_swipes {
            if self.is_visible(locator).await {
                return Ok(true);
            }
            gestures
                .swipe_screen(Direction::Up, DEFAULT_SCREEN_SWIPE_PERCENTAGE)
                .await?;
            self.session.pause(SCROLL_SETTLE).await?;
        }
        Ok(self.is_visible(locator).await)
    }

    /// Dismisses the on-screen keyboard if one is up.
    ///
    /// Probe-style: the keyboard may not be visible at all, so a driver
    /// failure here is logged and swallowed.
    pub async fn hide_keyboard(&self) {
        if let Err(err) = self.session.driver().hide_keyboard().await {
            debug!(%err, "keyboard not visible or already hidden");
        }
    }
}
