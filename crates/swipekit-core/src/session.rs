//! Explicit session context.
//!
//! A [`Session`] bundles the one shared driver handle with the facts that
//! are resolved once at startup and stable afterwards: the platform and the
//! timeout tiers. Every component (gestures, page operations, concrete
//! pages) receives a `Session` at construction — there is no ambient global
//! driver binding anywhere in this library.
//!
//! Cloning a `Session` is cheap (the driver is behind an `Arc`) and every
//! clone refers to the same underlying device session, which remains
//! exclusively owned by the running test process.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::Timeouts;
use crate::driver::AutomationDriver;
use crate::error::AutomationError;
use crate::selector::Platform;

/// Shared context for one automation session.
#[derive(Clone, Debug)]
pub struct Session {
    driver: Arc<dyn AutomationDriver>,
    platform: Platform,
    timeouts: Timeouts,
}

impl Session {
    /// Creates a session context over a connected driver.
    ///
    /// Queries the platform name from the driver exactly once; the platform
    /// is assumed stable for the session's lifetime and is never re-queried.
    ///
    /// # Errors
    ///
    /// Fails when the driver cannot report its capabilities or reports a
    /// platform this library does not know.
    pub async fn initialize(
        driver: Arc<dyn AutomationDriver>,
        timeouts: Timeouts,
    ) -> Result<Self, AutomationError> {
        let name = driver.platform_name().await?;
        let platform: Platform = name.parse()?;
        info!(%platform, "session initialized");
        Ok(Self {
            driver,
            platform,
            timeouts,
        })
    }

    /// The shared driver handle.
    pub fn driver(&self) -> &Arc<dyn AutomationDriver> {
        &self.driver
    }

    /// The platform resolved at initialization.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The configured timeout tiers.
    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    /// Suspends the session for the given duration via the driver.
    pub async fn pause(&self, duration: Duration) -> Result<(), AutomationError> {
        self.driver.pause(duration).await?;
        Ok(())
    }
}
