//! Home page object.

use std::time::Duration;

use crate::error::AutomationError;
use crate::geometry::Direction;
use crate::gestures::{Gestures, DEFAULT_SCREEN_SWIPE_PERCENTAGE};
use crate::page::PageOperations;
use crate::selector::{PlatformLocators, SelectorTable};
use crate::session::Session;

fn selectors() -> SelectorTable {
    SelectorTable::new([
        ("home-screen", PlatformLocators::same("~home-screen")),
        (
            "welcome-message",
            PlatformLocators::split("id=welcome-message", "~welcome-message"),
        ),
        ("menu-button", PlatformLocators::same("~menu-button")),
        ("settings-button", PlatformLocators::same("~settings-button")),
        ("logout-button", PlatformLocators::same("~logout-button")),
    ])
}

/// The home / dashboard screen.
pub struct HomePage {
    ops: PageOperations,
    gestures: Gestures,
    selectors: SelectorTable,
}

impl HomePage {
    pub fn new(session: Session) -> Self {
        Self {
            ops: PageOperations::new(session.clone()),
            gestures: Gestures::new(session),
            selectors: selectors(),
        }
    }

    fn locator(&self, name: &str) -> Result<&str, AutomationError> {
        self.selectors.resolve(name, self.ops.session().platform())
    }

    fn wait_timeout(&self) -> Duration {
        self.ops.session().timeouts().medium()
    }

    /// Probe: whether the home screen is showing.
    pub async fn is_displayed(&self) -> bool {
        match self.locator("home-screen") {
            Ok(locator) => self.ops.is_visible(locator).await,
            Err(_) => false,
        }
    }

    /// Waits until the home screen marker is displayed.
    pub async fn wait_until_loaded(&self, timeout: Duration) -> Result<(), AutomationError> {
        let locator = self.locator("home-screen")?;
        self.ops.wait_visible(locator, timeout).await?;
        Ok(())
    }

    /// Reads the welcome message text.
    pub async fn welcome_text(&self) -> Result<String, AutomationError> {
        let locator = self.locator("welcome-message")?;
        self.ops.read_text(locator, self.wait_timeout()).await
    }

    /// Opens the main menu.
    pub async fn open_menu(&self) -> Result<(), AutomationError> {
        let locator = self.locator("menu-button")?;
        self.ops.click(locator, self.wait_timeout()).await
    }

    /// Opens the settings screen.
    pub async fn open_settings(&self) -> Result<(), AutomationError> {
        let locator = self.locator("settings-button")?;
        self.ops.click(locator, self.wait_timeout()).await
    }

    /// Logs out via the logout button.
    pub async fn logout(&self) -> Result<(), AutomationError> {
        let locator = self.locator("logout-button")?;
        self.ops.click(locator, self.wait_timeout()).await
    }

    /// Swipes across the home screen in the given direction.
    pub async fn swipe(&self, direction: Direction) -> Result<(), AutomationError> {
        self.gestures
            .swipe_screen(direction, DEFAULT_SCREEN_SWIPE_PERCENTAGE)
            .await
    }
}
