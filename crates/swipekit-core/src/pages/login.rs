//! Login page object.
//!
//! The composite login flow walks through entering the username, entering
//! the password, dismissing the keyboard, and tapping the login button.
//! What happens after submission is the app's business: the outcome is
//! *observed*, not driven, by polling for the home-screen marker or the
//! error message within a bounded timeout. No intermediate state is stored
//! anywhere — a `LoginPage` is stateless between calls.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::AutomationError;
use crate::page::{PageOperations, POLL_INTERVAL};
use crate::selector::{PlatformLocators, SelectorTable};
use crate::session::Session;

/// Where the app ended up after a login submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The home screen marker appeared: login succeeded.
    HomeDisplayed,
    /// The error message appeared: login was rejected.
    ErrorDisplayed,
}

fn selectors() -> SelectorTable {
    SelectorTable::new([
        ("username", PlatformLocators::same("~username-input")),
        ("password", PlatformLocators::same("~password-input")),
        ("login-button", PlatformLocators::same("~login-button")),
        (
            "error-message",
            PlatformLocators::split("id=error-message", "~error-message"),
        ),
        (
            "forgot-password-link",
            PlatformLocators::same("~forgot-password-link"),
        ),
        // Post-login marker, polled by wait_for_outcome.
        ("home-screen", PlatformLocators::same("~home-screen")),
    ])
}

/// The login screen.
pub struct LoginPage {
    ops: PageOperations,
    selectors: SelectorTable,
}

impl LoginPage {
    pub fn new(session: Session) -> Self {
        Self {
            ops: PageOperations::new(session),
            selectors: selectors(),
        }
    }

    fn locator(&self, name: &str) -> Result<&str, AutomationError> {
        self.selectors.resolve(name, self.ops.session().platform())
    }

    fn wait_timeout(&self) -> Duration {
        self.ops.session().timeouts().medium()
    }

    /// Types the username into its field.
    pub async fn enter_username(&self, username: &str) -> Result<(), AutomationError> {
        let locator = self.locator("username")?;
        self.ops.set_text(locator, username, self.wait_timeout()).await
    }

    /// Types the password into its field.
    pub async fn enter_password(&self, password: &str) -> Result<(), AutomationError> {
        let locator = self.locator("password")?;
        self.ops.set_text(locator, password, self.wait_timeout()).await
    }

    /// Taps the login button.
    pub async fn tap_login(&self) -> Result<(), AutomationError> {
        let locator = self.locator("login-button")?;
        self.ops.click(locator, self.wait_timeout()).await
    }

    /// Taps the forgot-password link.
    pub async fn tap_forgot_password(&self) -> Result<(), AutomationError> {
        let locator = self.locator("forgot-password-link")?;
        self.ops.click(locator, self.wait_timeout()).await
    }

    /// Runs the full login sequence: username → password → hide keyboard →
    /// login button. Does not wait for the outcome; pair with
    /// [`wait_for_outcome`](Self::wait_for_outcome).
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AutomationError> {
        info!(username, "logging in");
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.ops.hide_keyboard().await;
        self.tap_login().await
    }

    /// Observes the post-submission transition by polling the home-screen
    /// marker and the error message until one appears.
    ///
    /// # Errors
    ///
    /// Fails with [`AutomationError::Timeout`] when neither marker shows up
    /// within the bound.
    pub async fn wait_for_outcome(
        &self,
        timeout: Duration,
    ) -> Result<LoginOutcome, AutomationError> {
        let home = self.locator("home-screen")?;
        let error = self.locator("error-message")?;
        let start = Instant::now();
        loop {
            if self.ops.is_visible(home).await {
                debug!("home marker visible, login succeeded");
                return Ok(LoginOutcome::HomeDisplayed);
            }
            if self.ops.is_visible(error).await {
                debug!("error message visible, login rejected");
                return Ok(LoginOutcome::ErrorDisplayed);
            }
            if start.elapsed() >= timeout {
                return Err(AutomationError::Timeout {
                    operation: "waiting for login outcome".to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Probe: whether the login screen is showing.
    pub async fn is_displayed(&self) -> bool {
        match self.locator("username") {
            Ok(locator) => self.ops.is_visible(locator).await,
            Err(_) => false,
        }
    }

    /// Probe: whether the login error message is showing.
    pub async fn is_error_displayed(&self) -> bool {
        match self.locator("error-message") {
            Ok(locator) => self.ops.is_visible(locator).await,
            Err(_) => false,
        }
    }

    /// Reads the login error message text.
    pub async fn error_text(&self) -> Result<String, AutomationError> {
        let locator = self.locator("error-message")?;
        self.ops.read_text(locator, self.wait_timeout()).await
    }
}
