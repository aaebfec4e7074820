//! Behavioral spec harness for swipekit.
//!
//! Provides [`FakeDevice`], a scripted in-memory app standing in for a real
//! device session: a login screen in front of a home screen, driven through
//! the same [`AutomationDriver`] capability a production backend implements.
//! The device records every pointer batch, release, and tap it receives, so
//! specs can assert both on app-level outcomes (which screen is showing)
//! and on what actually crossed the driver boundary.
//!
//! The spec files live in `tests/` and mirror the app's behavioral areas:
//! login and home.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use swipekit_core::config::Timeouts;
use swipekit_core::driver::{AutomationDriver, DriverError};
use swipekit_core::element::ElementHandle;
use swipekit_core::geometry::{Rect, Size};
use swipekit_core::pointer::PointerSequence;
use swipekit_core::session::Session;

/// Test credentials and app messages the fake device understands.
pub mod creds {
    pub const VALID_USERNAME: &str = "testuser@3shape.com";
    pub const VALID_PASSWORD: &str = "TestPassword123";
    pub const INVALID_USERNAME: &str = "invalid@3shape.com";
    pub const INVALID_PASSWORD: &str = "wrongpassword";
    pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
    pub const WELCOME_MESSAGE: &str = "Welcome back, Test User";
}

/// Installs a fmt subscriber honoring `RUST_LOG`. Safe to call from every
/// spec; only the first call wins.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The screens the fake app can show.
enum Screen {
    Login {
        username: String,
        password: String,
        error_visible: bool,
    },
    Home,
}

impl Screen {
    fn login() -> Self {
        Screen::Login {
            username: String::new(),
            password: String::new(),
            error_visible: false,
        }
    }

    fn username_text(&self) -> Option<String> {
        match self {
            Screen::Login { username, .. } => Some(username.clone()),
            Screen::Home => None,
        }
    }
}

/// Logical elements of the fake app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Username,
    Password,
    LoginButton,
    ForgotPassword,
    ErrorMessage,
    HomeMarker,
    WelcomeMessage,
    MenuButton,
    SettingsButton,
    LogoutButton,
}

impl ElementKind {
    /// Maps a platform-native locator to the element it finds. Both the
    /// Android and iOS forms of split locators are understood.
    fn from_locator(locator: &str) -> Option<Self> {
        match locator {
            "~username-input" => Some(Self::Username),
            "~password-input" => Some(Self::Password),
            "~login-button" => Some(Self::LoginButton),
            "~forgot-password-link" => Some(Self::ForgotPassword),
            "id=error-message" | "~error-message" => Some(Self::ErrorMessage),
            "~home-screen" => Some(Self::HomeMarker),
            "id=welcome-message" | "~welcome-message" => Some(Self::WelcomeMessage),
            "~menu-button" => Some(Self::MenuButton),
            "~settings-button" => Some(Self::SettingsButton),
            "~logout-button" => Some(Self::LogoutButton),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::LoginButton => "login-button",
            Self::ForgotPassword => "forgot-password-link",
            Self::ErrorMessage => "error-message",
            Self::HomeMarker => "home-screen",
            Self::WelcomeMessage => "welcome-message",
            Self::MenuButton => "menu-button",
            Self::SettingsButton => "settings-button",
            Self::LogoutButton => "logout-button",
        }
    }

    /// Fixed frame within the 390x844 fake window.
    fn rect(&self) -> Rect {
        match self {
            Self::Username => Rect::new(20.0, 280.0, 350.0, 44.0),
            Self::Password => Rect::new(20.0, 340.0, 350.0, 44.0),
            Self::LoginButton => Rect::new(20.0, 410.0, 350.0, 48.0),
            Self::ForgotPassword => Rect::new(120.0, 480.0, 150.0, 30.0),
            Self::ErrorMessage => Rect::new(20.0, 230.0, 350.0, 36.0),
            Self::HomeMarker => Rect::new(0.0, 0.0, 390.0, 844.0),
            Self::WelcomeMessage => Rect::new(20.0, 120.0, 350.0, 40.0),
            Self::MenuButton => Rect::new(16.0, 60.0, 44.0, 44.0),
            Self::SettingsButton => Rect::new(330.0, 60.0, 44.0, 44.0),
            Self::LogoutButton => Rect::new(20.0, 760.0, 350.0, 48.0),
        }
    }
}

struct DeviceState {
    platform_name: &'static str,
    screen: Mutex<Screen>,
    batches: Mutex<Vec<Vec<PointerSequence>>>,
    releases: AtomicU32,
    pauses: Mutex<Vec<Duration>>,
    taps: Mutex<Vec<String>>,
    keyboard_visible: AtomicBool,
}

impl DeviceState {
    fn element_present(&self, kind: ElementKind) -> bool {
        let screen = self.screen.lock().unwrap();
        match (&*screen, kind) {
            (Screen::Login { error_visible, .. }, ElementKind::ErrorMessage) => *error_visible,
            (
                Screen::Login { .. },
                ElementKind::Username
                | ElementKind::Password
                | ElementKind::LoginButton
                | ElementKind::ForgotPassword,
            ) => true,
            (
                Screen::Home,
                ElementKind::HomeMarker
                | ElementKind::WelcomeMessage
                | ElementKind::MenuButton
                | ElementKind::SettingsButton
                | ElementKind::LogoutButton,
            ) => true,
            _ => false,
        }
    }
}

/// A scripted in-memory device session.
///
/// Clones share the same device state, so a spec can keep one handle for
/// inspection while the session drives another.
#[derive(Clone)]
pub struct FakeDevice {
    state: Arc<DeviceState>,
}

impl FakeDevice {
    pub fn android() -> Self {
        Self::with_platform("Android")
    }

    pub fn ios() -> Self {
        Self::with_platform("iOS")
    }

    fn with_platform(platform_name: &'static str) -> Self {
        Self {
            state: Arc::new(DeviceState {
                platform_name,
                screen: Mutex::new(Screen::login()),
                batches: Mutex::new(Vec::new()),
                releases: AtomicU32::new(0),
                pauses: Mutex::new(Vec::new()),
                taps: Mutex::new(Vec::new()),
                keyboard_visible: AtomicBool::new(false),
            }),
        }
    }

    /// Opens a session over this device with default timeouts.
    pub async fn session(&self) -> Session {
        init_logging();
        Session::initialize(Arc::new(self.clone()), Timeouts::default())
            .await
            .expect("fake device session")
    }

    // --- inspection -------------------------------------------------------

    pub fn is_on_home(&self) -> bool {
        matches!(*self.state.screen.lock().unwrap(), Screen::Home)
    }

    /// The username typed so far, or `None` when not on the login screen.
    pub fn entered_username(&self) -> Option<String> {
        match &*self.state.screen.lock().unwrap() {
            Screen::Login { username, .. } => Some(username.clone()),
            Screen::Home => None,
        }
    }

    /// The password typed so far, or `None` when not on the login screen.
    pub fn entered_password(&self) -> Option<String> {
        match &*self.state.screen.lock().unwrap() {
            Screen::Login { password, .. } => Some(password.clone()),
            Screen::Home => None,
        }
    }

    pub fn keyboard_visible(&self) -> bool {
        self.state.keyboard_visible.load(Ordering::SeqCst)
    }

    /// Every pointer batch submitted so far.
    pub fn batches(&self) -> Vec<Vec<PointerSequence>> {
        self.state.batches.lock().unwrap().clone()
    }

    pub fn releases(&self) -> u32 {
        self.state.releases.load(Ordering::SeqCst)
    }

    /// Logical names of elements tapped so far, in order.
    pub fn taps(&self) -> Vec<String> {
        self.state.taps.lock().unwrap().clone()
    }
}

struct FakeElement {
    state: Arc<DeviceState>,
    kind: ElementKind,
}

impl FakeElement {
    fn ensure_present(&self) -> Result<(), DriverError> {
        if self.state.element_present(self.kind) {
            Ok(())
        } else {
            Err(DriverError::CommandFailed(format!(
                "element '{}' is no longer on screen",
                self.kind.name()
            )))
        }
    }
}

#[async_trait]
impl ElementHandle for FakeElement {
    async fn rect(&self) -> Result<Rect, DriverError> {
        self.ensure_present()?;
        Ok(self.kind.rect())
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.ensure_present()?;
        self.state
            .taps
            .lock()
            .unwrap()
            .push(self.kind.name().to_string());
        debug!(element = self.kind.name(), "fake device tapped");

        match self.kind {
            ElementKind::LoginButton => {
                let mut screen = self.state.screen.lock().unwrap();
                if let Screen::Login {
                    username,
                    password,
                    error_visible,
                } = &mut *screen
                {
                    if username == creds::VALID_USERNAME && password == creds::VALID_PASSWORD {
                        *screen = Screen::Home;
                    } else {
                        *error_visible = true;
                    }
                }
            }
            ElementKind::LogoutButton => {
                *self.state.screen.lock().unwrap() = Screen::login();
            }
            _ => {}
        }
        Ok(())
    }

    async fn set_value(&self, text: &str) -> Result<(), DriverError> {
        self.ensure_present()?;
        let mut screen = self.state.screen.lock().unwrap();
        let Screen::Login {
            username, password, ..
        } = &mut *screen
        else {
            return Err(DriverError::CommandFailed(
                "no text input on this screen".to_string(),
            ));
        };
        match self.kind {
            ElementKind::Username => *username = text.to_string(),
            ElementKind::Password => *password = text.to_string(),
            _ => {
                return Err(DriverError::CommandFailed(format!(
                    "element '{}' is not a text input",
                    self.kind.name()
                )))
            }
        }
        self.state.keyboard_visible.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn clear_value(&self) -> Result<(), DriverError> {
        self.ensure_present()?;
        let mut screen = self.state.screen.lock().unwrap();
        if let Screen::Login {
            username, password, ..
        } = &mut *screen
        {
            match self.kind {
                ElementKind::Username => username.clear(),
                ElementKind::Password => password.clear(),
                _ => {}
            }
        }
        Ok(())
    }

    async fn text(&self) -> Result<String, DriverError> {
        self.ensure_present()?;
        let text = match self.kind {
            ElementKind::Username => self
                .state
                .screen
                .lock()
                .unwrap()
                .username_text()
                .unwrap_or_default(),
            ElementKind::ErrorMessage => creds::INVALID_CREDENTIALS_MESSAGE.to_string(),
            ElementKind::WelcomeMessage => creds::WELCOME_MESSAGE.to_string(),
            _ => String::new(),
        };
        Ok(text)
    }

    async fn is_displayed(&self) -> Result<bool, DriverError> {
        Ok(self.state.element_present(self.kind))
    }

    async fn is_existing(&self) -> Result<bool, DriverError> {
        Ok(self.state.element_present(self.kind))
    }

    async fn scroll_into_view(&self) -> Result<(), DriverError> {
        self.ensure_present()
    }
}

#[async_trait]
impl AutomationDriver for FakeDevice {
    async fn perform_pointer_actions(&self, batch: &[PointerSequence]) -> Result<(), DriverError> {
        self.state.batches.lock().unwrap().push(batch.to_vec());
        Ok(())
    }

    async fn release_pointer_actions(&self) -> Result<(), DriverError> {
        self.state.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn window_size(&self) -> Result<Size, DriverError> {
        Ok(Size::new(390.0, 844.0))
    }

    async fn find_element(
        &self,
        locator: &str,
    ) -> Result<Option<Arc<dyn ElementHandle>>, DriverError> {
        let Some(kind) = ElementKind::from_locator(locator) else {
            return Ok(None);
        };
        if !self.state.element_present(kind) {
            return Ok(None);
        }
        Ok(Some(Arc::new(FakeElement {
            state: self.state.clone(),
            kind,
        })))
    }

    async fn platform_name(&self) -> Result<String, DriverError> {
        Ok(self.state.platform_name.to_string())
    }

    async fn pause(&self, duration: Duration) -> Result<(), DriverError> {
        self.state.pauses.lock().unwrap().push(duration);
        Ok(())
    }

    async fn hide_keyboard(&self) -> Result<(), DriverError> {
        if self
            .state
            .keyboard_visible
            .swap(false, Ordering::SeqCst)
        {
            Ok(())
        } else {
            Err(DriverError::CommandFailed(
                "no keyboard is shown".to_string(),
            ))
        }
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        Ok(vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
    }
}
