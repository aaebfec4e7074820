//! Suite configuration and session capabilities.
//!
//! Capability dictionaries describe the device session requested from the
//! automation server: platform, automation engine, device, the app under
//! test, and reset policy. They are startup parameters — opaque to the rest
//! of the library, which only ever sees the resolved
//! [`Platform`](crate::selector::Platform) and the timeout tiers.
//!
//! [`SuiteConfig`] persists as JSON. `load` falls back to defaults when the
//! file is missing or unparsable, so a fresh checkout runs without any
//! config step.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AutomationError;
use crate::selector::Platform;

const CONFIG_FILENAME: &str = "config.json";

/// Returns the swipekit config directory (`~/.swipekit`).
pub fn swipekit_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".swipekit")
}

/// Named timeout tiers, in milliseconds.
///
/// `medium` is the default element-wait bound used by page operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeouts {
    pub short_ms: u64,
    pub medium_ms: u64,
    pub long_ms: u64,
    pub very_long_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short_ms: 5_000,
            medium_ms: 10_000,
            long_ms: 30_000,
            very_long_ms: 60_000,
        }
    }
}

impl Timeouts {
    pub fn short(&self) -> Duration {
        Duration::from_millis(self.short_ms)
    }

    pub fn medium(&self) -> Duration {
        Duration::from_millis(self.medium_ms)
    }

    pub fn long(&self) -> Duration {
        Duration::from_millis(self.long_ms)
    }

    pub fn very_long(&self) -> Duration {
        Duration::from_millis(self.very_long_ms)
    }
}

/// The automation server endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerEndpoint {
    pub host: String,
    pub port: u16,
}

impl Default for ServerEndpoint {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 4723,
        }
    }
}

/// The capability dictionary sent when requesting a device session.
///
/// Android sessions identify the app by package + activity; iOS sessions by
/// bundle id. Unused fields stay `None` and are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    /// `"Android"` or `"iOS"`.
    pub platform_name: String,

    /// The automation engine: `"UiAutomator2"` or `"XCUITest"`.
    pub automation_name: String,

    pub device_name: String,
    pub platform_version: String,

    /// Android application package, e.g. `com.threeshape.app`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_package: Option<String>,

    /// Android launch activity, e.g. `.MainActivity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_activity: Option<String>,

    /// iOS bundle identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,

    /// Keep app state between tests.
    #[serde(default = "default_no_reset")]
    pub no_reset: bool,

    #[serde(default)]
    pub full_reset: bool,

    /// How long the server keeps an idle session alive, in seconds.
    #[serde(default = "default_new_command_timeout")]
    pub new_command_timeout_secs: u64,
}

fn default_no_reset() -> bool {
    true
}

fn default_new_command_timeout() -> u64 {
    240
}

impl Capabilities {
    /// Default Android emulator capabilities for the given app.
    pub fn android(app_package: impl Into<String>, app_activity: impl Into<String>) -> Self {
        Self {
            platform_name: "Android".to_string(),
            automation_name: "UiAutomator2".to_string(),
            device_name: "Android Emulator".to_string(),
            platform_version: "13.0".to_string(),
            app_package: Some(app_package.into()),
            app_activity: Some(app_activity.into()),
            bundle_id: None,
            no_reset: true,
            full_reset: false,
            new_command_timeout_secs: 240,
        }
    }

    /// Default iOS simulator capabilities for the given app.
    pub fn ios(bundle_id: impl Into<String>) -> Self {
        Self {
            platform_name: "iOS".to_string(),
            automation_name: "XCUITest".to_string(),
            device_name: "iPhone 14".to_string(),
            platform_version: "16.0".to_string(),
            app_package: None,
            app_activity: None,
            bundle_id: Some(bundle_id.into()),
            no_reset: true,
            full_reset: false,
            new_command_timeout_secs: 240,
        }
    }

    /// The parsed platform of this capability set.
    pub fn platform(&self) -> Result<Platform, AutomationError> {
        self.platform_name.parse()
    }
}

/// Suite-level settings.
///
/// `max_instances` bounds how many device sessions a runner may open in
/// parallel; each session is internally serial regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuiteConfig {
    pub server: ServerEndpoint,
    pub max_instances: u32,
    pub connection_retry_count: u32,
    pub connection_retry_timeout_ms: u64,
    pub timeouts: Timeouts,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            server: ServerEndpoint::default(),
            max_instances: 1,
            connection_retry_count: 3,
            connection_retry_timeout_ms: 120_000,
            timeouts: Timeouts::default(),
        }
    }
}

impl SuiteConfig {
    /// Load config from `~/.swipekit/config.json`.
    ///
    /// Returns [`Default`] if the file does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(swipekit_dir().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit path, with the same fallback contract
    /// as [`load`](Self::load).
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        std::fs::read_to_string(path.as_ref())
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to `~/.swipekit/config.json`.
    pub fn save(&self) -> std::io::Result<()> {
        let dir = swipekit_dir();
        std::fs::create_dir_all(&dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(dir.join(CONFIG_FILENAME), json)
    }
}
