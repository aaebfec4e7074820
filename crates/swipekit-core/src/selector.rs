//! Platform-conditional selector resolution.
//!
//! Pages refer to elements by logical name ("username", "login-button");
//! the locator string that actually finds the element differs per platform
//! (resource id on Android, accessibility id on iOS). A [`SelectorTable`]
//! holds that mapping, built once at page construction and never mutated.
//!
//! The active [`Platform`] is resolved once per session from the driver's
//! reported capabilities (see [`Session::initialize`](crate::session::Session::initialize))
//! and assumed stable for the session's lifetime — resolution never
//! re-queries the driver.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutomationError;

/// The mobile platform a session is running against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("Android"),
            Platform::Ios => f.write_str("iOS"),
        }
    }
}

impl FromStr for Platform {
    type Err = AutomationError;

    /// Parses a platform name as reported by the automation server,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(AutomationError::InvalidArgument(format!(
                "unknown platform '{s}'; expected Android or iOS"
            ))),
        }
    }
}

/// The per-platform locator strings for one logical element.
///
/// Both platforms always carry a locator — a table entry that only works on
/// one platform cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLocators {
    android: String,
    ios: String,
}

impl PlatformLocators {
    /// One locator shared by both platforms (the common case when the app
    /// uses cross-platform accessibility ids).
    pub fn same(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        Self {
            android: locator.clone(),
            ios: locator,
        }
    }

    /// Distinct locators per platform.
    pub fn split(android: impl Into<String>, ios: impl Into<String>) -> Self {
        Self {
            android: android.into(),
            ios: ios.into(),
        }
    }

    /// The locator for the given platform.
    pub fn for_platform(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
        }
    }
}

/// An immutable map from logical element name to per-platform locators.
#[derive(Debug, Clone, Default)]
pub struct SelectorTable {
    entries: HashMap<String, PlatformLocators>,
}

impl SelectorTable {
    /// Builds a table from `(name, locators)` pairs.
    pub fn new<N>(entries: impl IntoIterator<Item = (N, PlatformLocators)>) -> Self
    where
        N: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, locators)| (name.into(), locators))
                .collect(),
        }
    }

    /// Resolves a logical element name into a locator for `platform`.
    ///
    /// Resolution is idempotent: the same `(name, platform)` pair always
    /// yields the same locator.
    ///
    /// # Errors
    ///
    /// Fails with [`AutomationError::Lookup`] when `name` is not in the
    /// table.
    pub fn resolve(&self, name: &str, platform: Platform) -> Result<&str, AutomationError> {
        self.entries
            .get(name)
            .map(|locators| locators.for_platform(platform))
            .ok_or_else(|| AutomationError::Lookup {
                name: name.to_string(),
                platform,
            })
    }

    /// The logical names this table defines.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SelectorTable {
        SelectorTable::new([
            ("username", PlatformLocators::same("~username-input")),
            (
                "error-message",
                PlatformLocators::split("id=error-message", "~error-message"),
            ),
        ])
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!("Android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!("IOS".parse::<Platform>().unwrap(), Platform::Ios);
    }

    #[test]
    fn test_platform_parse_rejects_unknown() {
        let err = "windows".parse::<Platform>().unwrap_err();
        assert!(matches!(err, AutomationError::InvalidArgument(_)));
    }

    #[test]
    fn test_shared_locator_resolves_on_both_platforms() {
        let table = table();
        assert_eq!(
            table.resolve("username", Platform::Android).unwrap(),
            "~username-input"
        );
        assert_eq!(
            table.resolve("username", Platform::Ios).unwrap(),
            "~username-input"
        );
    }

    #[test]
    fn test_split_locator_dispatches_by_platform() {
        let table = table();
        assert_eq!(
            table.resolve("error-message", Platform::Android).unwrap(),
            "id=error-message"
        );
        assert_eq!(
            table.resolve("error-message", Platform::Ios).unwrap(),
            "~error-message"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = table();
        let first = table.resolve("username", Platform::Android).unwrap();
        let second = table.resolve("username", Platform::Android).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_name_fails_with_lookup() {
        let table = table();
        let err = table.resolve("nonexistent", Platform::Android).unwrap_err();
        match err {
            AutomationError::Lookup { name, platform } => {
                assert_eq!(name, "nonexistent");
                assert_eq!(platform, Platform::Android);
            }
            other => panic!("expected Lookup error, got {other}"),
        }
    }
}
