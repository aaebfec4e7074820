//! # swipekit-core
//!
//! Core library for driving a mobile application (Android/iOS) through an
//! external automation server: gesture synthesis, platform-conditional
//! selector resolution, and page-object operations for behavioral specs.
//!
//! The transport to the server is *not* part of this crate. Everything here
//! is written against the [`driver::AutomationDriver`] and
//! [`element::ElementHandle`] capability traits; a backend (an Appium HTTP
//! client, a scripted fake for tests) supplies the implementation.
//!
//! ## Modules
//!
//! - [`geometry`] - Pure swipe/pinch coordinate computation
//! - [`pointer`] - Pointer-action batch model (the server's wire shape)
//! - [`gestures`] - Gesture executor: batches, submission, pointer release
//! - [`selector`] - Logical element name → platform-specific locator
//! - [`page`] - Page-level operations (waits, probes, text entry)
//! - [`pages`] - Concrete page objects (login, home)
//! - [`session`] - Explicit session context (driver + platform + timeouts)
//! - [`config`] - Capability dictionaries and suite settings
//! - [`util`] - Caller-level retry, test data, screenshots
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swipekit_core::config::SuiteConfig;
//! use swipekit_core::driver::AutomationDriver;
//! use swipekit_core::error::AutomationError;
//! use swipekit_core::geometry::Direction;
//! use swipekit_core::gestures::Gestures;
//! use swipekit_core::pages::LoginPage;
//! use swipekit_core::session::Session;
//!
//! # async fn example(driver: Arc<dyn AutomationDriver>) -> Result<(), AutomationError> {
//! let config = SuiteConfig::load();
//! let session = Session::initialize(driver, config.timeouts).await?;
//!
//! let login = LoginPage::new(session.clone());
//! login.login("testuser@3shape.com", "TestPassword123").await?;
//! login.wait_for_outcome(config.timeouts.medium()).await?;
//!
//! let gestures = Gestures::new(session);
//! gestures.swipe_screen(Direction::Up, 0.6).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod driver;
pub mod element;
pub mod error;
pub mod geometry;
pub mod gestures;
pub mod page;
pub mod pages;
pub mod pointer;
pub mod selector;
pub mod session;
pub mod util;
