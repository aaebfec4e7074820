//! Shared test helpers for swipekit-core integration tests.
//!
//! Provides a recording driver that captures every pointer batch, release,
//! and pause it is asked to perform, plus scripted elements whose state the
//! tests control directly.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use swipekit_core::config::Timeouts;
use swipekit_core::driver::{AutomationDriver, DriverError};
use swipekit_core::element::ElementHandle;
use swipekit_core::geometry::{Rect, Size};
use swipekit_core::pointer::PointerSequence;
use swipekit_core::session::Session;

/// An element whose state the test scripts directly.
pub struct ScriptedElement {
    pub rect: Rect,
    pub displayed: AtomicBool,
    pub existing: AtomicBool,
    pub text: Mutex<String>,
    pub clicks: AtomicU32,
    /// Ordered log of mutations: `"clear"`, `"set:<text>"`, `"scroll"`.
    pub ops: Mutex<Vec<String>>,
}

impl ScriptedElement {
    pub fn displayed(rect: Rect) -> Arc<Self> {
        Arc::new(Self {
            rect,
            displayed: AtomicBool::new(true),
            existing: AtomicBool::new(true),
            text: Mutex::new(String::new()),
            clicks: AtomicU32::new(0),
            ops: Mutex::new(Vec::new()),
        })
    }

    /// Exists in the hierarchy but is not displayed.
    pub fn hidden(rect: Rect) -> Arc<Self> {
        let element = Self::displayed(rect);
        element.displayed.store(false, Ordering::SeqCst);
        element
    }

    pub fn with_text(self: Arc<Self>, text: &str) -> Arc<Self> {
        *self.text.lock().unwrap() = text.to_string();
        self
    }

    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl ElementHandle for ScriptedElement {
    async fn rect(&self) -> Result<Rect, DriverError> {
        Ok(self.rect)
    }

    async fn click(&self) -> Result<(), DriverError> {
        self.clicks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn set_value(&self, text: &str) -> Result<(), DriverError> {
        *self.text.lock().unwrap() = text.to_string();
        self.ops.lock().unwrap().push(format!("set:{text}"));
        Ok(())
    }

    async fn clear_value(&self) -> Result<(), DriverError> {
        self.text.lock().unwrap().clear();
        self.ops.lock().unwrap().push("clear".to_string());
        Ok(())
    }

    async fn text(&self) -> Result<String, DriverError> {
        Ok(self.text.lock().unwrap().clone())
    }

    async fn is_displayed(&self) -> Result<bool, DriverError> {
        Ok(self.displayed.load(Ordering::SeqCst))
    }

    async fn is_existing(&self) -> Result<bool, DriverError> {
        Ok(self.existing.load(Ordering::SeqCst))
    }

    async fn scroll_into_view(&self) -> Result<(), DriverError> {
        self.ops.lock().unwrap().push("scroll".to_string());
        Ok(())
    }
}

/// Driver that records everything submitted to it.
pub struct RecordingDriver {
    pub platform_name: &'static str,
    pub window: Size,
    pub elements: Mutex<HashMap<String, Arc<ScriptedElement>>>,
    pub batches: Mutex<Vec<Vec<PointerSequence>>>,
    pub releases: AtomicU32,
    pub pauses: Mutex<Vec<Duration>>,
    /// When set, every find_element fails with a command error.
    pub fail_finds: AtomicBool,
    /// When set, hide_keyboard fails (no keyboard on screen).
    pub fail_hide_keyboard: AtomicBool,
    pub keyboard_hides: AtomicU32,
}

impl RecordingDriver {
    /// Android driver with a 1000x2000 window (matches the geometry
    /// scenarios used across the tests).
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            platform_name: "Android",
            window: Size::new(1000.0, 2000.0),
            elements: Mutex::new(HashMap::new()),
            batches: Mutex::new(Vec::new()),
            releases: AtomicU32::new(0),
            pauses: Mutex::new(Vec::new()),
            fail_finds: AtomicBool::new(false),
            fail_hide_keyboard: AtomicBool::new(false),
            keyboard_hides: AtomicU32::new(0),
        })
    }

    pub fn add_element(&self, locator: &str, element: Arc<ScriptedElement>) {
        self.elements
            .lock()
            .unwrap()
            .insert(locator.to_string(), element);
    }

    pub fn batches(&self) -> Vec<Vec<PointerSequence>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn releases(&self) -> u32 {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait]
impl AutomationDriver for RecordingDriver {
    async fn perform_pointer_actions(&self, batch: &[PointerSequence]) -> Result<(), DriverError> {
        self.batches.lock().unwrap().push(batch.to_vec());
        Ok(())
    }

    async fn release_pointer_actions(&self) -> Result<(), DriverError> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn window_size(&self) -> Result<Size, DriverError> {
        Ok(self.window)
    }

    async fn find_element(
        &self,
        locator: &str,
    ) -> Result<Option<Arc<dyn ElementHandle>>, DriverError> {
        if self.fail_finds.load(Ordering::SeqCst) {
            return Err(DriverError::CommandFailed(
                "hierarchy query failed".to_string(),
            ));
        }
        match self.elements.lock().unwrap().get(locator).cloned() {
            Some(element) => Ok(Some(element)),
            None => Ok(None),
        }
    }

    async fn platform_name(&self) -> Result<String, DriverError> {
        Ok(self.platform_name.to_string())
    }

    async fn pause(&self, duration: Duration) -> Result<(), DriverError> {
        self.pauses.lock().unwrap().push(duration);
        Ok(())
    }

    async fn hide_keyboard(&self) -> Result<(), DriverError> {
        if self.fail_hide_keyboard.load(Ordering::SeqCst) {
            return Err(DriverError::CommandFailed(
                "no keyboard is shown".to_string(),
            ));
        }
        self.keyboard_hides.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

/// Session over a recording driver with default timeouts.
pub async fn session_over(driver: &Arc<RecordingDriver>) -> Session {
    Session::initialize(driver.clone(), Timeouts::default())
        .await
        .expect("session init against recording driver")
}
