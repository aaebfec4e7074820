//! Gesture execution.
//!
//! [`Gestures`] turns computed coordinates into pointer-action batches and
//! submits them through the session's driver. Every gesture is one atomic
//! batch followed by an explicit pointer-state release — skipping the
//! release leaks a logically pressed finger into the next gesture, a
//! classic stuck-finger defect.
//!
//! This layer never retries: a driver fault propagates to the caller
//! unchanged. Callers that want retry wrap the call in
//! [`util::retry`](crate::util::retry).

use std::time::Duration;

use tracing::debug;

use crate::element::ElementHandle;
use crate::error::AutomationError;
use crate::geometry::{self, Direction, Point, Rect, SwipeBounds};
use crate::pointer::{PointerSequence, TOUCH_SETTLE_MS};
use crate::session::Session;

/// Default travel time for a swipe, in milliseconds.
pub const DEFAULT_SWIPE_DURATION_MS: u64 = 1000;

/// Default fraction of the window a full-screen swipe travels.
pub const DEFAULT_SCREEN_SWIPE_PERCENTAGE: f64 = 0.6;

/// Default fraction of an element a swipe-on-element travels.
pub const DEFAULT_ELEMENT_SWIPE_PERCENTAGE: f64 = 0.5;

/// How long a plain tap holds the press, in milliseconds.
pub const TAP_HOLD_MS: u64 = 100;

/// Default hold time for a long press, in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

/// Gap between the two presses of a double tap, in milliseconds.
pub const DOUBLE_TAP_GAP_MS: u64 = 100;

/// Travel time for each pinch finger, in milliseconds.
pub const PINCH_MOVE_MS: u64 = 500;

/// Default zoom-in scale (fingers spread to twice the base offset).
pub const DEFAULT_ZOOM_IN_SCALE: f64 = 2.0;

/// Default zoom-out scale (fingers converge to half the base offset).
pub const DEFAULT_ZOOM_OUT_SCALE: f64 = 0.5;

/// A computed swipe: where the finger starts, where it ends, and how long
/// the travel takes. Immutable once computed; consumed exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePlan {
    pub start: Point,
    pub end: Point,
    pub duration_ms: u64,
}

impl GesturePlan {
    pub fn new(start: Point, end: Point, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// A plan over precomputed bounds.
    pub fn from_bounds(bounds: SwipeBounds, duration_ms: u64) -> Self {
        Self {
            start: bounds.start,
            end: bounds.end,
            duration_ms,
        }
    }
}

/// Executes gestures against the session's driver.
pub struct Gestures {
    session: Session,
}

impl Gestures {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Submits a batch and releases pointer state.
    async fn submit(&self, batch: Vec<PointerSequence>) -> Result<(), AutomationError> {
        let driver = self.session.driver();
        driver.perform_pointer_actions(&batch).await?;
        driver.release_pointer_actions().await?;
        Ok(())
    }

    /// Performs a swipe along the given plan.
    ///
    /// The finger jumps to the start point, presses, settles for
    /// [`TOUCH_SETTLE_MS`], travels to the end point over the plan's
    /// duration (interpolated by the driver), and releases.
    pub async fn swipe(&self, plan: GesturePlan) -> Result<(), AutomationError> {
        debug!(
            start_x = plan.start.x,
            start_y = plan.start.y,
            end_x = plan.end.x,
            end_y = plan.end.y,
            duration_ms = plan.duration_ms,
            "swipe"
        );
        let sequence = PointerSequence::touch("finger1")
            .move_to(plan.start)
            .down()
            .pause(TOUCH_SETTLE_MS)
            .move_over(plan.duration_ms, plan.end)
            .up();
        self.submit(vec![sequence]).await
    }

    /// Swipes across the window in the given direction.
    ///
    /// Queries the window size and centers the travel on the screen;
    /// `percentage` of the window dimension is covered.
    pub async fn swipe_screen(
        &self,
        direction: Direction,
        percentage: f64,
    ) -> Result<(), AutomationError> {
        let size = self.session.driver().window_size().await?;
        let bounds = geometry::swipe_bounds(&size.to_rect(), direction, percentage)?;
        self.swipe(GesturePlan::from_bounds(bounds, DEFAULT_SWIPE_DURATION_MS))
            .await
    }

    /// Swipes across an element in the given direction.
    pub async fn swipe_element(
        &self,
        element: &dyn ElementHandle,
        direction: Direction,
        percentage: f64,
    ) -> Result<(), AutomationError> {
        let rect = element.rect().await?;
        let bounds = geometry::swipe_bounds(&rect, direction, percentage)?;
        self.swipe(GesturePlan::from_bounds(bounds, DEFAULT_SWIPE_DURATION_MS))
            .await
    }

    /// Taps at a point.
    pub async fn tap(&self, point: Point) -> Result<(), AutomationError> {
        debug!(x = point.x, y = point.y, "tap");
        let sequence = PointerSequence::touch("finger1")
            .move_to(point)
            .down()
            .pause(TAP_HOLD_MS)
            .up();
        self.submit(vec![sequence]).await
    }

    /// Taps twice at the same point.
    ///
    /// The taps are two separate batches with a [`DOUBLE_TAP_GAP_MS`] driver
    /// pause between them, so they arrive at the server as two distinct
    /// presses rather than one coalesced gesture.
    pub async fn double_tap(&self, point: Point) -> Result<(), AutomationError> {
        self.tap(point).await?;
        self.session
            .pause(Duration::from_millis(DOUBLE_TAP_GAP_MS))
            .await?;
        self.tap(point).await
    }

    /// Presses and holds at a point for the given duration.
    pub async fn long_press(
        &self,
        point: Point,
        duration: Duration,
    ) -> Result<(), AutomationError> {
        debug!(x = point.x, y = point.y, hold_ms = duration.as_millis() as u64, "long press");
        let sequence = PointerSequence::touch("finger1")
            .move_to(point)
            .down()
            .pause(duration.as_millis() as u64)
            .up();
        self.submit(vec![sequence]).await
    }

    /// Presses and holds at the center of an element.
    pub async fn long_press_element(
        &self,
        element: &dyn ElementHandle,
        duration: Duration,
    ) -> Result<(), AutomationError> {
        let rect = element.rect().await?;
        self.long_press(rect.center(), duration).await
    }

    /// Drags from one point to another over `duration_ms`.
    pub async fn drag_and_drop(
        &self,
        source: Point,
        target: Point,
        duration_ms: u64,
    ) -> Result<(), AutomationError> {
        self.swipe(GesturePlan::new(source, target, duration_ms)).await
    }

    /// Drags one element onto another, center to center.
    pub async fn drag_element_to(
        &self,
        source: &dyn ElementHandle,
        target: &dyn ElementHandle,
        duration_ms: u64,
    ) -> Result<(), AutomationError> {
        let from = source.rect().await?.center();
        let to = target.rect().await?.center();
        self.drag_and_drop(from, to, duration_ms).await
    }

    /// Performs a two-finger pinch within `rect`.
    ///
    /// Both finger tracks go into a single batch so the driver replays them
    /// concurrently. See [`geometry::pinch_bounds`] for the scale
    /// convention.
    pub async fn pinch(&self, rect: &Rect, scale: f64) -> Result<(), AutomationError> {
        let bounds = geometry::pinch_bounds(rect, scale)?;
        debug!(scale, "pinch");
        let finger1 = PointerSequence::touch("finger1")
            .move_to(bounds.finger1.start)
            .down()
            .pause(TOUCH_SETTLE_MS)
            .move_over(PINCH_MOVE_MS, bounds.finger1.end)
            .up();
        let finger2 = PointerSequence::touch("finger2")
            .move_to(bounds.finger2.start)
            .down()
            .pause(TOUCH_SETTLE_MS)
            .move_over(PINCH_MOVE_MS, bounds.finger2.end)
            .up();
        self.submit(vec![finger1, finger2]).await
    }

    /// Zoom in: spreads the fingers apart. Requires `scale > 1`.
    pub async fn pinch_zoom_in(&self, rect: &Rect, scale: f64) -> Result<(), AutomationError> {
        if !(scale > 1.0) {
            return Err(AutomationError::InvalidArgument(format!(
                "zoom-in scale must be greater than 1, got {scale}"
            )));
        }
        self.pinch(rect, scale).await
    }

    /// Zoom out: draws the fingers together. Requires `0 < scale < 1`.
    pub async fn pinch_zoom_out(&self, rect: &Rect, scale: f64) -> Result<(), AutomationError> {
        if !(scale > 0.0 && scale < 1.0) {
            return Err(AutomationError::InvalidArgument(format!(
                "zoom-out scale must be between 0 and 1, got {scale}"
            )));
        }
        self.pinch(rect, scale).await
    }
}
