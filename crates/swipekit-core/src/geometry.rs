//! Pure geometry for gesture planning.
//!
//! Everything in this module is side-effect free: given a bounding box (the
//! full window or an element's rect), a [`Direction`] and a travel
//! percentage, it computes the pixel coordinates a gesture should move
//! through. The [`Gestures`](crate::gestures::Gestures) executor turns these
//! bounds into pointer-action batches; nothing here talks to a driver.
//!
//! Out-of-range inputs are caller contract violations and fail with
//! [`AutomationError::InvalidArgument`]. Values are never silently clamped —
//! clamping would make the produced coordinates unpredictable and the
//! computations untestable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutomationError;

/// A swipe direction, named for the way the content moves.
///
/// `Up` means the content moves upward: the finger starts below the center
/// of the bounding box and ends above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The lowercase name of this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AutomationError;

    /// Parses a direction name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(AutomationError::InvalidArgument(format!(
                "invalid swipe direction '{s}'; use up, down, left, or right"
            ))),
        }
    }
}

/// A point in screen coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The dimensions of the device window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The full-window rect: this size anchored at the origin.
    pub fn to_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// A bounding box in screen coordinates.
///
/// The origin is the top-left corner; `width` and `height` are non-negative.
/// A rect is either the full window or an element's frame as reported by
/// the automation server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The center point of this rect.
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// The start and end points of a single-finger gesture track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeBounds {
    pub start: Point,
    pub end: Point,
}

/// The two finger tracks of a pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBounds {
    pub finger1: SwipeBounds,
    pub finger2: SwipeBounds,
}

/// Computes the start and end points for a directional swipe within `rect`.
///
/// The travel is centered on the rect: start and end are symmetric about the
/// center along the gesture's axis, and the distance between them along that
/// axis equals `dimension * percentage` (height for vertical directions,
/// width for horizontal ones). The cross-axis coordinate is held at the
/// center.
///
/// # Errors
///
/// Fails with [`AutomationError::InvalidArgument`] when `percentage` is not
/// in `(0, 1]`.
pub fn swipe_bounds(
    rect: &Rect,
    direction: Direction,
    percentage: f64,
) -> Result<SwipeBounds, AutomationError> {
    if !(percentage > 0.0 && percentage <= 1.0) {
        return Err(AutomationError::InvalidArgument(format!(
            "swipe percentage must be in (0, 1], got {percentage}"
        )));
    }

    let center = rect.center();
    let half = percentage / 2.0;

    let (start, end) = match direction {
        Direction::Up => (
            Point::new(center.x, rect.y + rect.height * (0.5 + half)),
            Point::new(center.x, rect.y + rect.height * (0.5 - half)),
        ),
        Direction::Down => (
            Point::new(center.x, rect.y + rect.height * (0.5 - half)),
            Point::new(center.x, rect.y + rect.height * (0.5 + half)),
        ),
        Direction::Left => (
            Point::new(rect.x + rect.width * (0.5 + half), center.y),
            Point::new(rect.x + rect.width * (0.5 - half), center.y),
        ),
        Direction::Right => (
            Point::new(rect.x + rect.width * (0.5 - half), center.y),
            Point::new(rect.x + rect.width * (0.5 + half), center.y),
        ),
    };

    Ok(SwipeBounds { start, end })
}

/// Computes the two finger tracks for a pinch gesture within `rect`.
///
/// Convention: both fingers sit on the horizontal axis through the rect
/// center, offset by `min(width, height) / 4` on either side. Each finger
/// travels from `center ± base` to `center ± base * scale`, so `scale > 1`
/// spreads the fingers apart (zoom in) and `0 < scale < 1` draws them
/// together (zoom out).
///
/// # Errors
///
/// Fails with [`AutomationError::InvalidArgument`] when `scale` is not a
/// positive number.
pub fn pinch_bounds(rect: &Rect, scale: f64) -> Result<PinchBounds, AutomationError> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(AutomationError::InvalidArgument(format!(
            "pinch scale must be a positive number, got {scale}"
        )));
    }

    let center = rect.center();
    let base = rect.width.min(rect.height) / 4.0;
    let target = base * scale;

    Ok(PinchBounds {
        finger1: SwipeBounds {
            start: Point::new(center.x - base, center.y),
            end: Point::new(center.x - target, center.y),
        },
        finger2: SwipeBounds {
            start: Point::new(center.x + base, center.y),
            end: Point::new(center.x + target, center.y),
        },
    })
}
