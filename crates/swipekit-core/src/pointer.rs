//! Pointer-action batch model.
//!
//! A gesture is submitted to the automation server as a batch of
//! [`PointerSequence`]s, one per finger. Each sequence is an ordered list of
//! [`PointerItem`]s (move, press, pause, release) that the server replays
//! against the device, interpolating timed moves itself. The JSON shape
//! produced here is the server's wire contract:
//!
//! ```json
//! {
//!   "type": "pointer",
//!   "id": "finger1",
//!   "parameters": { "pointerType": "touch" },
//!   "actions": [
//!     { "type": "pointerMove", "duration": 0, "x": 500.0, "y": 1600.0 },
//!     { "type": "pointerDown", "button": 0 },
//!     { "type": "pause", "duration": 100 },
//!     { "type": "pointerMove", "duration": 1000, "x": 500.0, "y": 400.0 },
//!     { "type": "pointerUp", "button": 0 }
//!   ]
//! }
//! ```
//!
//! Sequences within one batch run concurrently (that is what makes a pinch a
//! pinch); the server is responsible for interleaving them. This module only
//! describes batches, it never submits them — see
//! [`Gestures`](crate::gestures::Gestures).

use serde::Serialize;

use crate::geometry::Point;

/// Settle pause between pressing down and starting a timed move, in
/// milliseconds. Gives the device time to register the press before the
/// finger travels.
pub const TOUCH_SETTLE_MS: u64 = 100;

/// A single step within a pointer sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerItem {
    /// Move the pointer to a location, interpolated over `duration` ms.
    /// A duration of 0 is an instant jump.
    PointerMove { duration: u64, x: f64, y: f64 },

    /// Press the pointer down.
    PointerDown { button: u8 },

    /// Hold still for `duration` ms.
    Pause { duration: u64 },

    /// Release the pointer.
    PointerUp { button: u8 },
}

/// Input source parameters for a pointer sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerParameters {
    #[serde(rename = "pointerType")]
    pub pointer_type: &'static str,
}

/// An ordered list of pointer steps for one finger.
///
/// Built with the fluent methods below; consumed by
/// [`AutomationDriver::perform_pointer_actions`](crate::driver::AutomationDriver::perform_pointer_actions).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerSequence {
    #[serde(rename = "type")]
    kind: &'static str,
    pub id: String,
    pub parameters: PointerParameters,
    pub actions: Vec<PointerItem>,
}

impl PointerSequence {
    /// Starts an empty touch sequence for the finger with the given id.
    pub fn touch(id: impl Into<String>) -> Self {
        Self {
            kind: "pointer",
            id: id.into(),
            parameters: PointerParameters {
                pointer_type: "touch",
            },
            actions: Vec::new(),
        }
    }

    /// Appends an instant move to `point`.
    pub fn move_to(mut self, point: Point) -> Self {
        self.actions.push(PointerItem::PointerMove {
            duration: 0,
            x: point.x,
            y: point.y,
        });
        self
    }

    /// Appends a move to `point` interpolated over `duration_ms`.
    pub fn move_over(mut self, duration_ms: u64, point: Point) -> Self {
        self.actions.push(PointerItem::PointerMove {
            duration: duration_ms,
            x: point.x,
            y: point.y,
        });
        self
    }

    /// Appends a press.
    pub fn down(mut self) -> Self {
        self.actions.push(PointerItem::PointerDown { button: 0 });
        self
    }

    /// Appends a hold of `duration_ms`.
    pub fn pause(mut self, duration_ms: u64) -> Self {
        self.actions.push(PointerItem::Pause {
            duration: duration_ms,
        });
        self
    }

    /// Appends a release.
    pub fn up(mut self) -> Self {
        self.actions.push(PointerItem::PointerUp { button: 0 });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_swipe_sequence_wire_shape() {
        let sequence = PointerSequence::touch("finger1")
            .move_to(Point::new(500.0, 1600.0))
            .down()
            .pause(TOUCH_SETTLE_MS)
            .move_over(1000, Point::new(500.0, 400.0))
            .up();

        let value = serde_json::to_value(&sequence).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "pointer",
                "id": "finger1",
                "parameters": { "pointerType": "touch" },
                "actions": [
                    { "type": "pointerMove", "duration": 0, "x": 500.0, "y": 1600.0 },
                    { "type": "pointerDown", "button": 0 },
                    { "type": "pause", "duration": 100 },
                    { "type": "pointerMove", "duration": 1000, "x": 500.0, "y": 400.0 },
                    { "type": "pointerUp", "button": 0 }
                ]
            })
        );
    }

    #[test]
    fn test_tap_sequence_items_in_order() {
        let sequence = PointerSequence::touch("finger1")
            .move_to(Point::new(10.0, 20.0))
            .down()
            .pause(100)
            .up();

        assert_eq!(
            sequence.actions,
            vec![
                PointerItem::PointerMove { duration: 0, x: 10.0, y: 20.0 },
                PointerItem::PointerDown { button: 0 },
                PointerItem::Pause { duration: 100 },
                PointerItem::PointerUp { button: 0 },
            ]
        );
    }

    #[test]
    fn test_finger_ids_are_preserved() {
        let one = PointerSequence::touch("finger1");
        let two = PointerSequence::touch("finger2");
        assert_eq!(one.id, "finger1");
        assert_eq!(two.id, "finger2");
    }
}
