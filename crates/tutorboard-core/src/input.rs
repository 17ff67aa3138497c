//! Pointer and touch events delivered to the whiteboard.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in client (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// The pointer left the tracked surface.
    Leave {
        position: Point,
    },
}

impl PointerEvent {
    /// Client-space position of the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Leave { position } => position,
        }
    }

    /// Whether this event ends a gesture, normally or not.
    pub fn ends_gesture(&self) -> bool {
        matches!(self, PointerEvent::Up { .. } | PointerEvent::Leave { .. })
    }
}

/// Touch event, reduced to the first active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchEvent {
    Start { position: Point },
    Move { position: Point },
    End { position: Point },
}

impl From<TouchEvent> for PointerEvent {
    fn from(event: TouchEvent) -> Self {
        match event {
            TouchEvent::Start { position } => PointerEvent::Down {
                position,
                button: MouseButton::Left,
            },
            TouchEvent::Move { position } => PointerEvent::Move { position },
            TouchEvent::End { position } => PointerEvent::Up { position },
        }
    }
}
