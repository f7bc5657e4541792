//! Raw pointer and keyboard events delivered by the windowing layer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The button that drives every protocol.
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

/// Pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Pressed {
        position: Point,
        button: MouseButton,
    },
    Released {
        position: Point,
        button: MouseButton,
    },
    /// Press and release without movement in between.
    Clicked {
        position: Point,
        button: MouseButton,
    },
    /// Movement with a button held.
    Dragged {
        position: Point,
    },
    /// Movement with no button held.
    Moved {
        position: Point,
    },
    Entered {
        position: Point,
    },
    Exited {
        position: Point,
    },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Pressed { position, .. }
            | PointerEvent::Released { position, .. }
            | PointerEvent::Clicked { position, .. }
            | PointerEvent::Dragged { position }
            | PointerEvent::Moved { position }
            | PointerEvent::Entered { position }
            | PointerEvent::Exited { position } => position,
        }
    }

    /// Button carried by press, release and click events.
    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            PointerEvent::Pressed { button, .. }
            | PointerEvent::Released { button, .. }
            | PointerEvent::Clicked { button, .. } => Some(button),
            _ => None,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Any event a tool can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}
