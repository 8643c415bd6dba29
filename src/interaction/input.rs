use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

/// Input classes that can be enabled or disabled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputClass {
    Mouse,
    Keyboard,
}

impl InputClass {
    /// Event kinds a widget subscribes to when the class is enabled.
    #[must_use]
    pub fn kinds(self) -> &'static [InputEventKind] {
        match self {
            InputClass::Mouse => &[
                InputEventKind::MouseMoved,
                InputEventKind::MousePressed,
                InputEventKind::MouseReleased,
                InputEventKind::MouseDragged,
            ],
            InputClass::Keyboard => &[InputEventKind::KeyPressed, InputEventKind::KeyReleased],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEventKind {
    MouseMoved,
    MousePressed,
    MouseReleased,
    MouseDragged,
    KeyPressed,
    KeyReleased,
}

impl InputEventKind {
    #[must_use]
    pub fn class(self) -> InputClass {
        match self {
            InputEventKind::MouseMoved
            | InputEventKind::MousePressed
            | InputEventKind::MouseReleased
            | InputEventKind::MouseDragged => InputClass::Mouse,
            InputEventKind::KeyPressed | InputEventKind::KeyReleased => InputClass::Keyboard,
        }
    }
}

/// Host key code. Printable keys use their Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCode(pub u32);

impl KeyCode {
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    #[must_use]
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Pointer and keyboard payloads delivered by the host event loop.
///
/// `MouseMoved` is sent while no button is held, `MouseDragged` while one is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseMoved { x: f64, y: f64 },
    MousePressed { x: f64, y: f64, button: PointerButton },
    MouseReleased { x: f64, y: f64, button: PointerButton },
    MouseDragged { x: f64, y: f64, button: PointerButton },
    KeyPressed { key: KeyCode },
    KeyReleased { key: KeyCode },
}

impl InputEvent {
    #[must_use]
    pub fn kind(&self) -> InputEventKind {
        match self {
            InputEvent::MouseMoved { .. } => InputEventKind::MouseMoved,
            InputEvent::MousePressed { .. } => InputEventKind::MousePressed,
            InputEvent::MouseReleased { .. } => InputEventKind::MouseReleased,
            InputEvent::MouseDragged { .. } => InputEventKind::MouseDragged,
            InputEvent::KeyPressed { .. } => InputEventKind::KeyPressed,
            InputEvent::KeyReleased { .. } => InputEventKind::KeyReleased,
        }
    }

    #[must_use]
    pub fn pointer(&self) -> Option<ScreenPoint> {
        match *self {
            InputEvent::MouseMoved { x, y }
            | InputEvent::MousePressed { x, y, .. }
            | InputEvent::MouseReleased { x, y, .. }
            | InputEvent::MouseDragged { x, y, .. } => Some(ScreenPoint::new(x, y)),
            InputEvent::KeyPressed { .. } | InputEvent::KeyReleased { .. } => None,
        }
    }
}
