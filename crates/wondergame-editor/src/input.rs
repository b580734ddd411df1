//! Per-frame input snapshot consumed by the editor session.
//!
//! The presentation layer samples its windowing events once per frame and
//! hands the session one of these. Button and key fields are already
//! edge-detected: `left_pressed` is true only on the frame the button went
//! down, and each key appears in `keys` once per physical press.

use wondergame_core::geom::Point;

/// Edge-triggered editor shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Duplicate the selected entity.
    Duplicate,
    /// Leave the editor and return to exploration mode. Front-ends bind
    /// this to both of the editor's exit keys.
    ReturnToGame,
}

/// Text-editing input, delivered only while a property edit is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    Char(char),
    Backspace,
    Enter,
    Escape,
}

/// One frame's worth of pointer and keyboard state.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub pointer: Point,
    /// Left button went down this frame.
    pub left_pressed: bool,
    /// Left button is currently held. The session treats any frame
    /// without this as the end of a drag or resize.
    pub left_down: bool,
    pub keys: Vec<EditorKey>,
    pub text: Vec<TextEvent>,
}

impl InputSnapshot {
    /// A frame with the pointer parked and nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A left-button press edge at `(x, y)`.
    pub fn press_at(x: i32, y: i32) -> Self {
        Self {
            pointer: Point::new(x, y),
            left_pressed: true,
            left_down: true,
            ..Self::default()
        }
    }

    /// The button held down with the pointer at `(x, y)`.
    pub fn hold_at(x: i32, y: i32) -> Self {
        Self {
            pointer: Point::new(x, y),
            left_down: true,
            ..Self::default()
        }
    }

    /// A button-up frame at `(x, y)`: the release that ends a drag.
    pub fn release_at(x: i32, y: i32) -> Self {
        Self {
            pointer: Point::new(x, y),
            ..Self::default()
        }
    }

    /// A single shortcut key press.
    pub fn key(key: EditorKey) -> Self {
        Self {
            keys: vec![key],
            ..Self::default()
        }
    }

    /// A single text-editing event.
    pub fn text_event(event: TextEvent) -> Self {
        Self {
            text: vec![event],
            ..Self::default()
        }
    }

    /// Character events for every char of `s`.
    pub fn typed(s: &str) -> Self {
        Self {
            text: s.chars().map(TextEvent::Char).collect(),
            ..Self::default()
        }
    }
}
