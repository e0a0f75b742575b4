//! Input events delivered by the window collaborator

use glam::Vec2;

use crate::mouse_to_ui;

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character, including space
    Char(char),
    Enter,
    Backspace,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Left button press in window coordinates (y grows downwards)
    MouseDown { x: f32, y: f32 },
}

impl InputEvent {
    /// Lower-cased character for a plain character key
    pub fn command_char(&self) -> Option<char> {
        match self {
            InputEvent::KeyDown(Key::Char(c)) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// Click position in UI space (y grows upwards)
    pub fn click_pos(&self) -> Option<Vec2> {
        match *self {
            InputEvent::MouseDown { x, y } => Some(mouse_to_ui(x, y)),
            _ => None,
        }
    }
}
