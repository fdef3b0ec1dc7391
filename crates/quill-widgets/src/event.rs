//! Toolkit-level input event types.
//!
//! The windowing shell translates its native events into these before
//! handing them to widgets, so the widget layer carries no windowing
//! dependency. Mouse events carry a monotonic timestamp supplied by the
//! shell; the text box compares timestamps for double-click detection,
//! which keeps that state machine deterministic under test.

use std::time::Duration;

/// Result of an event handling operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled and should not propagate.
    Handled,
    /// Event was not handled, continue propagation.
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse button press/release data, in the parent's coordinate space.
#[derive(Debug, Clone, Copy)]
pub struct MouseEvent {
    pub x: f32,
    pub y: f32,
    pub button: MouseButton,
    /// Time since an arbitrary shell-chosen epoch.
    pub timestamp: Duration,
}

/// Mouse move data.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub cmd: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        cmd: false,
    };

    /// The platform shortcut modifier (Ctrl, or Cmd on macOS shells).
    pub fn command(&self) -> bool {
        self.ctrl || self.cmd
    }
}

/// Keyboard input data.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}
