//! Capability traits implemented by concrete widget structs.
//!
//! There is no widget base class: a renderer asks for `Drawable`, a focus
//! manager for `FocusableInput`, a layout pass for `Resizable`, and each
//! widget implements exactly the capabilities it has.

use quill_core::Rect;

use crate::event::{EventResult, KeyEvent, MouseEvent, MouseMoveEvent};

/// Something a rendering backend can place on screen.
pub trait Drawable {
    /// Outer bounds in the parent's coordinate space.
    fn bounds(&self) -> Rect;
}

/// Something whose size can be driven by a layout pass.
pub trait Resizable {
    fn set_size(&mut self, width: f32, height: f32);
}

/// Something that takes keyboard focus and consumes input events.
///
/// All handlers default to [`EventResult::Ignored`] so widgets implement
/// only what they care about.
pub trait FocusableInput {
    fn set_focused(&mut self, focused: bool);

    fn is_focused(&self) -> bool;

    fn handle_mouse_press(&mut self, event: MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_mouse_move(&mut self, event: MouseMoveEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_mouse_release(&mut self, event: MouseEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_mouse_wheel(&mut self, delta: f32, x: f32, y: f32) -> EventResult {
        let _ = (delta, x, y);
        EventResult::Ignored
    }

    fn handle_key(&mut self, event: KeyEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    fn handle_char(&mut self, ch: char) -> EventResult {
        let _ = ch;
        EventResult::Ignored
    }
}
