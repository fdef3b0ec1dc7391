//! quill-widgets: the widget layer of the quill toolkit.
//!
//! The centerpiece is [`TextBox`], a multi-line text input with word wrap,
//! selection, scrollbars and typed change signals. Widgets expose small
//! capability traits (`Drawable`, `FocusableInput`, `Resizable`) instead of
//! a deep inheritance chain; rendering backends consume the widgets'
//! geometry output (visible lines, selection rectangles, caret rectangle)
//! and draw it however they like.

pub mod clipboard;
pub mod event;
pub mod scrollbar;
pub mod signal;
pub mod style;
pub mod text_box;
pub mod widget;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use event::{EventResult, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseMoveEvent};
pub use scrollbar::{Scrollbar, ScrollbarPolicy};
pub use signal::{SignalError, SignalPayload, TextBoxSignal, TextBoxSignals};
pub use style::{SharedStyle, StyleError, TextBoxStyle};
pub use text_box::TextBox;
pub use widget::{Drawable, FocusableInput, Resizable};
