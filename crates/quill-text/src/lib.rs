//! quill-text: the text model behind quill's text-editing widgets.
//!
//! - char-indexed text storage with a maximum-length cap
//! - line wrapping (greedy word wrap, newline-only mode, monospaced fast path)
//! - a wrapped-line table with prefix sums for grid/offset conversions
//! - caret/selection model over the wrapped grid
//! - word-boundary movement and pixel hit-testing

pub mod buffer;
pub mod layout;

pub use buffer::TextBuffer;
pub use layout::{
    CharMeasure, LineTable, Position, SelectionModel, WordRun, WrapMode, WrappedLine,
};
