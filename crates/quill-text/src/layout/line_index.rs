use crate::buffer::byte_of_char;
use crate::layout::line::WrappedLine;
use crate::layout::position::Position;
use crate::layout::wrap::{CharMeasure, WrapMode, wrap_text};

/// The wrapped-line table: the ordered line sequence plus prefix sums over
/// character counts for O(log n) conversions between grid positions and
/// absolute character offsets.
///
/// Fully derived from text + wrap width + metrics; rebuilt wholesale
/// whenever any of those change. Always contains at least one line.
#[derive(Debug, Clone)]
pub struct LineTable {
    lines: Vec<WrappedLine>,
    /// Cumulative character counts at each line start.
    char_offsets: Vec<usize>,
    total_chars: usize,
    max_line_width: f32,
}

impl LineTable {
    pub fn new(lines: Vec<WrappedLine>) -> Self {
        debug_assert!(!lines.is_empty());
        let mut char_offsets = Vec::with_capacity(lines.len());
        let mut cursor = 0usize;
        let mut max_line_width = 0.0f32;
        for line in &lines {
            char_offsets.push(cursor);
            cursor += line.char_len;
            max_line_width = max_line_width.max(line.width);
        }
        Self {
            lines,
            char_offsets,
            total_chars: cursor,
            max_line_width,
        }
    }

    /// Wrap `text` and index the result in one step.
    pub fn build(text: &str, max_width: f32, mode: WrapMode, measure: &CharMeasure<'_>) -> Self {
        Self::new(wrap_text(text, max_width, mode, measure))
    }

    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> &WrappedLine {
        &self.lines[index.min(self.lines.len() - 1)]
    }

    /// Number of wrapped lines; at least 1 even for empty text.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Width of the widest line, used for horizontal scrollbar ranges.
    pub fn max_line_width(&self) -> f32 {
        self.max_line_width
    }

    /// Character offset at the start of a line (clamped).
    pub fn char_offset_at_line(&self, line: usize) -> usize {
        self.char_offsets[line.min(self.char_offsets.len() - 1)]
    }

    /// Index of the line containing the given absolute character offset.
    /// Offsets at a line boundary resolve to the following line.
    pub fn line_at_char(&self, char_offset: usize) -> usize {
        let char_offset = char_offset.min(self.total_chars);
        match self.char_offsets.binary_search(&char_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }

    /// Convert an absolute character offset to a grid position, clamping
    /// into `[0, total_chars]`.
    pub fn position_of_char(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.total_chars);
        let line = self.line_at_char(char_offset);
        Position::new(line, char_offset - self.char_offsets[line])
    }

    /// Convert a grid position to an absolute character offset, clamping
    /// line and column into bounds.
    pub fn char_of_position(&self, position: Position) -> usize {
        let line = position.line.min(self.lines.len() - 1);
        let column = position.column.min(self.lines[line].char_len);
        self.char_offsets[line] + column
    }

    /// Character count of a line (clamped index).
    pub fn line_char_len(&self, line: usize) -> usize {
        self.line(line).char_len
    }

    /// Byte offset of an absolute character offset within the source text.
    ///
    /// `text` must be the same text the table was built from.
    pub fn byte_of_char(&self, text: &str, char_offset: usize) -> usize {
        let char_offset = char_offset.min(self.total_chars);
        let line = self.line_at_char(char_offset);
        let line_info = &self.lines[line];
        let within = char_offset - self.char_offsets[line];
        line_info.byte_range.start + byte_of_char(line_info.text(text), within)
    }
}
