use core::ops::Range;

/// A single wrapped line: a contiguous byte sub-range of the source text
/// plus its cached character count and measured pixel width.
///
/// Hard-broken lines include their terminating `'\n'` in the range so that
/// concatenating all lines of a table reconstructs the source text exactly;
/// the newline is excluded from the display text and from the width.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// Byte offset range in the source text for this line.
    pub byte_range: Range<usize>,
    /// Number of characters in `byte_range` (including a trailing newline).
    pub char_len: usize,
    /// Whether the line ends with an explicit `'\n'`.
    pub hard_break: bool,
    /// Measured width of the display text in pixels.
    pub width: f32,
}

impl WrappedLine {
    /// Full slice of this line, including a trailing newline if present.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.byte_range.clone()]
    }

    /// Slice of this line as it is rendered, without the trailing newline.
    pub fn display_text<'a>(&self, source: &'a str) -> &'a str {
        let text = self.text(source);
        text.strip_suffix('\n').unwrap_or(text)
    }

    /// Character count of the display text.
    pub fn display_char_len(&self) -> usize {
        self.char_len - usize::from(self.hard_break)
    }
}
