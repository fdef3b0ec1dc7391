use std::cell::Cell;

use quill_core::TextMetrics;

use crate::layout::boundaries::break_opportunities;
use crate::layout::line::WrappedLine;

/// Line wrapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Break only at explicit newline characters (horizontal scrolling).
    NoWrap,
    /// Greedy word wrap: break at the last break opportunity that fits,
    /// falling back to a mid-word hard break for overlong words.
    Word,
}

/// Per-character advance lookup shared by the wrapper and the hit tester.
///
/// Bundles the metrics oracle, the font size and the optional monospaced
/// fast path (a caller-asserted fixed advance that skips the oracle
/// entirely). A character the oracle cannot measure contributes zero width;
/// the first such character is reported once through `log`.
pub struct CharMeasure<'a> {
    metrics: &'a dyn TextMetrics,
    px: f32,
    fixed_advance: Option<f32>,
    warned: Cell<bool>,
}

impl<'a> CharMeasure<'a> {
    pub fn new(metrics: &'a dyn TextMetrics, px: f32, fixed_advance: Option<f32>) -> Self {
        Self {
            metrics,
            px,
            fixed_advance,
            warned: Cell::new(false),
        }
    }

    /// Advance width of `ch` in pixels. Newlines are zero width.
    pub fn advance(&self, ch: char) -> f32 {
        if ch == '\n' {
            return 0.0;
        }
        if let Some(advance) = self.fixed_advance {
            return advance;
        }
        match self.metrics.advance(ch, self.px) {
            Some(width) => width,
            None => {
                if !self.warned.replace(true) {
                    log::warn!("no font metrics for {ch:?}; assuming zero advance");
                }
                0.0
            }
        }
    }

    /// Width of a whole string.
    pub fn width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }

    pub fn line_height(&self) -> f32 {
        self.metrics.line_height(self.px)
    }
}

/// Wrap `text` into an ordered sequence of lines.
///
/// - `WrapMode::NoWrap` breaks only at explicit newlines.
/// - `WrapMode::Word` additionally breaks greedily at the last UAX-14
///   opportunity that still fits in `max_width`; a single word wider than
///   `max_width` is hard-broken mid-word. Break whitespace stays on the
///   line it follows, so the produced ranges tile the text exactly.
/// - Empty text yields exactly one empty line. A non-positive `max_width`
///   degenerates to one character per line.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    mode: WrapMode,
    measure: &CharMeasure<'_>,
) -> Vec<WrappedLine> {
    let mut lines = Vec::new();

    let mut para_start = 0usize;
    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            wrap_paragraph(text, para_start, idx, true, max_width, mode, measure, &mut lines);
            para_start = idx + 1;
        }
    }
    // Final paragraph, also emitted when empty so "a\n" keeps its trailing
    // empty line and "" yields one empty line.
    wrap_paragraph(
        text,
        para_start,
        text.len(),
        false,
        max_width,
        mode,
        measure,
        &mut lines,
    );

    lines
}

#[allow(clippy::too_many_arguments)]
fn wrap_paragraph(
    text: &str,
    start: usize,
    end: usize,
    hard_break: bool,
    max_width: f32,
    mode: WrapMode,
    measure: &CharMeasure<'_>,
    out_lines: &mut Vec<WrappedLine>,
) {
    let paragraph = &text[start..end];
    // The terminating '\n' belongs to the last line of the paragraph.
    let tail_bytes = usize::from(hard_break);
    let tail_chars = usize::from(hard_break);

    if paragraph.is_empty() || matches!(mode, WrapMode::NoWrap) {
        out_lines.push(WrappedLine {
            byte_range: start..end + tail_bytes,
            char_len: paragraph.chars().count() + tail_chars,
            hard_break,
            width: measure.width(paragraph),
        });
        return;
    }

    let breaks = break_opportunities(paragraph);
    let para_len = paragraph.len();
    let mut local_start = 0usize;

    while local_start < para_len {
        let mut width = 0.0f32;
        let mut chars = 0usize;
        // Last break opportunity that still fit: (offset, width, chars).
        let mut last_fit: Option<(usize, f32, usize)> = None;
        let mut split: Option<(usize, f32, usize)> = None;

        for (idx, ch) in paragraph[local_start..].char_indices() {
            let advance = measure.advance(ch);
            if width + advance > max_width && chars > 0 {
                split = Some(last_fit.unwrap_or((local_start + idx, width, chars)));
                break;
            }
            width += advance;
            chars += 1;
            let pos = local_start + idx + ch.len_utf8();
            if pos < para_len && breaks.binary_search(&pos).is_ok() {
                last_fit = Some((pos, width, chars));
            }
        }

        let (line_end, line_width, line_chars) = split.unwrap_or((para_len, width, chars));
        let is_last = line_end == para_len;
        out_lines.push(WrappedLine {
            byte_range: start + local_start..start + line_end + if is_last { tail_bytes } else { 0 },
            char_len: line_chars + if is_last { tail_chars } else { 0 },
            hard_break: hard_break && is_last,
            width: line_width,
        });
        local_start = line_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{AdvanceTable, FixedAdvance};

    fn fixed(advance_em: f32) -> FixedAdvance {
        FixedAdvance::new(advance_em, 1.0)
    }

    fn line_texts<'a>(lines: &[WrappedLine], text: &'a str) -> Vec<&'a str> {
        lines.iter().map(|l| l.display_text(text)).collect()
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let lines = wrap_text("", 100.0, WrapMode::Word, &measure);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].char_len, 0);
        assert_eq!(lines[0].width, 0.0);
    }

    #[test]
    fn test_greedy_word_wrap_keeps_break_space() {
        // 10 px per char, 100 px wide: "hello world" is 110 px, so the
        // break lands after "hello " and the space stays on line one.
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "hello world foo";
        let lines = wrap_text(text, 100.0, WrapMode::Word, &measure);
        assert_eq!(line_texts(&lines, text), vec!["hello ", "world foo"]);
        assert_eq!(lines[0].width, 60.0);
        assert_eq!(lines[1].width, 90.0);
    }

    #[test]
    fn test_newline_always_breaks() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "ab\ncd";
        let lines = wrap_text(text, 1000.0, WrapMode::Word, &measure);
        assert_eq!(line_texts(&lines, text), vec!["ab", "cd"]);
        assert!(lines[0].hard_break);
        assert_eq!(lines[0].char_len, 3);
        assert!(!lines[1].hard_break);
    }

    #[test]
    fn test_trailing_newline_keeps_empty_line() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "ab\n";
        let lines = wrap_text(text, 1000.0, WrapMode::Word, &measure);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].char_len, 0);
    }

    #[test]
    fn test_overlong_word_hard_breaks() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "abcdefgh";
        // 30 px wide at 10 px per char: three chars per line.
        let lines = wrap_text(text, 30.0, WrapMode::Word, &measure);
        assert_eq!(line_texts(&lines, text), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_degenerate_width_one_char_per_line() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "abc";
        let lines = wrap_text(text, 0.0, WrapMode::Word, &measure);
        assert_eq!(line_texts(&lines, text), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_wrap_ignores_width() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "hello world foo";
        let lines = wrap_text(text, 10.0, WrapMode::NoWrap, &measure);
        assert_eq!(line_texts(&lines, text), vec![text]);
        assert_eq!(lines[0].width, 150.0);
    }

    #[test]
    fn test_reconstruction_property() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        for text in [
            "",
            "hello world foo",
            "one\ntwo three four five\n\nsix",
            "supercalifragilistic",
            "trailing newline\n",
        ] {
            for width in [0.0, 25.0, 60.0, 1000.0] {
                let lines = wrap_text(text, width, WrapMode::Word, &measure);
                let joined: String = lines.iter().map(|l| l.text(text)).collect();
                assert_eq!(joined, text, "width {width} on {text:?}");
            }
        }
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let metrics = fixed(0.5);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        let text = "the quick brown fox jumps over the lazy dog";
        let a = wrap_text(text, 80.0, WrapMode::Word, &measure);
        let b = wrap_text(text, 80.0, WrapMode::Word, &measure);
        assert_eq!(a, b);
    }

    #[test]
    fn test_monospace_fast_path_matches_oracle() {
        let metrics = fixed(0.5);
        let oracle = CharMeasure::new(&metrics, 20.0, None);
        let fast = CharMeasure::new(&metrics, 20.0, Some(10.0));
        let text = "hello world foo bar baz";
        assert_eq!(
            wrap_text(text, 100.0, WrapMode::Word, &oracle),
            wrap_text(text, 100.0, WrapMode::Word, &fast),
        );
    }

    #[test]
    fn test_unmeasured_chars_fall_back_to_zero_width() {
        let metrics = AdvanceTable::from_pairs(1.0, [('a', 0.5)]);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        // 'x' has no metrics: zero width, so everything fits on one line.
        let text = "xxxx";
        let lines = wrap_text(text, 5.0, WrapMode::Word, &measure);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 0.0);
    }
}
