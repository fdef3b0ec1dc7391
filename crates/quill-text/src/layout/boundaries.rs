use core::ops::Range;

use unicode_linebreak::linebreaks;
use unicode_segmentation::UnicodeSegmentation;

/// Byte offsets at which a line may be broken, in ascending order.
///
/// Computed with UAX-14 via the `unicode-linebreak` crate. The trailing
/// end-of-text break is excluded; the wrapper handles the final line itself.
pub fn break_opportunities(text: &str) -> Vec<usize> {
    linebreaks(text)
        .filter(|&(offset, _)| offset < text.len())
        .map(|(offset, _)| offset)
        .collect()
}

/// A maximal run of characters of one word class.
///
/// The two classes are alphanumeric and everything else; whitespace and
/// punctuation share the non-word class. Ranges are char offsets and tile
/// the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRun {
    pub char_range: Range<usize>,
    pub is_word: bool,
}

/// Enumerate word and non-word runs for the given text.
///
/// Segments come from `unicode-segmentation`'s word boundary logic
/// (roughly UAX-29); adjacent segments of the same class are merged so the
/// observable classes are exactly alnum vs non-alnum.
pub fn word_runs(text: &str) -> Vec<WordRun> {
    let mut runs: Vec<WordRun> = Vec::new();
    let mut char_pos = 0usize;

    for segment in text.split_word_bounds() {
        let len = segment.chars().count();
        let is_word = segment.chars().any(|c| c.is_alphanumeric());

        match runs.last_mut() {
            Some(run) if run.is_word == is_word => run.char_range.end += len,
            _ => runs.push(WordRun {
                char_range: char_pos..char_pos + len,
                is_word,
            }),
        }
        char_pos += len;
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_opportunities_after_spaces() {
        let text = "hello world foo";
        let breaks = break_opportunities(text);
        assert!(breaks.contains(&6));
        assert!(breaks.contains(&12));
        assert!(!breaks.contains(&15));
    }

    #[test]
    fn test_word_runs_simple() {
        let text = "foo bar";
        let runs = word_runs(text);
        assert_eq!(
            runs,
            vec![
                WordRun { char_range: 0..3, is_word: true },
                WordRun { char_range: 3..4, is_word: false },
                WordRun { char_range: 4..7, is_word: true },
            ]
        );
    }

    #[test]
    fn test_word_runs_merge_punctuation_and_whitespace() {
        let text = "a, b";
        let runs = word_runs(text);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].char_range, 1..3);
        assert!(!runs[1].is_word);
    }

    #[test]
    fn test_word_runs_empty() {
        assert!(word_runs("").is_empty());
    }
}
