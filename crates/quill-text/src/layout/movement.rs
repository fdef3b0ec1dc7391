/// Word-boundary caret jumps (Ctrl+Left / Ctrl+Right).
///
/// A boundary is a transition between the alphanumeric and
/// non-alphanumeric character classes: moving left first skips separators,
/// then the word run before them; moving right mirrors that. Offsets are
/// absolute character indices and clamp into `[0, char_len]`.

/// Offset of the beginning of the word left of `caret`.
pub fn word_begin(text: &str, caret: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = caret.min(chars.len());
    while idx > 0 && !chars[idx - 1].is_alphanumeric() {
        idx -= 1;
    }
    while idx > 0 && chars[idx - 1].is_alphanumeric() {
        idx -= 1;
    }
    idx
}

/// Offset just past the end of the word right of `caret`.
pub fn word_end(text: &str, caret: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut idx = caret.min(len);
    while idx < len && !chars[idx].is_alphanumeric() {
        idx += 1;
    }
    while idx < len && chars[idx].is_alphanumeric() {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_begin() {
        let text = "hello, world! test";

        // From the middle of "world".
        assert_eq!(word_begin(text, 10), 7);
        // From the start of "world": jumps over ", " to "hello".
        assert_eq!(word_begin(text, 7), 0);
        assert_eq!(word_begin(text, 0), 0);
        // From the end: into "test".
        assert_eq!(word_begin(text, 18), 14);
    }

    #[test]
    fn test_word_end() {
        let text = "hello, world! test";

        assert_eq!(word_end(text, 0), 5);
        assert_eq!(word_end(text, 2), 5);
        // From the end of "hello": skips ", " and crosses "world".
        assert_eq!(word_end(text, 5), 12);
        assert_eq!(word_end(text, 18), 18);
        assert_eq!(word_end(text, 999), 18);
    }

    #[test]
    fn test_word_jumps_cross_newlines() {
        let text = "one\ntwo";
        assert_eq!(word_end(text, 3), 7);
        assert_eq!(word_begin(text, 4), 0);
    }
}
