use core::ops::Range;

use crate::layout::boundaries::word_runs;
use crate::layout::line_index::LineTable;
use crate::layout::position::Position;

/// Caret and selection state over the wrapped line grid.
///
/// The anchor is fixed where a selection started; the caret is the live
/// end. The anchor may sit after the caret (backward selection), so
/// consumers must order the two themselves via [`SelectionModel::range_abs`].
/// Both ends are grid positions and must be re-validated against a fresh
/// [`LineTable`] after every re-wrap (see [`SelectionModel::set_from_abs`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionModel {
    anchor: Position,
    caret: Position,
}

impl SelectionModel {
    /// Collapsed selection at the text origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn caret(&self) -> Position {
        self.caret
    }

    /// No text is selected when both ends coincide.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.caret
    }

    /// Collapse the selection onto the caret.
    pub fn clear(&mut self) {
        self.anchor = self.caret;
    }

    /// Collapse both ends onto one position.
    pub fn collapse_to(&mut self, position: Position) {
        self.anchor = position;
        self.caret = position;
    }

    /// Move the caret. With `extend` the anchor stays put, permitting
    /// backward selections; without it the selection collapses to the new
    /// caret.
    pub fn move_caret(&mut self, position: Position, extend: bool) {
        self.caret = position;
        if !extend {
            self.anchor = position;
        }
    }

    /// Absolute character offsets of `(anchor, caret)`.
    pub fn to_abs(&self, table: &LineTable) -> (usize, usize) {
        (
            table.char_of_position(self.anchor),
            table.char_of_position(self.caret),
        )
    }

    /// Re-resolve both ends from absolute character offsets against a
    /// (possibly fresh) line table, clamping into bounds. This is the
    /// re-wrap reconciliation step: offsets survive, grid coordinates are
    /// recomputed.
    pub fn set_from_abs(&mut self, table: &LineTable, anchor: usize, caret: usize) {
        self.anchor = table.position_of_char(anchor);
        self.caret = table.position_of_char(caret);
    }

    /// The selection as an ordered absolute char range (`start <= end`).
    pub fn range_abs(&self, table: &LineTable) -> Range<usize> {
        let (anchor, caret) = self.to_abs(table);
        anchor.min(caret)..anchor.max(caret)
    }

    /// Select the whole text.
    pub fn select_all(&mut self, table: &LineTable) {
        self.anchor = Position::ZERO;
        self.caret = table.position_of_char(table.total_chars());
    }

    /// Expand the selection to the word run containing the given absolute
    /// character offset (double-click semantics).
    ///
    /// A position over an alphanumeric run selects that run; anything else
    /// selects the surrounding run of non-alphanumeric characters.
    pub fn select_word(&mut self, char_offset: usize, text: &str, table: &LineTable) {
        let runs = word_runs(text);
        let char_offset = char_offset.min(table.total_chars());

        let run = runs
            .iter()
            .find(|run| run.char_range.contains(&char_offset))
            .or_else(|| runs.last());

        if let Some(run) = run {
            self.anchor = table.position_of_char(run.char_range.start);
            self.caret = table.position_of_char(run.char_range.end);
        } else {
            self.collapse_to(Position::ZERO);
        }
    }

    /// The selected slice of `text`.
    pub fn selected_text<'a>(&self, text: &'a str, table: &LineTable) -> &'a str {
        let range = self.range_abs(table);
        &text[table.byte_of_char(text, range.start)..table.byte_of_char(text, range.end)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::wrap::{CharMeasure, WrapMode};
    use quill_core::FixedAdvance;

    fn table(text: &str, width: f32) -> LineTable {
        let metrics = FixedAdvance::new(0.5, 1.0);
        let measure = CharMeasure::new(&metrics, 20.0, None);
        LineTable::build(text, width, WrapMode::Word, &measure)
    }

    #[test]
    fn test_move_caret_collapse_and_extend() {
        let mut sel = SelectionModel::new();
        sel.move_caret(Position::new(0, 3), false);
        assert!(sel.is_collapsed());
        assert_eq!(sel.anchor(), Position::new(0, 3));

        sel.move_caret(Position::new(1, 2), true);
        assert!(!sel.is_collapsed());
        assert_eq!(sel.anchor(), Position::new(0, 3));
        assert_eq!(sel.caret(), Position::new(1, 2));
    }

    #[test]
    fn test_backward_selection_orders_range() {
        let text = "hello world foo";
        let t = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        sel.set_from_abs(&t, 10, 3);
        assert_eq!(sel.range_abs(&t), 3..10);
        assert_eq!(sel.selected_text(text, &t), "lo worl");
    }

    #[test]
    fn test_select_all() {
        let text = "hello world foo";
        let t = table(text, 100.0);
        let mut sel = SelectionModel::new();
        sel.select_all(&t);
        assert_eq!(sel.range_abs(&t), 0..15);
        assert_eq!(sel.selected_text(text, &t), text);
    }

    #[test]
    fn test_select_word_on_word() {
        let text = "foo bar";
        let t = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        sel.select_word(5, text, &t);
        assert_eq!(sel.range_abs(&t), 4..7);
        assert_eq!(sel.selected_text(text, &t), "bar");
    }

    #[test]
    fn test_select_word_on_whitespace() {
        let text = "a,  b";
        let t = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        sel.select_word(2, text, &t);
        assert_eq!(sel.range_abs(&t), 1..4);
    }

    #[test]
    fn test_select_word_at_end() {
        let text = "foo bar";
        let t = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        sel.select_word(7, text, &t);
        assert_eq!(sel.range_abs(&t), 4..7);
    }

    #[test]
    fn test_rewrap_reconciliation_preserves_offsets() {
        let text = "hello world foo";
        let wide = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        // Backward selection: anchor 10, caret 3.
        sel.set_from_abs(&wide, 10, 3);

        let narrow = table(text, 100.0);
        let (anchor, caret) = sel.to_abs(&wide);
        sel.set_from_abs(&narrow, anchor, caret);

        assert_eq!(sel.to_abs(&narrow), (10, 3));
        // Grid coordinates changed: offset 10 now sits on line 1.
        assert_eq!(sel.anchor().line, 1);
        assert_eq!(sel.caret().line, 0);
    }

    #[test]
    fn test_clamped_reconciliation() {
        let text = "short";
        let t = table(text, 1000.0);
        let mut sel = SelectionModel::new();
        sel.set_from_abs(&t, 9999, 9999);
        assert_eq!(sel.to_abs(&t), (5, 5));
        assert!(sel.is_collapsed());
    }
}
