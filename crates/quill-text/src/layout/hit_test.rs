use core::ops::Range;

use quill_core::Rect;

use crate::layout::line_index::LineTable;
use crate::layout::position::Position;
use crate::layout::wrap::CharMeasure;

/// Map a point in text-local coordinates (origin at the top-left of the
/// first line, unscrolled) to the nearest grid position.
///
/// The vertical component picks the line; the horizontal component picks
/// the nearest character boundary on it, using the midpoint of each advance
/// so a click on the right half of a glyph lands after it. Points outside
/// the text clamp to the nearest valid position.
pub fn position_at_point(
    table: &LineTable,
    text: &str,
    measure: &CharMeasure<'_>,
    x: f32,
    y: f32,
) -> Position {
    let line_height = measure.line_height();
    let line = if y <= 0.0 || line_height <= 0.0 {
        0
    } else {
        ((y / line_height) as usize).min(table.len() - 1)
    };
    Position::new(line, column_at_x(table, text, measure, line, x))
}

/// Column of the character boundary nearest to `x` on the given line.
pub fn column_at_x(
    table: &LineTable,
    text: &str,
    measure: &CharMeasure<'_>,
    line: usize,
    x: f32,
) -> usize {
    let display = table.line(line).display_text(text);
    let mut acc = 0.0f32;
    for (column, ch) in display.chars().enumerate() {
        let advance = measure.advance(ch);
        if x < acc + advance / 2.0 {
            return column;
        }
        acc += advance;
    }
    table.line(line).display_char_len()
}

/// Pixel x of the caret at a grid position (clamped to the line's display
/// length, so a caret "behind" a trailing newline renders at the line end).
pub fn caret_x(table: &LineTable, text: &str, measure: &CharMeasure<'_>, position: Position) -> f32 {
    let line = table.line(position.line);
    let display = line.display_text(text);
    let column = position.column.min(line.display_char_len());
    display
        .chars()
        .take(column)
        .map(|ch| measure.advance(ch))
        .sum()
}

/// Caret rectangle in text-local coordinates, one pixel wide; widgets
/// adjust the width from their style.
pub fn caret_rect(
    table: &LineTable,
    text: &str,
    measure: &CharMeasure<'_>,
    position: Position,
) -> Rect {
    let line_height = measure.line_height();
    let line = position.line.min(table.len() - 1);
    Rect::new(
        caret_x(table, text, measure, Position::new(line, position.column)),
        line as f32 * line_height,
        1.0,
        line_height,
    )
}

/// One rectangle per wrapped line covered by the (ordered, absolute)
/// selection range, in text-local coordinates. Empty ranges produce no
/// rectangles; zero-width segments (a selected newline) are skipped.
pub fn selection_rects(
    table: &LineTable,
    text: &str,
    measure: &CharMeasure<'_>,
    range: Range<usize>,
) -> Vec<Rect> {
    let mut rects = Vec::new();
    if range.start >= range.end {
        return rects;
    }

    let line_height = measure.line_height();
    let start = table.position_of_char(range.start);
    let end = table.position_of_char(range.end);

    for line in start.line..=end.line.min(table.len() - 1) {
        let first_col = if line == start.line { start.column } else { 0 };
        let last_col = if line == end.line {
            end.column
        } else {
            table.line(line).display_char_len()
        };

        let x0 = caret_x(table, text, measure, Position::new(line, first_col));
        let x1 = caret_x(table, text, measure, Position::new(line, last_col));
        if x1 > x0 {
            rects.push(Rect::new(x0, line as f32 * line_height, x1 - x0, line_height));
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::wrap::WrapMode;
    use quill_core::FixedAdvance;

    fn make_measure(metrics: &FixedAdvance) -> CharMeasure<'_> {
        CharMeasure::new(metrics, 20.0, None)
    }

    fn make_table(text: &str, width: f32, measure: &CharMeasure<'_>) -> LineTable {
        LineTable::build(text, width, WrapMode::Word, measure)
    }

    #[test]
    fn test_position_at_point_midpoint_rounding() {
        let text = "hello world foo";
        let metrics = FixedAdvance::new(0.5, 1.0);
        let measure = make_measure(&metrics);
        let table = make_table(text, 100.0, &measure);
        // 10 px per char, 20 px lines. 4 px is inside the first char.
        assert_eq!(position_at_point(&table, text, &measure, 4.0, 5.0), Position::new(0, 0));
        // 6 px is past the midpoint of the first char.
        assert_eq!(position_at_point(&table, text, &measure, 6.0, 5.0), Position::new(0, 1));
        // Second wrapped line.
        assert_eq!(position_at_point(&table, text, &measure, 0.0, 25.0), Position::new(1, 0));
        // Far right clamps to the line end.
        assert_eq!(
            position_at_point(&table, text, &measure, 9999.0, 25.0),
            Position::new(1, 9)
        );
        // Below the text clamps to the last line.
        assert_eq!(
            position_at_point(&table, text, &measure, 0.0, 9999.0),
            Position::new(1, 0)
        );
    }

    #[test]
    fn test_caret_x() {
        let text = "hello world foo";
        let metrics = FixedAdvance::new(0.5, 1.0);
        let measure = make_measure(&metrics);
        let table = make_table(text, 100.0, &measure);
        assert_eq!(caret_x(&table, text, &measure, Position::new(0, 0)), 0.0);
        assert_eq!(caret_x(&table, text, &measure, Position::new(0, 5)), 50.0);
        assert_eq!(caret_x(&table, text, &measure, Position::new(1, 3)), 30.0);
    }

    #[test]
    fn test_selection_rects_span_lines() {
        let text = "hello world foo";
        let metrics = FixedAdvance::new(0.5, 1.0);
        let measure = make_measure(&metrics);
        let table = make_table(text, 100.0, &measure);
        // Select "llo wor": chars 2..9 spanning the soft break at 6.
        let rects = selection_rects(&table, text, &measure, 2..9);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(20.0, 0.0, 40.0, 20.0));
        assert_eq!(rects[1], Rect::new(0.0, 20.0, 30.0, 20.0));
    }

    #[test]
    fn test_selection_rects_empty_range() {
        let text = "hello";
        let metrics = FixedAdvance::new(0.5, 1.0);
        let measure = make_measure(&metrics);
        let table = make_table(text, 1000.0, &measure);
        assert!(selection_rects(&table, text, &measure, 3..3).is_empty());
    }
}
