use std::collections::HashMap;

/// Width-measurement oracle consumed by the line wrapper and hit tester.
///
/// Implementations convert a code point and a font size into an advance
/// width in pixels. A font backend that cannot measure a character returns
/// `None`; callers fall back to a zero-width assumption rather than
/// aborting.
pub trait TextMetrics {
    /// Advance width of `ch` at `px` pixels, or `None` when the backend has
    /// no metrics for it.
    fn advance(&self, ch: char, px: f32) -> Option<f32>;

    /// Height of one text line at `px` pixels.
    fn line_height(&self, px: f32) -> f32;
}

/// Fixed-advance metrics for monospaced fonts and test fixtures.
///
/// Advance and line height are expressed as multiples of the font size, so
/// `FixedAdvance::new(0.5, 1.0)` at 20 px yields a 10 px advance and a
/// 20 px line height.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    advance_em: f32,
    line_height_em: f32,
}

impl FixedAdvance {
    pub fn new(advance_em: f32, line_height_em: f32) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }
}

impl TextMetrics for FixedAdvance {
    fn advance(&self, _ch: char, px: f32) -> Option<f32> {
        Some(self.advance_em * px)
    }

    fn line_height(&self, px: f32) -> f32 {
        self.line_height_em * px
    }
}

/// Table-driven metrics with per-character advances.
///
/// Characters absent from the table report `None`, which exercises the
/// zero-width fallback path in the wrapper. Mainly a test fixture, but also
/// usable as a cache in front of a real font backend.
#[derive(Clone, Debug)]
pub struct AdvanceTable {
    advances_em: HashMap<char, f32>,
    line_height_em: f32,
}

impl AdvanceTable {
    pub fn new(line_height_em: f32) -> Self {
        Self {
            advances_em: HashMap::new(),
            line_height_em,
        }
    }

    /// Build a table from `(char, advance-em)` pairs.
    pub fn from_pairs(line_height_em: f32, pairs: impl IntoIterator<Item = (char, f32)>) -> Self {
        Self {
            advances_em: pairs.into_iter().collect(),
            line_height_em,
        }
    }

    /// Insert or replace the advance for a character.
    pub fn set(&mut self, ch: char, advance_em: f32) {
        self.advances_em.insert(ch, advance_em);
    }
}

impl TextMetrics for AdvanceTable {
    fn advance(&self, ch: char, px: f32) -> Option<f32> {
        self.advances_em.get(&ch).map(|em| em * px)
    }

    fn line_height(&self, px: f32) -> f32 {
        self.line_height_em * px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_scales_with_size() {
        let m = FixedAdvance::new(0.5, 1.2);
        assert_eq!(m.advance('a', 20.0), Some(10.0));
        assert_eq!(m.advance('\u{4e16}', 20.0), Some(10.0));
        assert_eq!(m.line_height(20.0), 24.0);
    }

    #[test]
    fn test_advance_table_lookup() {
        let m = AdvanceTable::from_pairs(1.0, [('i', 0.3), ('w', 0.8)]);
        assert_eq!(m.advance('i', 10.0), Some(3.0));
        assert_eq!(m.advance('w', 10.0), Some(8.0));
        assert_eq!(m.advance('x', 10.0), None);
        assert_eq!(m.line_height(16.0), 16.0);
    }
}
