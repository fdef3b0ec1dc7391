//! Viewport management: which wrapped lines are on screen, and how the
//! scrollbars track content size.
//!
//! Scrollbar ranges are pixel-based: the vertical maximum is the full text
//! height, the horizontal maximum the widest line. The viewport itself is
//! derived state, recomputed after every re-wrap and every scrollbar value
//! change.

use std::rc::Rc;

use quill_core::Rect;
use quill_text::layout::hit_test;
use quill_text::layout::wrap::WrapMode;

use super::TextBox;
use crate::scrollbar::ScrollbarPolicy;

/// The visible window over the wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Index of the first visible wrapped line.
    pub top_line: usize,
    /// How many lines fit in the inner height; a pure function of line
    /// height and inner height, always at least 1.
    pub visible_lines: usize,
    /// Horizontal scroll offset in pixels.
    pub horizontal_offset: f32,
}

impl TextBox {
    /// Content area: bounds minus padding and any visible scrollbars.
    pub(crate) fn inner_rect(&self) -> Rect {
        let style = self.style.get();
        let mut inner = self.bounds.inset(style.padding_x, style.padding_y);
        if self.vertical.is_shown() {
            inner.w = (inner.w - style.scrollbar_width).max(0.0);
        }
        if self.horizontal.is_shown() {
            inner.h = (inner.h - style.scrollbar_width).max(0.0);
        }
        inner
    }

    /// Word wrap applies only while the horizontal scrollbar is disabled;
    /// otherwise lines break at explicit newlines and overflow scrolls.
    pub(crate) fn wrap_mode(&self) -> WrapMode {
        if self.horizontal.policy() == ScrollbarPolicy::Never {
            WrapMode::Word
        } else {
            WrapMode::NoWrap
        }
    }

    pub(crate) fn wrap_width(&self) -> f32 {
        self.inner_rect().w
    }

    pub(crate) fn line_height(&self) -> f32 {
        self.metrics.line_height(self.text_px).max(1.0)
    }

    /// Push content extents into the scrollbars, settle their visibility,
    /// lay them out along the widget edges and re-derive the viewport.
    pub(crate) fn sync_scroll_geometry(&mut self) {
        let line_height = self.line_height();
        self.vertical
            .set_maximum(self.table.len() as f32 * line_height);
        self.horizontal.set_maximum(self.table.max_line_width());

        // Two passes: one bar becoming visible shrinks the other's
        // viewport, which can in turn make the other bar necessary.
        for _ in 0..2 {
            let inner = self.inner_rect();
            self.vertical.set_viewport_size(inner.h);
            self.horizontal.set_viewport_size(inner.w);
        }

        let bounds = self.bounds;
        let thickness = self.style.get().scrollbar_width;
        let bottom_inset = if self.horizontal.is_shown() { thickness } else { 0.0 };
        let right_inset = if self.vertical.is_shown() { thickness } else { 0.0 };
        self.vertical.set_bounds(Rect::new(
            bounds.x + bounds.w - thickness,
            bounds.y,
            thickness,
            (bounds.h - bottom_inset).max(0.0),
        ));
        self.horizontal.set_bounds(Rect::new(
            bounds.x,
            bounds.y + bounds.h - thickness,
            (bounds.w - right_inset).max(0.0),
            thickness,
        ));

        self.recalculate_visible_lines();
    }

    /// Derive the viewport from the scrollbar values and inner size.
    pub(crate) fn recalculate_visible_lines(&mut self) {
        let line_height = self.line_height();
        let inner = self.inner_rect();
        let visible_lines = ((inner.h / line_height) as usize).max(1);

        let total = self.table.len();
        let mut top_line = (self.vertical.value() / line_height) as usize;
        top_line = if total > visible_lines {
            top_line.min(total - visible_lines)
        } else {
            0
        };

        self.viewport = Viewport {
            top_line,
            visible_lines,
            horizontal_offset: self.horizontal.value(),
        };
    }

    /// Bring the caret into view, vertically by whole lines and
    /// horizontally with a small margin so the caret never sits flush
    /// against the viewport edge.
    pub(crate) fn scroll_to_caret(&mut self) {
        let line_height = self.line_height();
        let caret = self.selection.caret();
        let Viewport {
            top_line,
            visible_lines,
            ..
        } = self.viewport;

        if caret.line < top_line {
            self.vertical.set_value(caret.line as f32 * line_height);
        } else if caret.line >= top_line + visible_lines {
            self.vertical
                .set_value((caret.line + 1 - visible_lines) as f32 * line_height);
        }

        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        let caret_px = hit_test::caret_x(&self.table, self.buffer.text(), &measure, caret);
        let inner_width = self.inner_rect().w;
        let margin = self.style.get().scroll_margin;
        let offset = self.horizontal.value();
        if caret_px < offset + margin {
            self.horizontal.set_value((caret_px - margin).max(0.0));
        } else if caret_px > offset + inner_width - margin {
            self.horizontal.set_value(caret_px - inner_width + margin);
        }

        self.recalculate_visible_lines();
    }
}
