//! Multi-line text input widget with word wrap, selection, scrollbars and
//! typed change signals.
//!
//! Every mutation funnels through the same pipeline: mutate the buffer,
//! re-wrap, reconcile the selection by absolute character offset, recompute
//! the viewport, then emit `TextChanged`/`SelectionChanged` only when
//! something actually changed. The whole widget is synchronous and
//! single-threaded; there is no re-entrancy.

mod input;
mod viewport;

pub use viewport::Viewport;

use core::ops::Range;
use std::rc::Rc;
use std::time::Duration;

use quill_core::{Point, Rect, TextMetrics};
use quill_text::buffer::TextBuffer;
use quill_text::layout::hit_test;
use quill_text::layout::wrap::CharMeasure;
use quill_text::{LineTable, SelectionModel, WrappedLine};

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::event::{EventResult, KeyEvent, MouseEvent, MouseMoveEvent};
use crate::scrollbar::{Scrollbar, ScrollbarPolicy};
use crate::signal::{SignalError, SignalPayload, TextBoxSignal, TextBoxSignals};
use crate::style::SharedStyle;
use crate::widget::{Drawable, FocusableInput, Resizable};

/// Minimum accepted text size in pixels.
const MIN_TEXT_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    DraggingSelection,
}

#[derive(Debug, Clone, Copy)]
struct LastPress {
    position: Point,
    timestamp: Duration,
}

pub struct TextBox {
    bounds: Rect,
    buffer: TextBuffer,
    table: LineTable,
    selection: SelectionModel,
    viewport: Viewport,
    default_text: String,
    text_px: f32,
    metrics: Rc<dyn TextMetrics>,
    monospaced_optimization: bool,
    read_only: bool,
    focused: bool,
    caret_visible: bool,
    blink_timer: f32,
    style: SharedStyle,
    vertical: Scrollbar,
    horizontal: Scrollbar,
    signals: TextBoxSignals,
    clipboard: Box<dyn Clipboard>,
    drag: DragState,
    last_press: Option<LastPress>,
    /// Pixel x kept stable across consecutive vertical caret moves.
    sticky_x: Option<f32>,
}

impl TextBox {
    pub fn new(metrics: Rc<dyn TextMetrics>) -> Self {
        let mut text_box = Self {
            bounds: Rect::new(0.0, 0.0, 360.0, 200.0),
            buffer: TextBuffer::new(),
            table: LineTable::new(vec![WrappedLine {
                byte_range: 0..0,
                char_len: 0,
                hard_break: false,
                width: 0.0,
            }]),
            selection: SelectionModel::new(),
            viewport: Viewport::default(),
            default_text: String::new(),
            text_px: 16.0,
            metrics,
            monospaced_optimization: false,
            read_only: false,
            focused: false,
            caret_visible: true,
            blink_timer: 0.0,
            style: SharedStyle::default(),
            vertical: Scrollbar::new(ScrollbarPolicy::Automatic),
            horizontal: Scrollbar::new(ScrollbarPolicy::Never),
            signals: TextBoxSignals::new(),
            clipboard: Box::new(MemoryClipboard::new()),
            drag: DragState::Idle,
            last_press: None,
            sticky_x: None,
        };
        text_box.rearrange(false);
        text_box
    }

    // ------------------------------------------------------------------
    // Text

    /// Replace the whole text. The selection collapses to the text origin.
    pub fn set_text(&mut self, text: &str) {
        let selection_before = self.selection.to_abs(&self.table);
        let changed = self.buffer.set_text(text);
        self.sticky_x = None;
        self.rearrange(false);
        self.scroll_to_caret();
        self.reset_blink();
        if changed {
            self.emit_text_changed();
        }
        self.emit_selection_changed_if(selection_before);
    }

    /// Append text at the end. The selection keeps its character offsets.
    pub fn add_text(&mut self, text: &str) {
        if self.buffer.append(text) == 0 {
            return;
        }
        self.rearrange(true);
        self.emit_text_changed();
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Text shown by renderers while the box is empty.
    pub fn set_default_text(&mut self, text: &str) {
        self.default_text = text.to_owned();
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    // ------------------------------------------------------------------
    // Selection and caret

    /// Select a character range. `start` becomes the anchor and `end` the
    /// caret, so `start > end` yields a backward selection, not an error.
    /// Indices clamp to the text length.
    pub fn set_selected_text(&mut self, start: usize, end: usize) {
        let selection_before = self.selection.to_abs(&self.table);
        self.selection.set_from_abs(&self.table, start, end);
        self.sticky_x = None;
        self.scroll_to_caret();
        self.reset_blink();
        self.emit_selection_changed_if(selection_before);
    }

    pub fn selected_text(&self) -> &str {
        self.selection.selected_text(self.buffer.text(), &self.table)
    }

    /// Characters before the anchor end of the selection. May be larger
    /// than [`TextBox::selection_end`] for backward selections.
    pub fn selection_start(&self) -> usize {
        self.selection.to_abs(&self.table).0
    }

    /// Characters before the caret end of the selection.
    pub fn selection_end(&self) -> usize {
        self.selection.to_abs(&self.table).1
    }

    /// Collapse the selection and place the caret after `char_index`
    /// characters (clamped to the text length).
    pub fn set_caret_position(&mut self, char_index: usize) {
        self.set_selected_text(char_index, char_index);
    }

    /// Characters before the caret; equals [`TextBox::selection_end`].
    pub fn caret_position(&self) -> usize {
        self.selection_end()
    }

    // ------------------------------------------------------------------
    // Limits and modes

    /// Cap the text length in characters; 0 removes the limit. Text beyond
    /// a new, smaller limit is discarded.
    pub fn set_maximum_characters(&mut self, max_chars: usize) {
        let selection_before = self.selection.to_abs(&self.table);
        if self.buffer.set_max_chars(max_chars) {
            self.rearrange(true);
            self.emit_text_changed();
            self.emit_selection_changed_if(selection_before);
        }
    }

    pub fn maximum_characters(&self) -> usize {
        self.buffer.max_chars()
    }

    /// A read-only box refuses edits but still supports navigation,
    /// selection, copy and select-all.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Skip per-character oracle queries and use one fixed advance for
    /// every character. Only valid for truly monospaced fonts; this is
    /// asserted by the caller, never verified.
    pub fn enable_monospaced_font_optimization(&mut self, enable: bool) {
        self.monospaced_optimization = enable;
        self.rearrange(true);
    }

    pub fn set_text_size(&mut self, px: f32) {
        self.text_px = px.max(MIN_TEXT_SIZE);
        self.rearrange(true);
        self.scroll_to_caret();
    }

    pub fn text_size(&self) -> f32 {
        self.text_px
    }

    // ------------------------------------------------------------------
    // Scrollbars

    pub fn set_vertical_scrollbar_policy(&mut self, policy: ScrollbarPolicy) {
        self.vertical.set_policy(policy);
        self.rearrange(true);
    }

    pub fn vertical_scrollbar_policy(&self) -> ScrollbarPolicy {
        self.vertical.policy()
    }

    /// Horizontal `Always`/`Automatic` disables word wrap: lines break
    /// only at explicit newlines and overflow scrolls instead.
    pub fn set_horizontal_scrollbar_policy(&mut self, policy: ScrollbarPolicy) {
        self.horizontal.set_policy(policy);
        self.rearrange(true);
    }

    pub fn horizontal_scrollbar_policy(&self) -> ScrollbarPolicy {
        self.horizontal.policy()
    }

    /// Scroll vertically; the only path that moves the rendered window
    /// without caret movement.
    pub fn set_vertical_scrollbar_value(&mut self, value: f32) {
        if self.vertical.set_value(value) {
            self.recalculate_visible_lines();
        }
    }

    pub fn vertical_scrollbar_value(&self) -> f32 {
        self.vertical.value()
    }

    pub fn set_horizontal_scrollbar_value(&mut self, value: f32) {
        if self.horizontal.set_value(value) {
            self.recalculate_visible_lines();
        }
    }

    pub fn horizontal_scrollbar_value(&self) -> f32 {
        self.horizontal.value()
    }

    pub fn vertical_scrollbar(&self) -> &Scrollbar {
        &self.vertical
    }

    pub fn horizontal_scrollbar(&self) -> &Scrollbar {
        &self.horizontal
    }

    // ------------------------------------------------------------------
    // Geometry and render output

    /// Number of wrapped lines the text occupies; at least 1.
    pub fn lines_count(&self) -> usize {
        self.table.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
        self.sync_scroll_geometry();
    }

    /// The display texts of the currently visible wrapped lines, in order.
    pub fn visible_lines(&self) -> Vec<&str> {
        let start = self.viewport.top_line.min(self.table.len() - 1);
        let end = (self.viewport.top_line + self.viewport.visible_lines).min(self.table.len());
        self.table.lines()[start..end]
            .iter()
            .map(|line| line.display_text(self.buffer.text()))
            .collect()
    }

    /// Selection highlight rectangles for the visible window, in the
    /// parent's coordinate space.
    pub fn selection_rects(&self) -> Vec<Rect> {
        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        let line_height = self.line_height();
        let inner = self.inner_rect();
        let window_top = self.viewport.top_line as f32 * line_height;
        let window_bottom = window_top + self.viewport.visible_lines as f32 * line_height;

        hit_test::selection_rects(
            &self.table,
            self.buffer.text(),
            &measure,
            self.selection.range_abs(&self.table),
        )
        .into_iter()
        .filter(|rect| rect.y >= window_top && rect.y < window_bottom)
        .map(|rect| {
            Rect::new(
                inner.x + rect.x - self.viewport.horizontal_offset,
                inner.y + rect.y - window_top,
                rect.w,
                rect.h,
            )
        })
        .collect()
    }

    /// Caret rectangle in the parent's coordinate space, or `None` while
    /// the caret line is scrolled out of view. Renderers should draw it
    /// only while [`TextBox::is_caret_visible`] holds.
    pub fn caret_rect(&self) -> Option<Rect> {
        let caret = self.selection.caret();
        let top = self.viewport.top_line;
        if caret.line < top || caret.line >= top + self.viewport.visible_lines {
            return None;
        }

        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        let rect = hit_test::caret_rect(&self.table, self.buffer.text(), &measure, caret);
        let inner = self.inner_rect();
        let line_height = self.line_height();
        Some(Rect::new(
            inner.x + rect.x - self.viewport.horizontal_offset,
            inner.y + rect.y - top as f32 * line_height,
            self.style.get().caret_width,
            rect.h,
        ))
    }

    /// Whether the (blinking) caret is in its visible phase.
    pub fn is_caret_visible(&self) -> bool {
        self.focused && self.caret_visible
    }

    /// Advance the caret blink animation; `dt` is in seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.focused {
            return;
        }
        let interval = self.style.get().caret_blink_interval;
        if interval <= 0.0 {
            return;
        }
        self.blink_timer += dt;
        while self.blink_timer >= interval {
            self.blink_timer -= interval;
            self.caret_visible = !self.caret_visible;
        }
    }

    // ------------------------------------------------------------------
    // Collaborators

    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) {
        self.clipboard = clipboard;
    }

    /// Share this widget's style handle with another widget.
    pub fn shared_style(&self) -> SharedStyle {
        self.style.clone()
    }

    /// Install a (possibly shared) style and re-layout.
    pub fn set_style(&mut self, style: SharedStyle) {
        self.style = style;
        self.rearrange(true);
    }

    /// Exclusive mutable access to this widget's style; detaches it from
    /// any sharing first. Call [`TextBox::set_style`] or any re-layouting
    /// operation afterwards if geometry-affecting fields changed.
    pub fn style_mut(&mut self) -> &mut crate::style::TextBoxStyle {
        self.style.detach()
    }

    pub fn style(&self) -> &crate::style::TextBoxStyle {
        self.style.get()
    }

    // ------------------------------------------------------------------
    // Signals

    pub fn on_text_changed(&mut self, mut handler: impl FnMut(&str) + 'static) {
        self.signals
            .connect(TextBoxSignal::TextChanged, move |payload| {
                if let SignalPayload::TextChanged(text) = payload {
                    handler(text);
                }
            });
    }

    pub fn on_selection_changed(&mut self, mut handler: impl FnMut() + 'static) {
        self.signals
            .connect(TextBoxSignal::SelectionChanged, move |_| handler());
    }

    /// Name-based connection for scene loaders; fails with
    /// [`SignalError::UnknownSignal`] for names outside the closed set.
    pub fn connect(
        &mut self,
        name: &str,
        handler: impl FnMut(&SignalPayload<'_>) + 'static,
    ) -> Result<(), SignalError> {
        self.signals.connect_by_name(name, handler)
    }

    // ------------------------------------------------------------------
    // Edit pipeline internals

    fn measure_with<'a>(&self, metrics: &'a Rc<dyn TextMetrics>) -> CharMeasure<'a> {
        CharMeasure::new(metrics.as_ref(), self.text_px, self.fixed_advance())
    }

    fn fixed_advance(&self) -> Option<f32> {
        if !self.monospaced_optimization {
            return None;
        }
        Some(self.metrics.advance('0', self.text_px).unwrap_or(0.0))
    }

    fn rebuild_table(&mut self) {
        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        self.table = LineTable::build(
            self.buffer.text(),
            self.wrap_width(),
            self.wrap_mode(),
            &measure,
        );
    }

    /// Re-wrap and re-derive everything after a text/geometry change.
    fn rearrange(&mut self, keep_selection: bool) {
        let selection = self.selection.to_abs(&self.table);
        self.rebuild_table();
        if keep_selection {
            self.selection
                .set_from_abs(&self.table, selection.0, selection.1);
        } else {
            self.selection = SelectionModel::new();
        }
        self.sync_scroll_geometry();
    }

    /// The single funnel for every text mutation.
    fn replace_range(&mut self, range: Range<usize>, insert: &str) -> bool {
        let selection_before = self.selection.to_abs(&self.table);
        let start = range.start.min(self.buffer.char_len());
        let (inserted, changed) = self.buffer.replace_char_range(range, insert);
        if !changed {
            return false;
        }
        self.rebuild_table();
        let caret = start + inserted;
        self.selection.set_from_abs(&self.table, caret, caret);
        self.sync_scroll_geometry();
        self.scroll_to_caret();
        self.reset_blink();
        self.emit_text_changed();
        self.emit_selection_changed_if(selection_before);
        true
    }

    /// Replace the active selection (or insert at the caret) with `insert`.
    fn replace_selection(&mut self, insert: &str) -> bool {
        let range = self.selection.range_abs(&self.table);
        self.replace_range(range, insert)
    }

    fn reset_blink(&mut self) {
        self.blink_timer = 0.0;
        self.caret_visible = true;
    }

    fn emit_text_changed(&mut self) {
        let text = self.buffer.text().to_owned();
        self.signals.emit(SignalPayload::TextChanged(&text));
    }

    fn emit_selection_changed_if(&mut self, before: (usize, usize)) {
        if self.selection.to_abs(&self.table) != before {
            self.signals.emit(SignalPayload::SelectionChanged);
        }
    }
}

impl Drawable for TextBox {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Resizable for TextBox {
    fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
        self.rearrange(true);
    }
}

impl FocusableInput for TextBox {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.reset_blink();
        } else {
            self.drag = DragState::Idle;
        }
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_mouse_press(&mut self, event: MouseEvent) -> EventResult {
        self.mouse_pressed(event)
    }

    fn handle_mouse_move(&mut self, event: MouseMoveEvent) -> EventResult {
        self.mouse_moved(event)
    }

    fn handle_mouse_release(&mut self, event: MouseEvent) -> EventResult {
        self.mouse_released(event)
    }

    fn handle_mouse_wheel(&mut self, delta: f32, x: f32, y: f32) -> EventResult {
        self.mouse_wheel(delta, x, y)
    }

    fn handle_key(&mut self, event: KeyEvent) -> EventResult {
        self.key_pressed(event)
    }

    fn handle_char(&mut self, ch: char) -> EventResult {
        self.text_entered(ch)
    }
}
