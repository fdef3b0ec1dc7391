//! Input state machine: mouse drag-selection, double-click word select,
//! keyboard navigation and editing, clipboard shortcuts.
//!
//! Mouse drags extend the selection per move but the view follows the
//! caret only on release, so dragging past the widget edge cannot set off
//! runaway scrolling. Double clicks are detected from event timestamps
//! against a fixed time-and-distance window.

use std::rc::Rc;
use std::time::Duration;

use quill_core::Point;
use quill_text::layout::{hit_test, movement};
use quill_text::Position;

use super::{DragState, LastPress, TextBox};
use crate::event::{EventResult, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseMoveEvent};

/// Two presses within this window and radius count as a double click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
const DOUBLE_CLICK_RADIUS: f32 = 4.0;

impl TextBox {
    // ------------------------------------------------------------------
    // Mouse

    pub fn mouse_pressed(&mut self, event: MouseEvent) -> EventResult {
        if event.button != MouseButton::Left || !self.bounds.contains(event.x, event.y) {
            return EventResult::Ignored;
        }

        self.focused = true;
        self.sticky_x = None;
        let selection_before = self.selection.to_abs(&self.table);
        let hit = self.hit_position(event.x, event.y);
        let position = Point::new(event.x, event.y);

        let is_double_click = self.last_press.is_some_and(|press| {
            event.timestamp.saturating_sub(press.timestamp) <= DOUBLE_CLICK_WINDOW
                && press.position.distance(position) <= DOUBLE_CLICK_RADIUS
        });

        if is_double_click {
            let offset = self.table.char_of_position(hit);
            self.selection
                .select_word(offset, self.buffer.text(), &self.table);
            // A third press starts over as a single click.
            self.last_press = None;
            self.drag = DragState::Idle;
        } else {
            self.selection.move_caret(hit, false);
            self.drag = DragState::DraggingSelection;
            self.last_press = Some(LastPress {
                position,
                timestamp: event.timestamp,
            });
        }

        self.reset_blink();
        self.emit_selection_changed_if(selection_before);
        EventResult::Handled
    }

    pub fn mouse_moved(&mut self, event: MouseMoveEvent) -> EventResult {
        if self.drag != DragState::DraggingSelection {
            return EventResult::Ignored;
        }
        let selection_before = self.selection.to_abs(&self.table);
        let hit = self.hit_position(event.x, event.y);
        self.selection.move_caret(hit, true);
        self.reset_blink();
        self.emit_selection_changed_if(selection_before);
        EventResult::Handled
    }

    pub fn mouse_released(&mut self, event: MouseEvent) -> EventResult {
        if event.button != MouseButton::Left {
            return EventResult::Ignored;
        }
        self.end_drag()
    }

    /// Mouse capture loss (pointer left the window, button released
    /// elsewhere): ends a drag exactly like a release.
    pub fn mouse_left(&mut self) -> EventResult {
        self.end_drag()
    }

    fn end_drag(&mut self) -> EventResult {
        if self.drag != DragState::DraggingSelection {
            return EventResult::Ignored;
        }
        self.drag = DragState::Idle;
        self.scroll_to_caret();
        EventResult::Handled
    }

    /// Scroll by whole lines; three per wheel notch.
    pub fn mouse_wheel(&mut self, delta: f32, x: f32, y: f32) -> EventResult {
        if !self.bounds.contains(x, y) {
            return EventResult::Ignored;
        }
        let step = -delta * self.line_height() * 3.0;
        if self.vertical.is_shown() {
            if self.vertical.scroll_by(step) {
                self.recalculate_visible_lines();
            }
            EventResult::Handled
        } else if self.horizontal.is_shown() {
            if self.horizontal.scroll_by(step) {
                self.recalculate_visible_lines();
            }
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    /// Map a point in the parent's coordinate space to a grid position.
    fn hit_position(&self, x: f32, y: f32) -> Position {
        let inner = self.inner_rect();
        let line_height = self.line_height();
        let text_x = x - inner.x + self.viewport.horizontal_offset;
        let text_y = y - inner.y + self.viewport.top_line as f32 * line_height;

        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        hit_test::position_at_point(&self.table, self.buffer.text(), &measure, text_x, text_y)
    }

    // ------------------------------------------------------------------
    // Keyboard

    /// Navigation, editing and clipboard shortcuts. In read-only mode all
    /// mutating keys are ignored; navigation, selection, copy and
    /// select-all stay active.
    pub fn key_pressed(&mut self, event: KeyEvent) -> EventResult {
        let mods = event.modifiers;
        match event.key {
            KeyCode::Char(ch) if mods.command() => match ch.to_ascii_lowercase() {
                'c' => self.copy_selection(),
                'x' => self.cut_selection(),
                'v' => self.paste(),
                'a' => {
                    self.select_all();
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            KeyCode::ArrowLeft => {
                self.sticky_x = None;
                if !mods.shift && !mods.command() && !self.selection.is_collapsed() {
                    let near = self.selection.range_abs(&self.table).start;
                    self.move_caret_abs(near, false);
                } else {
                    let caret = self.table.char_of_position(self.selection.caret());
                    let target = if mods.command() {
                        movement::word_begin(self.buffer.text(), caret)
                    } else {
                        caret.saturating_sub(1)
                    };
                    self.move_caret_abs(target, mods.shift);
                }
                EventResult::Handled
            }
            KeyCode::ArrowRight => {
                self.sticky_x = None;
                if !mods.shift && !mods.command() && !self.selection.is_collapsed() {
                    let near = self.selection.range_abs(&self.table).end;
                    self.move_caret_abs(near, false);
                } else {
                    let caret = self.table.char_of_position(self.selection.caret());
                    let target = if mods.command() {
                        movement::word_end(self.buffer.text(), caret)
                    } else {
                        caret + 1
                    };
                    self.move_caret_abs(target, mods.shift);
                }
                EventResult::Handled
            }
            KeyCode::ArrowUp => self.move_vertical(-1, mods.shift),
            KeyCode::ArrowDown => self.move_vertical(1, mods.shift),
            KeyCode::PageUp => self.move_vertical(-(self.viewport.visible_lines as isize), mods.shift),
            KeyCode::PageDown => self.move_vertical(self.viewport.visible_lines as isize, mods.shift),
            KeyCode::Home => {
                self.sticky_x = None;
                if mods.command() {
                    self.move_caret_abs(0, mods.shift);
                } else {
                    let line = self.selection.caret().line;
                    self.move_caret_grid(Position::new(line, 0), mods.shift);
                }
                EventResult::Handled
            }
            KeyCode::End => {
                self.sticky_x = None;
                if mods.command() {
                    self.move_caret_abs(self.table.total_chars(), mods.shift);
                } else {
                    let line = self.selection.caret().line;
                    let column = self.table.line(line).display_char_len();
                    self.move_caret_grid(Position::new(line, column), mods.shift);
                }
                EventResult::Handled
            }
            KeyCode::Backspace => {
                if self.read_only {
                    return EventResult::Ignored;
                }
                self.sticky_x = None;
                if !self.selection.is_collapsed() {
                    self.replace_selection("");
                } else {
                    let caret = self.table.char_of_position(self.selection.caret());
                    if caret > 0 {
                        self.replace_range(caret - 1..caret, "");
                    }
                }
                EventResult::Handled
            }
            KeyCode::Delete => {
                if self.read_only {
                    return EventResult::Ignored;
                }
                self.sticky_x = None;
                if !self.selection.is_collapsed() {
                    self.replace_selection("");
                } else {
                    let caret = self.table.char_of_position(self.selection.caret());
                    if caret < self.table.total_chars() {
                        self.replace_range(caret..caret + 1, "");
                    }
                }
                EventResult::Handled
            }
            KeyCode::Enter => self.text_entered('\n'),
            _ => EventResult::Ignored,
        }
    }

    /// Insert a typed character at the caret, replacing any active
    /// selection, subject to the character limit.
    pub fn text_entered(&mut self, ch: char) -> EventResult {
        if self.read_only {
            return EventResult::Ignored;
        }
        let ch = if ch == '\r' { '\n' } else { ch };
        if ch != '\n' && ch.is_control() {
            return EventResult::Ignored;
        }
        self.sticky_x = None;
        let mut utf8 = [0u8; 4];
        self.replace_selection(ch.encode_utf8(&mut utf8));
        EventResult::Handled
    }

    // ------------------------------------------------------------------
    // Clipboard

    pub fn copy_selection(&mut self) -> EventResult {
        let selected = self.selected_text().to_owned();
        self.clipboard.set_text(&selected);
        EventResult::Handled
    }

    pub fn cut_selection(&mut self) -> EventResult {
        if self.read_only {
            return EventResult::Ignored;
        }
        self.copy_selection();
        self.replace_selection("");
        EventResult::Handled
    }

    /// Insert clipboard text at the caret, replacing any selection. The
    /// insertion silently truncates at the character limit.
    pub fn paste(&mut self) -> EventResult {
        if self.read_only {
            return EventResult::Ignored;
        }
        if let Some(text) = self.clipboard.get_text() {
            self.sticky_x = None;
            self.replace_selection(&text);
        }
        EventResult::Handled
    }

    pub fn select_all(&mut self) {
        let selection_before = self.selection.to_abs(&self.table);
        self.selection.select_all(&self.table);
        self.reset_blink();
        self.emit_selection_changed_if(selection_before);
    }

    // ------------------------------------------------------------------
    // Caret movement helpers

    fn move_caret_abs(&mut self, offset: usize, extend: bool) {
        let position = self.table.position_of_char(offset);
        self.move_caret_grid(position, extend);
    }

    fn move_caret_grid(&mut self, position: Position, extend: bool) {
        let selection_before = self.selection.to_abs(&self.table);
        self.selection.move_caret(position, extend);
        self.scroll_to_caret();
        self.reset_blink();
        self.emit_selection_changed_if(selection_before);
    }

    /// Move the caret by wrapped lines, keeping the horizontal pixel
    /// target stable across consecutive vertical moves.
    fn move_vertical(&mut self, delta: isize, extend: bool) -> EventResult {
        let caret = self.selection.caret();
        let metrics = Rc::clone(&self.metrics);
        let measure = self.measure_with(&metrics);
        let x_target = self.sticky_x.unwrap_or_else(|| {
            hit_test::caret_x(&self.table, self.buffer.text(), &measure, caret)
        });
        self.sticky_x = Some(x_target);

        let line = caret
            .line
            .saturating_add_signed(delta)
            .min(self.table.len() - 1);
        let column = hit_test::column_at_x(&self.table, self.buffer.text(), &measure, line, x_target);
        self.move_caret_grid(Position::new(line, column), extend);
        EventResult::Handled
    }
}
