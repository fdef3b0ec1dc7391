use quill_core::Rect;

use crate::widget::{Drawable, Resizable};

/// When a scrollbar should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarPolicy {
    /// Shown only while the content exceeds the viewport.
    #[default]
    Automatic,
    Always,
    Never,
}

/// A pixel-range scrollbar collaborator.
///
/// Holds a value in `[0, maximum - viewport_size]`, the content extent
/// (`maximum`) and the visible extent (`viewport_size`), all in pixels.
/// Mutators return whether the value actually changed so the owning widget
/// knows to recompute its viewport; the scrollbar itself never pushes
/// notifications.
#[derive(Debug, Clone, Default)]
pub struct Scrollbar {
    bounds: Rect,
    value: f32,
    maximum: f32,
    viewport_size: f32,
    policy: ScrollbarPolicy,
}

impl Scrollbar {
    pub fn new(policy: ScrollbarPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped into the scrollable range.
    /// Returns whether the value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let clamped = value.clamp(0.0, self.max_value());
        if clamped == self.value {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Scroll relative to the current value. Returns whether it moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.set_value(self.value + delta)
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Set the content extent and re-clamp the value.
    /// Returns whether the value changed as a result.
    pub fn set_maximum(&mut self, maximum: f32) -> bool {
        self.maximum = maximum.max(0.0);
        self.set_value(self.value)
    }

    pub fn viewport_size(&self) -> f32 {
        self.viewport_size
    }

    /// Set the visible extent and re-clamp the value.
    /// Returns whether the value changed as a result.
    pub fn set_viewport_size(&mut self, viewport_size: f32) -> bool {
        self.viewport_size = viewport_size.max(0.0);
        self.set_value(self.value)
    }

    pub fn policy(&self) -> ScrollbarPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ScrollbarPolicy) {
        self.policy = policy;
    }

    /// Whether the content exceeds the viewport.
    pub fn is_needed(&self) -> bool {
        self.maximum > self.viewport_size
    }

    /// Whether the scrollbar is displayed under its policy.
    pub fn is_shown(&self) -> bool {
        match self.policy {
            ScrollbarPolicy::Automatic => self.is_needed(),
            ScrollbarPolicy::Always => true,
            ScrollbarPolicy::Never => false,
        }
    }

    /// Largest permitted value.
    pub fn max_value(&self) -> f32 {
        (self.maximum - self.viewport_size).max(0.0)
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl Drawable for Scrollbar {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Resizable for Scrollbar {
    fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrollbar(maximum: f32, viewport: f32) -> Scrollbar {
        let mut sb = Scrollbar::new(ScrollbarPolicy::Automatic);
        sb.set_maximum(maximum);
        sb.set_viewport_size(viewport);
        sb
    }

    #[test]
    fn test_value_clamps_to_range() {
        let mut sb = scrollbar(100.0, 30.0);
        assert!(sb.set_value(50.0));
        assert_eq!(sb.value(), 50.0);
        assert!(sb.set_value(999.0));
        assert_eq!(sb.value(), 70.0);
        assert!(!sb.set_value(70.0));
        assert!(sb.set_value(-10.0));
        assert_eq!(sb.value(), 0.0);
    }

    #[test]
    fn test_shrinking_content_reclamps_value() {
        let mut sb = scrollbar(100.0, 30.0);
        sb.set_value(70.0);
        assert!(sb.set_maximum(50.0));
        assert_eq!(sb.value(), 20.0);
    }

    #[test]
    fn test_policy_visibility() {
        let mut sb = scrollbar(100.0, 30.0);
        assert!(sb.is_shown());
        sb.set_viewport_size(200.0);
        assert!(!sb.is_shown());

        sb.set_policy(ScrollbarPolicy::Always);
        assert!(sb.is_shown());
        sb.set_policy(ScrollbarPolicy::Never);
        sb.set_viewport_size(10.0);
        assert!(!sb.is_shown());
    }
}
