//! Widget style data and the shared-style handle.
//!
//! A style is plain data, loadable from TOML. Widgets hold a
//! [`SharedStyle`]: a reference-counted handle that is either shared across
//! several widgets or exclusively owned. Mutating through [`SharedStyle::detach`]
//! clones the underlying style when it is shared, so one widget's tweak
//! never leaks into its siblings.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid style definition: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Visual parameters of a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBoxStyle {
    /// Horizontal padding between the border and the text, in pixels.
    pub padding_x: f32,
    /// Vertical padding between the border and the text, in pixels.
    pub padding_y: f32,
    /// Caret thickness in pixels.
    pub caret_width: f32,
    /// Caret blink interval in seconds.
    pub caret_blink_interval: f32,
    /// Thickness reserved for a visible scrollbar, in pixels.
    pub scrollbar_width: f32,
    /// Horizontal margin kept between the caret and the viewport edge
    /// while scrolling, in pixels.
    pub scroll_margin: f32,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            padding_x: 12.0,
            padding_y: 8.0,
            caret_width: 1.0,
            caret_blink_interval: 0.5,
            scrollbar_width: 16.0,
            scroll_margin: 10.0,
        }
    }
}

impl TextBoxStyle {
    /// Parse a style from TOML. Missing fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(input)?)
    }
}

/// Reference-counted style handle.
///
/// Cloning the handle shares the style; [`SharedStyle::detach`] makes this
/// handle exclusive (cloning the data if needed) and hands out mutable
/// access.
#[derive(Debug, Clone, Default)]
pub struct SharedStyle(Rc<TextBoxStyle>);

impl SharedStyle {
    pub fn new(style: TextBoxStyle) -> Self {
        Self(Rc::new(style))
    }

    pub fn get(&self) -> &TextBoxStyle {
        &self.0
    }

    /// Whether other widgets currently share this style.
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.0) > 1
    }

    /// Exclusive mutable access; clones the style first when it is shared.
    pub fn detach(&mut self) -> &mut TextBoxStyle {
        Rc::make_mut(&mut self.0)
    }
}
