//! Typed signal registration and dispatch for the text box.
//!
//! Signals are a closed enumeration per widget type rather than a
//! stringly-typed lookup; name-based connection exists for scene loaders
//! and fails with [`SignalError::UnknownSignal`] instead of panicking.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("unknown signal name: {0:?}")]
    UnknownSignal(String),
}

/// The signals a text box can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBoxSignal {
    /// The text was changed; payload is the new full text.
    TextChanged,
    /// The selected text changed; no payload.
    SelectionChanged,
}

impl TextBoxSignal {
    pub fn name(&self) -> &'static str {
        match self {
            TextBoxSignal::TextChanged => "TextChanged",
            TextBoxSignal::SelectionChanged => "SelectionChanged",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SignalError> {
        match name {
            "TextChanged" => Ok(TextBoxSignal::TextChanged),
            "SelectionChanged" => Ok(TextBoxSignal::SelectionChanged),
            other => Err(SignalError::UnknownSignal(other.to_owned())),
        }
    }
}

/// Payload handed to signal handlers.
#[derive(Debug, Clone, Copy)]
pub enum SignalPayload<'a> {
    TextChanged(&'a str),
    SelectionChanged,
}

impl SignalPayload<'_> {
    fn kind(&self) -> TextBoxSignal {
        match self {
            SignalPayload::TextChanged(_) => TextBoxSignal::TextChanged,
            SignalPayload::SelectionChanged => TextBoxSignal::SelectionChanged,
        }
    }
}

type Handler = Box<dyn FnMut(&SignalPayload<'_>)>;

/// Registration/dispatch table for text box signals.
#[derive(Default)]
pub struct TextBoxSignals {
    handlers: Vec<(TextBoxSignal, Handler)>,
}

impl TextBoxSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one signal kind.
    pub fn connect(&mut self, signal: TextBoxSignal, handler: impl FnMut(&SignalPayload<'_>) + 'static) {
        log::debug!("connecting handler for signal {:?}", signal.name());
        self.handlers.push((signal, Box::new(handler)));
    }

    /// Register a handler by signal name; unknown names are rejected.
    pub fn connect_by_name(
        &mut self,
        name: &str,
        handler: impl FnMut(&SignalPayload<'_>) + 'static,
    ) -> Result<(), SignalError> {
        let signal = TextBoxSignal::from_name(name)?;
        self.connect(signal, handler);
        Ok(())
    }

    /// Dispatch a payload to every handler registered for its kind.
    pub fn emit(&mut self, payload: SignalPayload<'_>) {
        let kind = payload.kind();
        for (signal, handler) in &mut self.handlers {
            if *signal == kind {
                handler(&payload);
            }
        }
    }
}

impl core::fmt::Debug for TextBoxSignals {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextBoxSignals")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
