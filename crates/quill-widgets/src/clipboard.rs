//! Clipboard collaborator consumed by the text box.

/// Text clipboard abstraction.
///
/// `get_text` returns `None` when the clipboard is empty, holds non-text
/// data, or the backend is unavailable.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_owned());
    }
}

/// System clipboard backed by `arboard`.
///
/// Backend initialization can fail on headless systems; in that case the
/// clipboard degrades to a no-op and the failure is logged once.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                log::warn!("system clipboard unavailable: {err}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.inner.as_mut()?.get_text().ok()
    }

    fn set_text(&mut self, text: &str) {
        if let Some(clipboard) = self.inner.as_mut() {
            if let Err(err) = clipboard.set_text(text.to_owned()) {
                log::warn!("failed to write clipboard: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text(), None);
        clipboard.set_text("hello");
        assert_eq!(clipboard.get_text().as_deref(), Some("hello"));
    }
}
