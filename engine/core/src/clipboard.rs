//! Clipboard Access
//!
//! A thin seam over the system clipboard so the orchestrator can be tested
//! without a display server. The production implementation goes through
//! `arboard`; tests substitute an in-memory fake.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::EffectError;

/// Writes text to a clipboard.
///
/// Implementations may block; the orchestrator always calls this from a
/// blocking-capable context.
pub trait Clipboard: Send + Sync {
    /// Write `text` to the clipboard, replacing its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::Clipboard`] when the platform clipboard
    /// rejects the write.
    fn write_text(&self, text: &str) -> Result<(), EffectError>;
}

/// The system clipboard.
///
/// A fresh platform handle is opened per write; `arboard` handles are not
/// shareable across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a system clipboard seam.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), EffectError> {
        let mut handle =
            arboard::Clipboard::new().map_err(|e| EffectError::Clipboard(e.to_string()))?;
        handle
            .set_text(text)
            .map_err(|e| EffectError::Clipboard(e.to_string()))
    }
}

/// In-memory clipboard for tests; records every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `error`.
    pub fn fail_with(&self, error: impl Into<String>) {
        *self.fail_with.lock() = Some(error.into());
    }

    /// Every text written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), EffectError> {
        if let Some(error) = self.fail_with.lock().clone() {
            return Err(EffectError::Clipboard(error));
        }
        self.writes.lock().push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("bx-home").unwrap();
        clipboard.write_text("fth-wind").unwrap();
        assert_eq!(clipboard.writes(), ["bx-home", "fth-wind"]);
    }

    #[test]
    fn memory_clipboard_can_fail() {
        let clipboard = MemoryClipboard::new();
        clipboard.fail_with("no selection owner");
        let err = clipboard.write_text("bx-home").unwrap_err();
        assert!(err.to_string().contains("no selection owner"));
        assert!(clipboard.writes().is_empty());
    }
}
