use crate::ClipboardError;

/// Scoped write access to the system clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via `arboard`. A handle is opened per write; a missing
/// display server surfaces as [`ClipboardError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArboardClipboard;

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}
