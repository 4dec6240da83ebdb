use thiserror::Error;

#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Thin wrapper over the system clipboard.
pub struct ClipboardService;

impl ClipboardService {
    /// Places `text` on the clipboard. Fails on headless sessions.
    pub fn copy(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
