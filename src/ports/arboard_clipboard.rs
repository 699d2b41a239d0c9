use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardSink;
use crate::global_constants::LOG_TAG_CLIPBOARD;

/// System clipboard. The arboard handle is opened on first use and kept,
/// since on Linux the copied text is only served while it is alive.
pub struct ArboardClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn initialize() -> Self {
        log::debug!("{} initializing system clipboard", LOG_TAG_CLIPBOARD);
        Self {
            clipboard: Mutex::new(None),
        }
    }
}

impl ClipboardSink for ArboardClipboard {
    fn write(&self, content: &str) -> Result<()> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| anyhow::anyhow!("Clipboard lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().context("Failed to open clipboard")?);
        }

        if let Some(clipboard) = guard.as_mut() {
            clipboard
                .set_text(content)
                .context("Failed to write text to clipboard")?;
        }

        log::info!(
            "{} wrote {} characters",
            LOG_TAG_CLIPBOARD,
            content.chars().count()
        );
        Ok(())
    }
}
