//! Side effects backed by the desktop: the system browser and clipboard.

use folio_terminal::effects::SideEffects;
use folio_types::error::{FolioError, Result};
use folio_types::theme::Theme;

/// Opens URLs with the platform handler and writes to the system clipboard.
///
/// The clipboard handle is created on first use so that hosts without a
/// display server still start.
#[derive(Default)]
pub struct DesktopEffects {
    clipboard: Option<arboard::Clipboard>,
}

impl DesktopEffects {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.clipboard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| FolioError::SideEffect(format!("clipboard unavailable: {e}")))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| FolioError::SideEffect("clipboard unavailable".to_string()))
    }
}

impl SideEffects for DesktopEffects {
    fn open_external(&mut self, url: &str) -> Result<()> {
        log::debug!("Opening {url}");
        open::that(url).map_err(|e| FolioError::SideEffect(format!("cannot open {url}: {e}")))
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard()?
            .set_text(text.to_string())
            .map_err(|e| FolioError::SideEffect(format!("clipboard write failed: {e}")))?;
        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }

    fn theme_changed(&mut self, theme: Theme) {
        log::debug!("Host theme now {theme}");
    }
}
