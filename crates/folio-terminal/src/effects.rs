//! Side-effect gateway: the only way commands reach outside the log.

use folio_types::error::{FolioError, Result};
use folio_types::theme::Theme;

/// Host-provided effects. Failures are reported, never fatal.
pub trait SideEffects {
    /// Open a URL in the user's browser or mail client.
    fn open_external(&mut self, url: &str) -> Result<()>;

    /// Put `text` on the clipboard.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;

    /// Notification that the session theme changed.
    fn theme_changed(&mut self, _theme: Theme) {}
}

/// Gateway that touches nothing. Used by piped mode and as a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl SideEffects for NoEffects {
    fn open_external(&mut self, url: &str) -> Result<()> {
        log::debug!("open_external({url}) ignored");
        Ok(())
    }

    fn copy_to_clipboard(&mut self, _text: &str) -> Result<()> {
        log::debug!("copy_to_clipboard ignored");
        Ok(())
    }
}

/// Gateway that records every call, optionally failing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingEffects {
    pub opened: Vec<String>,
    pub copied: Vec<String>,
    pub themes: Vec<Theme>,
    /// When set, `open_external` and `copy_to_clipboard` fail.
    pub fail: bool,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl SideEffects for RecordingEffects {
    fn open_external(&mut self, url: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::SideEffect(format!("cannot open {url}")));
        }
        self.opened.push(url.to_string());
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::SideEffect("clipboard denied".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }

    fn theme_changed(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
}
