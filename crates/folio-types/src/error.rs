//! Error types for folio.

/// Errors produced by the folio shell.
///
/// The first group are per-command failures. The dispatcher turns them into
/// log messages; they never escape a single command's handling.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    #[error("{usage}")]
    MissingArgument { usage: String },

    #[error("{usage}")]
    InvalidArgument { usage: String },

    #[error("{0}")]
    NotFound(String),

    #[error("side effect failed: {0}")]
    SideEffect(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FolioError {
    /// Shorthand for a missing-argument error carrying usage text.
    pub fn missing(usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            usage: usage.into(),
        }
    }

    /// Shorthand for an invalid-argument error carrying usage text.
    pub fn invalid(usage: impl Into<String>) -> Self {
        Self::InvalidArgument {
            usage: usage.into(),
        }
    }

    /// True for errors that are shown as warnings rather than errors.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArgument { .. }
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
