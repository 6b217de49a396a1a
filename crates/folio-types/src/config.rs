//! Shell configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::theme::Theme;

/// Environment variable naming a config file when no CLI path is given.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Tunables for a shell session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Delay between submitting a line and dispatching it.
    pub thinking_delay_ms: u64,
    /// Delay between the steps of a multi-step command.
    pub sequence_step_delay_ms: u64,
    /// Theme the session starts in.
    pub initial_theme: Theme,
    /// Prompt printed before the input line and each echoed command.
    pub prompt: String,
    /// Portfolio content document. The built-in one is used when unset.
    pub content_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible fortunes, jokes and the like.
    pub seed: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 150,
            sequence_step_delay_ms: 400,
            initial_theme: Theme::Dark,
            prompt: "[user@portfolio ~]$".to_string(),
            content_path: None,
            seed: None,
        }
    }
}

impl ShellConfig {
    /// Parse a config document. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml(&text)?;
        // Relative content paths are resolved against the config file.
        if let Some(content) = config.content_path.take() {
            let resolved = match path.parent() {
                Some(dir) if content.is_relative() => dir.join(content),
                _ => content,
            };
            config.content_path = Some(resolved);
        }
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config from an explicit path, then the environment,
    /// then the built-in defaults.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    pub fn sequence_step_delay(&self) -> Duration {
        Duration::from_millis(self.sequence_step_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(FolioError::Config("prompt must not be empty".to_string()));
        }
        Ok(())
    }
}
