use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::editor::TargetEditor;

impl Config {
    /// `~/.config/other-editor/config.toml`
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("other-editor").join("config.toml"))
    }

    /// Load from the default location. Called on every invocation so edits
    /// take effect immediately.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        let editor = editor_for_key(key)?;
        Ok(self.configured_path(editor).unwrap_or_default().to_string())
    }

    /// Set a config value by dot-separated key path; an empty value clears it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let editor = editor_for_key(key)?;
        self.settings_mut(editor).path = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        Ok(())
    }
}

fn editor_for_key(key: &str) -> Result<TargetEditor> {
    TargetEditor::all()
        .into_iter()
        .find(|e| e.config_key() == key)
        .with_context(|| {
            let known: Vec<&str> = Config::keys().collect();
            format!("Unknown config key: {key} (expected one of: {})", known.join(", "))
        })
}
