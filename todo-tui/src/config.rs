use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Base URL of the todo API server, e.g. "http://localhost:8000"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Persisted light/dark preference, toggled from the task view.
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_theme() -> Theme {
    Theme::Light
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            theme: default_theme(),
        }
    }
}

impl TodoConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("todo-tui")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_survives_a_config_round_trip() {
        let config = TodoConfig {
            api_url: "http://example.test:8000".to_string(),
            theme: Theme::Dark,
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: TodoConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.api_url, config.api_url);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: TodoConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.theme, Theme::Light);
        assert_eq!(parsed.api_url, "http://localhost:8000");
    }
}
