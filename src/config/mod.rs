//! Configuration management for devcourse

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Vim mode enabled
    pub vim_mode: bool,

    /// Quiz percentage needed to mark a topic completed
    #[serde(default = "default_pass_percentage")]
    pub pass_percentage: u8,

    /// Extra topics directory (defaults to `<data_dir>/topics`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics_dir: Option<PathBuf>,
}

fn default_pass_percentage() -> u8 {
    70
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            vim_mode: true,
            pass_percentage: default_pass_percentage(),
            topics_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "devcourse")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "devcourse").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Directory scanned for extra topic files
    pub fn topics_dir(&self) -> Result<PathBuf> {
        match &self.topics_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::data_dir()?.join("topics")),
        }
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("devcourse.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme
            .clone()
            .or_else(|| Theme::named(&self.theme))
            .unwrap_or_else(Theme::tokyo_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_tokyo_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn default_pass_percentage_is_seventy() {
        assert_eq!(Config::default().pass_percentage, 70);
    }

    #[test]
    fn config_deserializes_without_new_fields() {
        let json = r#"{"theme":"Custom","vim_mode":false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "Custom");
        assert!(!config.vim_mode);
        assert_eq!(config.pass_percentage, 70);
        assert!(config.topics_dir.is_none());
    }

    #[test]
    fn theme_name_selects_builtin_theme() {
        let config = Config { theme: "Solarized Light".into(), ..Default::default() };
        assert_eq!(config.active_theme().name, "Solarized Light");

        let config = Config { theme: "Unknown".into(), ..Default::default() };
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn explicit_topics_dir_wins() {
        let config = Config { topics_dir: Some(PathBuf::from("/tmp/topics")), ..Default::default() };
        assert_eq!(config.topics_dir().unwrap(), PathBuf::from("/tmp/topics"));
    }
}
