use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub font: FontConfig,
    pub window: WindowConfig,
    pub labels: LabelConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Text used in the tree views and for new folders
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LabelConfig {
    pub new_folder_name: String,
    pub excluded_marker: String,
    pub highlight_open: String,
    pub highlight_close: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "light".to_string(),
            },
            font: FontConfig { font_size: 14.0 },
            window: WindowConfig {
                width: 820.0,
                height: 720.0,
            },
            labels: LabelConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Config::default().theme
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Config::default().font
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Config::default().window
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            new_folder_name: "新しいフォルダー".to_string(),
            excluded_marker: "(除外)".to_string(),
            highlight_open: "【".to_string(),
            highlight_close: "】".to_string(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "henkan")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Parse TOML, falling back to defaults on error.
    pub fn parse(contents: &str) -> Self {
        match toml::from_str::<Config>(contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse config file, using defaults: {}", e);
                Config::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
            }
        }
        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme.mode.eq_ignore_ascii_case("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "light");
        assert!(!config.is_dark());
        assert_eq!(config.font.font_size, 14.0);
        assert_eq!(config.labels.new_folder_name, "新しいフォルダー");
        assert_eq!(config.labels.excluded_marker, "(除外)");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.labels.highlight_open, deserialized.labels.highlight_open);
        assert_eq!(config.window.width, deserialized.window.width);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse("[theme]\nmode = \"dark\"\n");
        assert!(config.is_dark());
        assert_eq!(config.labels.highlight_close, "】");
        assert_eq!(config.window.height, 720.0);
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let config = Config::parse("theme = [");
        assert_eq!(config.theme.mode, "light");
    }
}
