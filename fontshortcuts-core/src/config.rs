use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the fontshortcuts command line tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// User settings file (global scope)
    pub user: PathBuf,
    /// Workspace settings file; workspace-scoped reads are skipped when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<PathBuf>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        let user = dirs::config_dir()
            .map(|mut p| {
                p.push("Code");
                p.push("User");
                p.push("settings.json");
                p
            })
            .unwrap_or_else(|| PathBuf::from("settings.json"));
        Self {
            user,
            workspace: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from file, or create default if not exists
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path,
            None => default_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AppConfig = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save(Some(config_path))?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(path) => path,
            None => default_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(())
    }
}

fn default_path() -> Result<PathBuf> {
    let mut p = dirs::config_dir().context("No config directory ($HOME is not set)")?;
    p.push("fontshortcuts");
    p.push("config.toml");
    Ok(p)
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path
        })
    }
}
