use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_menu")]
    pub menu: String,
    #[serde(default = "default_trigger_label")]
    pub trigger_label: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_menu() -> String {
    "site".to_string()
}
fn default_trigger_label() -> String {
    "Menu".to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_file() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("menutree")
        .join("menutree.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            menu: default_menu(),
            trigger_label: default_trigger_label(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menutree")
            .join("config.toml")
    }

    /// Reset a blank menu reference to the default. Call after
    /// deserialization and after applying CLI overrides.
    pub fn normalize_menu(&mut self) {
        if self.menu.trim().is_empty() {
            self.menu = default_menu();
        }
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = default_tick_rate_ms();
        }
    }
}
