//! User configuration, read from `config.toml` in the devref config directory.
//! Every field is optional; a missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// syntect theme used for snippet bodies
    pub theme: String,
    /// Log filter, overridden by `DEVREF_LOG`
    pub log_level: String,
    /// Input poll interval of the event loop
    pub tick_rate_ms: u64,
    /// Page opened at launch instead of the topic index
    pub start_page: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: crate::ui::highlight::DEFAULT_THEME.to_string(),
            log_level: "info".to_string(),
            tick_rate_ms: 100,
            start_page: None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Failed to get config directory")?
            .join("devref")
            .join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
