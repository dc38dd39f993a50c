//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use oh_core::Schedule;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Event log read when no file is given on the command line.
    pub log_path: PathBuf,

    /// Target working minutes per weekday.
    #[serde(default)]
    pub schedule: Schedule,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_path: home.join(".sessionLock.log"),
            schedule: Schedule::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations, optionally layering a
    /// specific file on top.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (OH_LOG_PATH, OH_SCHEDULE__FRIDAY, ...)
        figment = figment.merge(Env::prefixed("OH_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for oh.
///
/// On Linux: `~/.config/oh`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("oh"))
}
