use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::EnforcementAction;
use crate::rules::defaults;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid TOML configuration: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub policy: PolicyConfig,
    pub rules: RulesConfig,
    pub browsers: BrowsersConfig,
    pub notifications: NotificationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub min_focus_minutes: u32,
    pub max_focus_minutes: u32,
    pub default_focus_minutes: u32,
    pub poll_interval_ms: u64,
    pub cutoff_hour: u32,
    pub cutoff_minute: u32,
    pub daily_reset_hour: u32,
    pub daily_reset_minute: u32,
    pub expiry_check_seconds: u64,
    pub automation_timeout_seconds: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_focus_minutes: 15,
            max_focus_minutes: 480,
            default_focus_minutes: 60,
            poll_interval_ms: 1500,
            cutoff_hour: 17,
            cutoff_minute: 0,
            daily_reset_hour: 17,
            daily_reset_minute: 0,
            expiry_check_seconds: 60,
            automation_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HardcodedAction {
    #[default]
    CloseTab,
    CloseApp,
}

impl From<HardcodedAction> for EnforcementAction {
    fn from(action: HardcodedAction) -> Self {
        match action {
            HardcodedAction::CloseTab => EnforcementAction::CloseTab,
            HardcodedAction::CloseApp => EnforcementAction::CloseApp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub hardcoded: Vec<String>,
    pub soft: Vec<String>,
    pub exact_match: Vec<String>,
    pub whitelist_case_sensitive: bool,
    pub hardcoded_action: HardcodedAction,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hardcoded: defaults::owned(defaults::HARDCODED),
            soft: defaults::owned(defaults::SOFT),
            exact_match: defaults::owned(defaults::EXACT_MATCH),
            whitelist_case_sensitive: true,
            hardcoded_action: HardcodedAction::CloseTab,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowsersConfig {
    pub chromium: Vec<String>,
    pub safari: bool,
}

impl Default for BrowsersConfig {
    fn default() -> Self {
        Self {
            chromium: vec![
                "Microsoft Edge".to_string(),
                "Google Chrome".to_string(),
                "SunBrowser".to_string(),
            ],
            safari: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub urgency: NotificationUrgency,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            urgency: NotificationUrgency::Normal,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationUrgency {
    Low,
    #[default]
    Normal,
    Critical,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub directory: Option<PathBuf>,
}

impl StorageConfig {
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(Config::config_directory)
    }

    pub fn blocked_websites_path(&self) -> PathBuf {
        self.directory().join("blocked_websites.txt")
    }

    pub fn white_websites_path(&self) -> PathBuf {
        self.directory().join("white_websites.txt")
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn config_directory() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("focusguard")
    }

    pub fn config_path() -> PathBuf {
        Self::config_directory().join("config.toml")
    }
}
