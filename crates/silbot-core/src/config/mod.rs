#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::SilbotError;
use crate::types::ParseMode;

/// Environment variables checked, in order, for the bot token.
pub const TOKEN_ENV_VARS: [&str; 2] = ["SILBOT_TOKEN", "TELEGRAM_BOT_TOKEN"];

/// Top-level silbot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection to the Bot API and session-wide defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub token: String,
    /// Base URL without the `/bot<token>` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Applied when a send method is called without an explicit parse mode.
    #[serde(default)]
    pub parse_mode: Option<ParseMode>,
    #[serde(default)]
    pub disable_web_page_preview: Option<bool>,
    #[serde(default)]
    pub disable_notification: Option<bool>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            parse_mode: None,
            disable_web_page_preview: None,
            disable_notification: None,
        }
    }
}

/// Long-polling loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Long-poll timeout sent to `getUpdates`; 0 means short polling.
    #[serde(default)]
    pub timeout_secs: u64,
    /// Max updates per batch (1-100). Telegram's default when unset.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Update kinds to receive. Telegram keeps the previous setting when unset.
    #[serde(default)]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default = "default_backoff_initial")]
    pub backoff_initial_ms: u64,
    #[serde(default = "default_backoff_max")]
    pub backoff_max_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 0,
            limit: None,
            allowed_updates: None,
            max_concurrency: default_max_concurrency(),
            backoff_initial_ms: default_backoff_initial(),
            backoff_max_ms: default_backoff_max(),
        }
    }
}

/// Storage used by the bundled SQLite persistence hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for a daily rolling log file. Console only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_max_concurrency() -> usize {
    64
}
fn default_backoff_initial() -> u64 {
    1_000
}
fn default_backoff_max() -> u64 {
    60_000
}
fn default_db_path() -> String {
    "~/.silbot/silbot.db".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// First non-empty token found in [`TOKEN_ENV_VARS`].
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

impl Config {
    /// Replace the configured token with `token` when one is given, and
    /// expand `~` in filesystem paths.
    pub fn resolve(mut self, token: Option<String>) -> Self {
        if let Some(token) = token {
            self.bot.token = token;
        }
        self.storage.db_path = shellexpand(&self.storage.db_path);
        self.logging.log_dir = self.logging.log_dir.as_deref().map(shellexpand);
        self
    }

    /// Fail early on settings the Bot API would reject anyway.
    pub fn validate(&self) -> Result<(), SilbotError> {
        if self.bot.token.trim().is_empty() {
            return Err(SilbotError::Config(format!(
                "bot token missing: set bot.token or {}",
                TOKEN_ENV_VARS.join("/")
            )));
        }
        if self.polling.max_concurrency == 0 {
            return Err(SilbotError::Config(
                "polling.max_concurrency must be at least 1".to_string(),
            ));
        }
        if let Some(limit) = self.polling.limit {
            if !(1..=100).contains(&limit) {
                return Err(SilbotError::Config(format!(
                    "polling.limit must be within 1-100, got {limit}"
                )));
            }
        }
        Ok(())
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. The token from the
/// environment, when set, wins over the file.
pub fn load(path: &str) -> Result<Config, SilbotError> {
    let path = Path::new(path);
    if !path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default().resolve(token_from_env()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SilbotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SilbotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config.resolve(token_from_env()))
}
