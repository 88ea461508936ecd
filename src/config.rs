//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_WINDOW_DAYS;
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Largest accepted birthday look-ahead.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before reading each line
    pub prompt: String,

    /// How many days after today the birthday report covers (default: 7)
    pub birthday_window_days: u32,

    /// Fixed "today" for birthday reports instead of the system date
    pub today_override: Option<NaiveDate>,

    /// Where the line editor keeps its input history, if anywhere
    pub history_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: prompt text (default: "Enter a command: ")
    /// - `BIRTHDAY_WINDOW_DAYS`: report look-ahead, 0-366 (default: 7)
    /// - `ASSISTANT_TODAY`: date to treat as today, `YYYY-MM-DD`
    /// - `ASSISTANT_HISTORY_FILE`: path for line-editor history
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints, so the conversation on stdout stays clean
        let _ = dotenvy::dotenv();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let birthday_window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let today_override = Self::parse_env_date("ASSISTANT_TODAY")?;

        let history_file = env::var("ASSISTANT_HISTORY_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            prompt,
            birthday_window_days,
            today_override,
            history_file,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            today_override: None,
            history_file: None,
            log_level: "error".to_string(),
        }
    }
}
