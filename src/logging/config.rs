use std::env;
use std::fmt;
use std::str::FromStr;

use crate::domain::{ParseLogModeError, Severity};

pub const LOG_MODE_ENV: &str = "LOG_MODE";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Output sink flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Human-readable `key=value` lines for development.
    Text,
    /// One JSON object per line.
    #[default]
    Json,
}

impl LogMode {
    /// Only `dev` (any case, surrounding whitespace ignored) selects `Text`.
    pub fn from_indicator(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("dev") {
            LogMode::Text
        } else {
            LogMode::Json
        }
    }

    pub fn from_dev_flag(dev: bool) -> Self {
        if dev { LogMode::Text } else { LogMode::Json }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogMode::Text => "dev",
            LogMode::Json => "prod",
        }
    }
}

impl FromStr for LogMode {
    type Err = ParseLogModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(LogMode::Text),
            "prod" => Ok(LogMode::Json),
            _ => Err(ParseLogModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved logger settings. Missing or unrecognized inputs fall back to
/// JSON output at `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    pub mode: LogMode,
    pub level: Severity,
}

impl LoggerConfig {
    pub const fn new(mode: LogMode, level: Severity) -> Self {
        Self { mode, level }
    }

    /// Reads `LOG_MODE` and `LOG_LEVEL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup(LOG_MODE_ENV)
            .map(|v| LogMode::from_indicator(&v))
            .unwrap_or_default();
        let level = lookup(LOG_LEVEL_ENV)
            .map(|v| Severity::parse_lenient(&v))
            .unwrap_or_default();
        Self { mode, level }
    }
}
