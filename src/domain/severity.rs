use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::error::ParseSeverityError;

/// Severity of a generated record, also used as the minimum level of a logger.
///
/// Variants are declared in filtering order, so `Debug < Info < Warn < Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Resolves free-form text, falling back to `Info` for anything unrecognized.
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        LevelFilter::from_level(self.into())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for tracing::Level {
    fn from(val: Severity) -> Self {
        match val {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_falls_back_to_info() {
        let test_cases = vec![
            ("", Severity::Info),
            ("invalid", Severity::Info),
            ("   ", Severity::Info),
            ("trace", Severity::Info),
            ("debug", Severity::Debug),
            ("DEBUG", Severity::Debug),
            ("DeBuG", Severity::Debug),
            ("info", Severity::Info),
            ("warn", Severity::Warn),
            ("WARN", Severity::Warn),
            ("error", Severity::Error),
            ("Error", Severity::Error),
            (" error\n", Severity::Error),
        ];

        for (input, expected) in test_cases {
            assert_eq!(Severity::parse_lenient(input), expected, "Input: {input:?}");
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "warning".parse::<Severity>().unwrap_err();
        assert_eq!(err.input, "warning");
        assert!(err.to_string().contains("Invalid severity 'warning'"));
    }

    #[test]
    fn test_ordering_matches_filtering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_level_filter_conversion() {
        assert_eq!(Severity::Debug.level_filter(), LevelFilter::DEBUG);
        assert_eq!(Severity::Info.level_filter(), LevelFilter::INFO);
        assert_eq!(Severity::Warn.level_filter(), LevelFilter::WARN);
        assert_eq!(Severity::Error.level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(
            serde_json::to_string(&Severity::Error).unwrap(),
            "\"ERROR\""
        );
    }
}
