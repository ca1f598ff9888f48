use thiserror::Error;

/// Returned by `Severity::from_str` for text outside debug/info/warn/error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid severity '{input}'. Valid severities: debug, info, warn, error")]
pub struct ParseSeverityError {
    pub input: String,
}

/// Returned by `LogMode::from_str` for text other than dev/prod.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid log mode '{input}'. Expected: 'dev' or 'prod'")]
pub struct ParseLogModeError {
    pub input: String,
}
