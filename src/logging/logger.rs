use std::fmt;
use std::io;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

use super::config::{LogMode, LoggerConfig};
use super::format::RecordFormat;
use crate::domain::Severity;

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Shared handle to a configured structured-log writer.
///
/// Cloning is cheap and every clone writes through the same subscriber.
/// Records are emitted with the regular `tracing` macros inside
/// [`Logger::in_scope`], so the captured call site is the caller's own.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    dispatch: Dispatch,
    config: LoggerConfig,
}

impl Logger {
    /// Builds a logger writing to stdout.
    pub fn build(mode: LogMode, min_level: Severity) -> Self {
        Self::build_with_writer(mode, min_level, io::stdout)
    }

    /// Boolean/string form: `dev` selects the text sink, `level` is resolved
    /// leniently (unknown values mean `Info`).
    pub fn new(dev: bool, level: &str) -> Self {
        Self::build(LogMode::from_dev_flag(dev), Severity::parse_lenient(level))
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self::build(config.mode, config.level)
    }

    /// Builds from `LOG_MODE` / `LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self::from_config(LoggerConfig::from_env())
    }

    pub fn build_with_writer<W>(mode: LogMode, min_level: Severity, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .event_format(RecordFormat::new(mode))
            .with_writer(make_writer);

        let subscriber = tracing_subscriber::registry()
            .with(fmt_layer)
            .with(min_level.level_filter());

        Self {
            inner: Arc::new(LoggerInner {
                dispatch: Dispatch::new(subscriber),
                config: LoggerConfig::new(mode, min_level),
            }),
        }
    }

    /// Process-wide default logger, built from the environment on first use.
    ///
    /// Concurrent first callers all observe the same instance.
    pub fn global() -> Logger {
        GLOBAL_LOGGER.get_or_init(Logger::from_env).clone()
    }

    /// Runs `f` with this logger as the current `tracing` dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.inner.dispatch, f)
    }

    pub fn config(&self) -> LoggerConfig {
        self.inner.config
    }

    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.inner.config.mode)
            .field("level", &self.inner.config.level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedOutput;
    use std::thread;

    #[test]
    fn test_new_resolves_inputs() {
        let dev = Logger::new(true, "debug");
        assert_eq!(dev.config(), LoggerConfig::new(LogMode::Text, Severity::Debug));

        let prod = Logger::new(false, "info");
        assert_eq!(prod.config(), LoggerConfig::new(LogMode::Json, Severity::Info));

        let fallback = Logger::new(false, "loud");
        assert_eq!(fallback.config().level, Severity::Info);
    }

    #[test]
    fn test_global_is_singleton() {
        let first = Logger::global();
        let second = Logger::global();
        assert!(Logger::ptr_eq(&first, &second));
    }

    #[test]
    fn test_global_concurrent_first_access() {
        let handles: Vec<_> = (0..16).map(|_| thread::spawn(Logger::global)).collect();

        let loggers: Vec<Logger> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect();

        for logger in &loggers {
            assert!(Logger::ptr_eq(logger, &loggers[0]));
        }
    }

    #[test]
    fn test_clones_share_identity() {
        let logger = Logger::new(false, "info");
        let clone = logger.clone();
        assert!(Logger::ptr_eq(&logger, &clone));
        assert!(!Logger::ptr_eq(&logger, &Logger::new(false, "info")));
    }

    #[test]
    fn test_filters_below_min_level() {
        let output = CapturedOutput::new();
        let logger =
            Logger::build_with_writer(LogMode::Json, Severity::Warn, output.writer());

        logger.in_scope(|| {
            tracing::debug!(status = "CACHE_HIT", "suppressed");
            tracing::info!(status = "USER_CREATED", "suppressed");
            tracing::warn!(status = "HIGH_MEMORY", "kept");
            tracing::error!(status = "TIMEOUT_OCCURRED", "kept");
        });

        let lines = output.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"level\":\"WARN\""));
        assert!(lines[1].contains("\"level\":\"ERROR\""));
    }

    #[test]
    fn test_text_sink_line_shape() {
        let output = CapturedOutput::new();
        let logger =
            Logger::build_with_writer(LogMode::Text, Severity::Debug, output.writer());

        logger.in_scope(|| {
            tracing::debug!(status = "CACHE_HIT", user = "jane@example.com", "cache warmed up");
        });

        let lines = output.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.starts_with("time="));
        assert!(line.contains(" level=DEBUG "));
        assert!(line.contains(" caller=src/logging/logger.rs:"));
        assert!(line.contains(" message=\"cache warmed up\" "));
        assert!(line.ends_with("status=CACHE_HIT user=jane@example.com"));
    }

    #[test]
    fn test_event_fields_cannot_replace_record_keys() {
        let output = CapturedOutput::new();
        let logger =
            Logger::build_with_writer(LogMode::Json, Severity::Debug, output.writer());

        logger.in_scope(|| {
            tracing::info!(time = "oops", level = "fake", caller = "nowhere", msg = "raw", "hi");
        });

        let lines = output.lines();
        assert_eq!(lines.len(), 1);
        let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["message"], "hi");
        assert_ne!(record["time"], "oops");
        assert!(record["time"].as_str().unwrap().ends_with('Z'));
        assert!(
            record["caller"]
                .as_str()
                .unwrap()
                .starts_with("src/logging/logger.rs:")
        );
        assert!(record.get("msg").is_none());
    }

    #[test]
    fn test_records_outside_scope_are_not_captured() {
        let output = CapturedOutput::new();
        let _logger =
            Logger::build_with_writer(LogMode::Json, Severity::Debug, output.writer());

        tracing::error!("not routed through the logger");
        assert!(output.lines().is_empty());
    }
}
