use super::logger::Logger;

/// Call-scoped carrier for the ambient logger.
///
/// Contexts are plain values passed down the call chain. Deriving a new one
/// never changes the context it was derived from.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    logger: Option<Logger>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(&self, logger: Logger) -> LogContext {
        LogContext {
            logger: Some(logger),
        }
    }

    /// The attached logger, or the process-wide default when none is attached.
    pub fn logger(&self) -> Logger {
        match &self.logger {
            Some(logger) => logger.clone(),
            None => Logger::global(),
        }
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}
