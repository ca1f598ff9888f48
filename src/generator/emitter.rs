use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::faker::{FakeSource, LoremFaker};
use crate::domain::{LogStatus, Severity, StatusCatalog};
use crate::logging::{LogContext, LogMode, Logger, LoggerConfig};

/// Pause between two records.
pub const TICK: Duration = Duration::from_secs(1);

pub const SENTENCE_WORDS: usize = 5;

/// Logger settings the binary runs with: JSON lines, every severity.
pub const EMITTER_LOGGER: LoggerConfig = LoggerConfig::new(LogMode::Json, Severity::Debug);

/// One synthetic record before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRecord {
    pub status: LogStatus,
    pub user: String,
    pub message: String,
}

/// Writes one random record per tick through the context's logger.
#[derive(Debug, Clone, Default)]
pub struct Emitter<F = LoremFaker> {
    faker: F,
}

impl Emitter<LoremFaker> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FakeSource> Emitter<F> {
    pub fn with_faker(faker: F) -> Self {
        Self { faker }
    }

    pub fn next_record(&self) -> SyntheticRecord {
        SyntheticRecord {
            status: StatusCatalog::random(),
            user: self.faker.email(),
            message: self.faker.sentence(SENTENCE_WORDS),
        }
    }

    /// Builds and writes a single record, returning what was written.
    pub fn emit_once(&self, ctx: &LogContext) -> SyntheticRecord {
        self.emit_with(&ctx.logger())
    }

    /// Emits forever, one record every [`TICK`].
    pub async fn run(&self, ctx: &LogContext) {
        let logger = ctx.logger();
        loop {
            self.emit_with(&logger);
            tokio::time::sleep(TICK).await;
        }
    }

    fn emit_with(&self, logger: &Logger) -> SyntheticRecord {
        let record = self.next_record();
        write_record(logger, &record);
        record
    }
}

fn write_record(logger: &Logger, record: &SyntheticRecord) {
    let status = record.status.status();
    let user = record.user.as_str();
    let message = record.message.as_str();

    logger.in_scope(|| match record.status.severity() {
        Severity::Debug => debug!(status, user, "{message}"),
        Severity::Info => info!(status, user, "{message}"),
        Severity::Warn => warn!(status, user, "{message}"),
        Severity::Error => error!(status, user, "{message}"),
    });
}
