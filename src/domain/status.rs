use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::severity::Severity;

const DEBUG_STATUSES: &[&str] = &["CACHE_HIT", "CONFIG_LOADED", "DB_CONNECTED"];
const INFO_STATUSES: &[&str] = &["USER_CREATED", "CHANNEL_REQUESTED", "PLAYLIST_STOPPED"];
const WARN_STATUSES: &[&str] = &["HIGH_MEMORY", "SLOW_RESPONSE", "DEPRECATED_API_CALL"];
const ERROR_STATUSES: &[&str] = &[
    "TIMEOUT_OCCURRED",
    "UNHANDLED_EXCEPTION",
    "DB_CONNECTION_FAILED",
];

/// A severity paired with one of its own status tags.
///
/// Only `StatusCatalog` constructs these, so the tag never disagrees with the
/// severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStatus {
    severity: Severity,
    status: &'static str,
}

impl LogStatus {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn status(&self) -> &'static str {
        self.status
    }
}

/// Fixed per-severity table of cosmetic status tags.
pub struct StatusCatalog;

impl StatusCatalog {
    pub fn statuses(severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Debug => DEBUG_STATUSES,
            Severity::Info => INFO_STATUSES,
            Severity::Warn => WARN_STATUSES,
            Severity::Error => ERROR_STATUSES,
        }
    }

    pub fn contains(severity: Severity, status: &str) -> bool {
        Self::statuses(severity).iter().any(|s| *s == status)
    }

    /// Uniformly picks a severity, then uniformly picks one of its tags.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> LogStatus {
        let severity = Severity::ALL[rng.random_range(0..Severity::ALL.len())];
        let statuses = Self::statuses(severity);
        let status = statuses[rng.random_range(0..statuses.len())];
        LogStatus { severity, status }
    }

    /// Picks with a fresh generator seeded from the wall clock.
    pub fn random() -> LogStatus {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut rng = StdRng::seed_from_u64(seed);
        Self::pick(&mut rng)
    }
}
