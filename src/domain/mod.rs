//! Domain layer for rask-log-generator.
//!
//! Contains the canonical types shared across all modules:
//! - `Severity`: record severity (Debug/Info/Warn/Error)
//! - `StatusCatalog` / `LogStatus`: per-severity status tags
//! - parse errors for the strict `FromStr` implementations

pub mod error;
pub mod severity;
pub mod status;

pub use error::{ParseLogModeError, ParseSeverityError};
pub use severity::Severity;
pub use status::{LogStatus, StatusCatalog};
