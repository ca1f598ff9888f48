#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::module_name_repetitions, // e.g. LogMode in logging::config
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod domain;
pub mod generator;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-export main types for easy access
pub use domain::{LogStatus, Severity, StatusCatalog};
pub use generator::Emitter;
pub use logging::{LogContext, LogMode, Logger, LoggerConfig};
