//! Structured logger construction and propagation.
//!
//! ```text
//! LoggerConfig (LOG_MODE, LOG_LEVEL)
//!     → Logger::build (registry + LevelFilter + fmt layer with RecordFormat)
//!     → LogContext::with_logger
//!     → LogContext::logger (falls back to Logger::global)
//! ```

pub mod attr;
pub mod config;
pub mod context;
pub mod format;
pub mod logger;

pub use attr::{Attr, AttrValue, Source, TimeLayout, replace_attr};
pub use config::{LogMode, LoggerConfig};
pub use context::LogContext;
pub use format::RecordFormat;
pub use logger::Logger;
