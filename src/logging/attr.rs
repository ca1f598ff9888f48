//! Record attributes and the key/value rewriting applied before output.
//!
//! The formatter first describes a record with raw keys (`time`, `level`,
//! `source`, `msg`) and then runs every attribute through [`replace_attr`],
//! which produces the names that actually reach stdout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::config::LogMode;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";
pub const SOURCE_KEY: &str = "source";

pub const RENAMED_MESSAGE_KEY: &str = "message";
pub const CALLER_KEY: &str = "caller";

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const NANOS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Call site of a log statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Time(DateTime<Utc>),
    Source(Source),
}

impl AttrValue {
    pub fn to_json(&self) -> Value {
        match self {
            AttrValue::Str(s) => Value::String(s.clone()),
            AttrValue::I64(v) => Value::from(*v),
            AttrValue::U64(v) => Value::from(*v),
            AttrValue::F64(v) => Value::from(*v),
            AttrValue::Bool(v) => Value::Bool(*v),
            AttrValue::Time(t) => Value::String(TimeLayout::Nanos.format(t)),
            AttrValue::Source(src) => Value::String(src.to_string()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::I64(v) => write!(f, "{v}"),
            AttrValue::U64(v) => write!(f, "{v}"),
            AttrValue::F64(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Time(t) => f.write_str(&TimeLayout::Seconds.format(t)),
            AttrValue::Source(src) => write!(f, "{src}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: AttrValue,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: AttrValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, AttrValue::Str(value.into()))
    }
}

/// UTC rendering of the `time` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// `YYYY-MM-DDTHH:MM:SS`
    Seconds,
    /// `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`
    Nanos,
}

impl TimeLayout {
    pub fn format(&self, t: &DateTime<Utc>) -> String {
        match self {
            TimeLayout::Seconds => t.format(SECONDS_FORMAT).to_string(),
            TimeLayout::Nanos => t.format(NANOS_FORMAT).to_string(),
        }
    }
}

impl From<LogMode> for TimeLayout {
    fn from(mode: LogMode) -> Self {
        match mode {
            LogMode::Text => TimeLayout::Seconds,
            LogMode::Json => TimeLayout::Nanos,
        }
    }
}

/// Renames the well-known raw keys and flattens their values to strings.
///
/// `time` is rendered with `layout`, `msg` becomes `message` and
/// `source` becomes `caller="file:line"`. Anything else is returned as-is.
pub fn replace_attr(mut attr: Attr, layout: TimeLayout) -> Attr {
    match attr.key.as_str() {
        TIME_KEY => {
            if let AttrValue::Time(t) = &attr.value {
                attr.value = AttrValue::Str(layout.format(t));
            }
        }
        MESSAGE_KEY => {
            attr.key = RENAMED_MESSAGE_KEY.to_string();
        }
        SOURCE_KEY => {
            if let AttrValue::Source(src) = &attr.value {
                attr.value = AttrValue::Str(src.to_string());
                attr.key = CALLER_KEY.to_string();
            }
        }
        _ => {}
    }
    attr
}

/// Text-sink values are quoted when they would otherwise be ambiguous.
pub(crate) fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '"' || c.is_control())
}
