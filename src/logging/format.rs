use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::attr::{
    Attr, AttrValue, LEVEL_KEY, MESSAGE_KEY, SOURCE_KEY, Source, TIME_KEY, TimeLayout,
    needs_quoting, replace_attr,
};
use super::config::LogMode;

/// Event formatter shared by the text and JSON sinks.
///
/// Every line carries `time`, `level`, `caller` and `message` first, followed
/// by the event's own fields in recording order.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormat {
    mode: LogMode,
}

impl RecordFormat {
    pub fn new(mode: LogMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LogMode {
        self.mode
    }

    /// Builds the renamed attribute list for one event.
    pub fn attrs(
        &self,
        now: DateTime<Utc>,
        metadata: &Metadata<'_>,
        fields: FieldCollector,
    ) -> Vec<Attr> {
        let layout = TimeLayout::from(self.mode);
        let mut raw = Vec::with_capacity(fields.fields.len() + 4);

        raw.push(Attr::new(TIME_KEY, AttrValue::Time(now)));
        raw.push(Attr::string(LEVEL_KEY, metadata.level().as_str()));
        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            raw.push(Attr::new(
                SOURCE_KEY,
                AttrValue::Source(Source {
                    file: file.to_string(),
                    line,
                }),
            ));
        }
        raw.push(Attr::string(MESSAGE_KEY, fields.message.unwrap_or_default()));
        raw.extend(fields.fields);

        raw.into_iter()
            .map(|attr| replace_attr(attr, layout))
            .collect()
    }

    /// Renders already-renamed attributes as a single line (without newline).
    pub fn render(&self, attrs: &[Attr]) -> Result<String, fmt::Error> {
        match self.mode {
            LogMode::Text => Ok(render_text(attrs)),
            LogMode::Json => render_json(attrs),
        }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let attrs = self.attrs(Utc::now(), event.metadata(), fields);
        let line = self.render(&attrs)?;
        writeln!(writer, "{line}")
    }
}

fn render_text(attrs: &[Attr]) -> String {
    attrs
        .iter()
        .map(|attr| {
            let value = attr.value.to_string();
            if needs_quoting(&value) {
                format!("{}={:?}", attr.key, value)
            } else {
                format!("{}={}", attr.key, value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Event fields that collide with an earlier key (`time`, `level`, ...) are
// dropped so the record's own values survive.
fn render_json(attrs: &[Attr]) -> Result<String, fmt::Error> {
    let mut object = Map::with_capacity(attrs.len());
    for attr in attrs {
        object
            .entry(attr.key.clone())
            .or_insert_with(|| attr.value.to_json());
    }
    serde_json::to_string(&Value::Object(object)).map_err(|_| fmt::Error)
}

/// Collects an event's fields, splitting off the `message` field.
#[derive(Debug, Default)]
pub struct FieldCollector {
    message: Option<String>,
    fields: Vec<Attr>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: AttrValue) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(Attr::new(field.name(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, AttrValue::Str(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, AttrValue::Str(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, AttrValue::I64(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, AttrValue::U64(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, AttrValue::F64(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, AttrValue::Bool(value));
    }
}
