//! Purpose: Define the structured record for non-fatal diagnostics and where they go.
//! Exports: `Notice`, `notice_json`, `Reporter`, `MemoryReporter`, `NullReporter`.
//! Role: Injected side channel replacing direct prints from parse/sum operations.
//! Invariants: Notices are non-fatal and never alter result payloads.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value, json};

use crate::api::{Error, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: String,
    pub time: String,
    pub cmd: String,
    pub message: String,
    pub details: Map<String, Value>,
}

impl Notice {
    /// Builds a notice for a recovered error, stamped with the current time.
    pub fn from_error(cmd: &str, err: &Error) -> Self {
        let kind = err.kind();
        let message = err
            .message()
            .or(kind.notice_message())
            .unwrap_or("recovered error")
            .to_string();

        let mut details = Map::new();
        if let Some(index) = err.index() {
            details.insert("index".to_string(), json!(index));
        }
        if let Some(type_name) = err.type_name() {
            details.insert("type".to_string(), json!(type_name));
        }

        Self {
            kind: notice_kind(kind).to_string(),
            time: notice_time_now().unwrap_or_default(),
            cmd: cmd.to_string(),
            message,
            details,
        }
    }
}

fn notice_kind(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::NotNumericText => "not_numeric_text",
        ErrorKind::WrongArgumentType => "wrong_argument_type",
        ErrorKind::UnsummableElement => "unsummable_element",
        ErrorKind::OutOfRange => "out_of_range",
        ErrorKind::Usage => "usage",
        ErrorKind::Io => "io",
        ErrorKind::Internal => "internal",
    }
}

fn notice_time_now() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    let duration = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = time::OffsetDateTime::from_unix_timestamp_nanos(duration.as_nanos() as i128).ok()?;
    ts.format(&Rfc3339).ok()
}

pub fn notice_json(notice: &Notice) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(notice.kind));
    inner.insert("time".to_string(), json!(notice.time));
    inner.insert("cmd".to_string(), json!(notice.cmd));
    inner.insert("message".to_string(), json!(notice.message));
    inner.insert("details".to_string(), Value::Object(notice.details.clone()));

    let mut outer = Map::new();
    outer.insert("notice".to_string(), Value::Object(inner));
    Value::Object(outer)
}

/// Receives every non-fatal diagnostic produced by the api entry points.
pub trait Reporter {
    fn report(&mut self, notice: Notice);
}

/// Keeps notices in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    notices: Vec<Notice>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn messages(&self) -> Vec<&str> {
        self.notices
            .iter()
            .map(|notice| notice.message.as_str())
            .collect()
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _notice: Notice) {}
}

impl<F> Reporter for F
where
    F: FnMut(Notice),
{
    fn report(&mut self, notice: Notice) {
        self(notice)
    }
}
