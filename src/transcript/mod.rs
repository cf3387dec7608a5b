//! Result transcript data model and sinks
//!
//! A probe run produces an ordered, append-only sequence of timestamped,
//! severity-tagged records. The runner writes records through the
//! `TranscriptSink` trait so tests can capture a transcript without a
//! terminal attached.

use crate::output::RecordFormatter;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Severity of a transcript record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational / in-progress
    Loading,
    /// Probe verdict: pass
    Success,
    /// Probe verdict: fail
    Error,
}

impl Severity {
    /// Get severity name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Loading => "loading",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Get the status symbol shown next to the message
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Loading => "ℹ️",
            Severity::Success => "✅",
            Severity::Error => "❌",
        }
    }
}

/// An immutable, timestamped transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Local time the record was appended
    pub timestamp: DateTime<Local>,
    /// Record severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl ResultRecord {
    /// Create a record stamped with the current local time
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            message: message.into(),
        }
    }
}

/// Append-only destination for probe results
///
/// Records are appended in emission order; `snapshot` returns them in that
/// order. `clear` replaces the sequence with empty.
pub trait TranscriptSink: Send + Sync {
    /// Append one record, stamping it with the current time
    fn append(&self, severity: Severity, message: String);

    /// Replace the record sequence with empty
    fn clear(&self);

    /// Get a copy of all records in emission order
    fn snapshot(&self) -> Vec<ResultRecord>;

    /// Count records with `error` severity
    fn error_count(&self) -> usize {
        self.snapshot()
            .iter()
            .filter(|r| r.severity == Severity::Error)
            .count()
    }
}

/// In-memory transcript
#[derive(Default)]
pub struct Transcript {
    records: Mutex<Vec<ResultRecord>>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, record: ResultRecord) {
        self.records.lock().unwrap().push(record);
    }
}

impl TranscriptSink for Transcript {
    fn append(&self, severity: Severity, message: String) {
        self.push(ResultRecord::now(severity, message));
    }

    fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    fn snapshot(&self) -> Vec<ResultRecord> {
        self.records.lock().unwrap().clone()
    }
}

/// Transcript that also prints each record to stdout as it is appended
///
/// Printing happens at append time so a paced run reads like a live log.
pub struct ConsoleTranscript {
    inner: Transcript,
    formatter: Box<dyn RecordFormatter>,
}

impl ConsoleTranscript {
    /// Create a console transcript with the given record formatter
    pub fn new(formatter: Box<dyn RecordFormatter>) -> Self {
        Self {
            inner: Transcript::new(),
            formatter,
        }
    }
}

impl TranscriptSink for ConsoleTranscript {
    fn append(&self, severity: Severity, message: String) {
        let record = ResultRecord::now(severity, message);
        println!("{}", self.formatter.format_record(&record));
        self.inner.push(record);
    }

    fn clear(&self) {
        self.inner.clear();
    }

    fn snapshot(&self) -> Vec<ResultRecord> {
        self.inner.snapshot()
    }
}
