//! Transcript rendering for the terminal
//!
//! Mirrors the browser original's status lines: timestamp, a status
//! symbol, and the message, with color keyed to record severity.

use crate::transcript::{ResultRecord, Severity};
use colored::*;

/// Formats a single transcript record into one display line
pub trait RecordFormatter: Send + Sync {
    /// Render a record for display
    fn format_record(&self, record: &ResultRecord) -> String;
}

/// Colored formatter using ANSI colors keyed to severity
pub struct ColoredFormatter;

impl ColoredFormatter {
    pub fn new() -> Self {
        Self
    }

    fn color_for(severity: Severity) -> Color {
        match severity {
            Severity::Loading => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        }
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for ColoredFormatter {
    fn format_record(&self, record: &ResultRecord) -> String {
        let timestamp = record.timestamp.format("%H:%M:%S").to_string();
        let line = format!("{} {}", record.severity.symbol(), record.message);
        format!(
            "{}  {}",
            timestamp.bold(),
            line.color(Self::color_for(record.severity))
        )
    }
}

/// Plain formatter for terminals without color support
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for PlainFormatter {
    fn format_record(&self, record: &ResultRecord) -> String {
        format!(
            "{}  [{}] {}",
            record.timestamp.format("%H:%M:%S"),
            record.severity.as_str(),
            record.message
        )
    }
}

/// Create the appropriate formatter for the color setting
pub fn formatter_for(enable_color: bool) -> Box<dyn RecordFormatter> {
    if enable_color {
        Box::new(ColoredFormatter::new())
    } else {
        Box::new(PlainFormatter::new())
    }
}
