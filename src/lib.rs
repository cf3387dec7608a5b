//! API Connection Tester
//!
//! A manual QA tool that exercises a backend API's health, login, and
//! authentication-status endpoints one probe at a time, rendering a
//! timestamped pass/fail transcript to the terminal.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod runner;
pub mod transcript;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use output::{ColoredFormatter, PlainFormatter, RecordFormatter};
pub use probe::{default_probes, Probe, ProbeEntry};
pub use runner::SequentialRunner;
pub use transcript::{ConsoleTranscript, ResultRecord, Severity, Transcript, TranscriptSink};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
    pub const DEFAULT_EMAIL: &str = "admin@proto.com";
    pub const DEFAULT_PASSWORD: &str = "admin123";
    pub const DEFAULT_PROBE_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_INCLUDE_CREDENTIALS: bool = true;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
