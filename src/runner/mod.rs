//! Sequential probe runner
//!
//! Executes probes strictly one at a time against the configured backend,
//! appending transcript records as each probe completes. A fixed pause
//! separates probes during a full run so a human watching the output can
//! read each verdict before the next probe starts.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::probe::{default_probes, Probe};
use crate::transcript::{Severity, TranscriptSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Runs an ordered list of probes against one backend
pub struct SequentialRunner {
    client: ApiClient,
    probes: Vec<Box<dyn Probe>>,
    sink: Arc<dyn TranscriptSink>,
    delay: Duration,
    running: AtomicBool,
}

impl SequentialRunner {
    /// Create a runner over an explicit probe list
    pub fn new(
        client: ApiClient,
        probes: Vec<Box<dyn Probe>>,
        sink: Arc<dyn TranscriptSink>,
        delay: Duration,
    ) -> Self {
        Self {
            client,
            probes,
            sink,
            delay,
            running: AtomicBool::new(false),
        }
    }

    /// Create a runner with the default probe sequence from configuration
    pub fn from_config(config: &Config, sink: Arc<dyn TranscriptSink>) -> Result<Self> {
        let client = ApiClient::new(config)?;
        let probes = default_probes(config);
        Ok(Self::new(client, probes, sink, config.probe_delay()))
    }

    /// Whether a full run is currently in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Run one probe, converting any failure into a single error record
    ///
    /// Never returns an error: every probe failure ends up in the
    /// transcript instead.
    pub async fn run_probe(&self, probe: &dyn Probe) {
        self.sink
            .append(Severity::Loading, probe.description().to_string());

        match probe.run(&self.client).await {
            Ok(entries) => {
                for entry in entries {
                    self.sink.append(entry.severity, entry.message);
                }
            }
            Err(e) => {
                self.sink.append(Severity::Error, e.to_string());
            }
        }
    }

    /// Run every probe in order, pacing with the configured delay
    ///
    /// Clears prior results, emits a start record, runs the probes with
    /// the fixed delay between them (none after the last), then emits a
    /// completion record. A second invocation while one is in flight is
    /// rejected without touching the transcript.
    pub async fn run_all(&self) -> Result<()> {
        let indices: Vec<usize> = (0..self.probes.len()).collect();
        self.run_sequence(&indices).await
    }

    /// Run a named subset of probes in canonical order with full-run framing
    ///
    /// Every requested name must match a probe; any unknown name is a
    /// validation error and nothing runs.
    pub async fn run_named(&self, names: &[String]) -> Result<()> {
        let unknown: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|n| !self.probes.iter().any(|p| p.name() == *n))
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::validation(format!(
                "Unknown probe(s): {}",
                unknown.join(", ")
            )));
        }

        let mut indices = Vec::new();
        for (i, probe) in self.probes.iter().enumerate() {
            if names.iter().any(|n| n == probe.name()) {
                indices.push(i);
            }
        }

        if indices.is_empty() {
            return Err(AppError::validation("No probes selected"));
        }

        self.run_sequence(&indices).await
    }

    /// Clear the transcript, then emit a ready record (clearing is never silent)
    pub fn clear(&self) {
        self.sink.clear();
        self.sink.append(
            Severity::Loading,
            "Results cleared. Ready for new probes.".to_string(),
        );
    }

    async fn run_sequence(&self, indices: &[usize]) -> Result<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(AppError::probe_execution(
                "a probe run is already in progress",
            ));
        }

        let start_message = if indices.len() == self.probes.len() {
            "Running all probes...".to_string()
        } else {
            let selected: Vec<&str> = indices.iter().map(|&i| self.probes[i].name()).collect();
            format!("Running selected probes: {}...", selected.join(", "))
        };

        self.sink.clear();
        self.sink.append(Severity::Loading, start_message);

        for (position, &i) in indices.iter().enumerate() {
            self.run_probe(self.probes[i].as_ref()).await;

            if position + 1 < indices.len() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.sink
            .append(Severity::Success, "All probes completed!".to_string());

        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }
}
