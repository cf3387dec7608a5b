//! Probe definitions
//!
//! A probe performs one network call against the backend and maps the
//! response to transcript entries. Probes surface every failure as an
//! `Err`; the runner converts that into a single error record, so a
//! failing backend always produces a readable transcript instead of a
//! crash.

pub mod auth_status;
pub mod health;
pub mod login;

pub use auth_status::AuthStatusProbe;
pub use health::HealthProbe;
pub use login::LoginProbe;

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::transcript::Severity;
use async_trait::async_trait;
use serde::Deserialize;

/// One message a probe wants appended to the transcript
#[derive(Debug, Clone)]
pub struct ProbeEntry {
    pub severity: Severity,
    pub message: String,
}

impl ProbeEntry {
    /// A success-severity entry
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// An informational entry (not a pass, not a failure)
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Loading,
            message: message.into(),
        }
    }
}

/// A single named check against the backend API
#[async_trait]
pub trait Probe: Send + Sync {
    /// Short identifier used for probe selection
    fn name(&self) -> &'static str;

    /// In-progress line shown before the probe runs
    fn description(&self) -> &'static str;

    /// Perform the network call and map the response to a verdict
    async fn run(&self, client: &ApiClient) -> Result<Vec<ProbeEntry>>;
}

/// User object returned by the login and auth-status endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// The fixed probe sequence: health, login, auth-status
pub fn default_probes(config: &Config) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(HealthProbe),
        Box::new(LoginProbe::new(&config.email, &config.password)),
        Box::new(AuthStatusProbe),
    ]
}

/// Names of all available probes, in canonical run order
pub fn probe_names() -> Vec<&'static str> {
    vec!["health", "login", "auth-status"]
}

/// Check whether a probe name is recognized
pub fn is_known_probe(name: &str) -> bool {
    probe_names().contains(&name)
}
