//! Configuration model, validation, and loading
//!
//! Configuration is assembled in layers: built-in defaults, then a `.env`
//! file, then process environment variables, then CLI overrides, then a
//! final validation pass.

use crate::cli::Cli;
use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend API (probe paths are joined to this)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Demo account email used by the login probe
    #[serde(default = "default_email")]
    pub email: String,

    /// Demo account password used by the login probe
    #[serde(default = "default_password")]
    pub password: String,

    /// Fixed pause between probes in milliseconds
    #[serde(default = "default_probe_delay_ms")]
    pub probe_delay_ms: u64,

    /// Request timeout duration in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,

    /// Retain and send session cookies across probes
    #[serde(default = "default_include_credentials")]
    pub include_credentials: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            email: default_email(),
            password: default_password(),
            probe_delay_ms: default_probe_delay_ms(),
            timeout_seconds: default_timeout_secs(),
            include_credentials: default_include_credentials(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get inter-probe delay as Duration
    pub fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(AppError::config("Base URL cannot be empty"));
        }

        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(AppError::config(format!(
                        "Base URL must use http or https: {}",
                        self.base_url
                    )));
                }
            }
            Err(e) => {
                return Err(AppError::config(format!(
                    "Invalid base URL '{}': {}",
                    self.base_url, e
                )));
            }
        }

        if self.email.is_empty() {
            return Err(AppError::config("Login email cannot be empty"));
        }

        if self.probe_delay_ms > 60_000 {
            return Err(AppError::config("Probe delay cannot exceed 60000 ms"));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::config("Timeout must be greater than 0"));
        }

        if self.timeout_seconds > 300 {
            return Err(AppError::config("Timeout cannot exceed 300 seconds"));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            self.base_url = base_url.trim().to_string();
        }

        if let Ok(email) = std::env::var("API_EMAIL") {
            self.email = email.trim().to_string();
        }

        if let Ok(password) = std::env::var("API_PASSWORD") {
            self.password = password;
        }

        if let Ok(delay) = std::env::var("PROBE_DELAY_MS") {
            self.probe_delay_ms = delay.trim().parse()?;
        }

        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT") {
            self.timeout_seconds = timeout.trim().parse()?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()?;
        }

        Ok(())
    }

    /// Summary of the resolved configuration for debug output
    pub fn summary(&self) -> String {
        let mut summary = Vec::new();

        summary.push(format!("Base URL: {}", self.base_url));
        summary.push(format!("Login email: {}", self.email));
        summary.push(format!("Probe delay: {}ms", self.probe_delay_ms));
        summary.push(format!("Timeout: {}s", self.timeout_seconds));
        summary.push(format!("Include credentials: {}", self.include_credentials));
        summary.push(format!("Color output: {}", self.enable_color));

        summary.join("\n")
    }
}

/// Load complete configuration from CLI arguments and the environment
pub fn load_config(cli: &Cli) -> Result<Config> {
    // Start with default configuration
    let mut config = Config::default();

    // Load .env file if present; a missing file is not an error
    if dotenv::dotenv().is_ok() && cli.debug {
        println!("Loaded environment from .env file");
    }

    // Merge environment variables into config
    config.merge_from_env()?;

    // Override with CLI arguments
    apply_cli_overrides(cli, &mut config);

    // Validate the final configuration
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(cli: &Cli, config: &mut Config) {
    if let Some(ref base_url) = cli.base_url {
        config.base_url = base_url.clone();
    }

    if let Some(ref email) = cli.email {
        config.email = email.clone();
    }

    if let Some(ref password) = cli.password {
        config.password = password.clone();
    }

    if let Some(delay) = cli.delay {
        config.probe_delay_ms = delay;
    }

    if let Some(timeout) = cli.timeout {
        config.timeout_seconds = timeout;
    }

    if cli.no_credentials {
        config.include_credentials = false;
    }

    config.enable_color = cli.use_colors(config.enable_color);
    config.verbose = cli.verbose;
    config.debug = cli.debug;
}

fn default_base_url() -> String {
    defaults::DEFAULT_BASE_URL.to_string()
}

fn default_email() -> String {
    defaults::DEFAULT_EMAIL.to_string()
}

fn default_password() -> String {
    defaults::DEFAULT_PASSWORD.to_string()
}

fn default_probe_delay_ms() -> u64 {
    defaults::DEFAULT_PROBE_DELAY.as_millis() as u64
}

fn default_timeout_secs() -> u64 {
    defaults::DEFAULT_TIMEOUT.as_secs()
}

fn default_include_credentials() -> bool {
    defaults::DEFAULT_INCLUDE_CREDENTIALS
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}
