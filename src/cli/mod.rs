//! Command-line interface definition and validation

use clap::{ArgAction, Parser};

/// API Connection Tester - sequential backend health and auth probes
#[derive(Parser, Debug, Clone)]
#[command(name = "api-connection-tester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the backend API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Email for the login probe
    #[arg(long)]
    pub email: Option<String>,

    /// Password for the login probe
    #[arg(long)]
    pub password: Option<String>,

    /// Pause between probes in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub delay: Option<u64>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Run only the named probe (can be used multiple times; order is fixed)
    #[arg(long = "probe", value_name = "NAME", action = ArgAction::Append)]
    pub probes: Vec<String>,

    /// Do not retain session cookies between probes
    #[arg(long)]
    pub no_credentials: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        for name in &self.probes {
            if !crate::probe::is_known_probe(name) {
                return Err(format!(
                    "Unknown probe '{}'. Available probes: {}",
                    name,
                    crate::probe::probe_names().join(", ")
                ));
            }
        }

        Ok(())
    }

    /// Resolve the color setting, falling back to the configured default
    pub fn use_colors(&self, default: bool) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let cli = Cli::parse_from(["act"]);
        assert!(cli.base_url.is_none());
        assert!(cli.probes.is_empty());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_color_conflict_rejected() {
        let cli = Cli::parse_from(["act", "--color", "--no-color"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("--color"));
    }

    #[test]
    fn test_unknown_probe_rejected() {
        let cli = Cli::parse_from(["act", "--probe", "teapot"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("teapot"));
        assert!(err.contains("health"));
    }

    #[test]
    fn test_known_probes_accepted() {
        let cli = Cli::parse_from(["act", "--probe", "health", "--probe", "login"]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.probes, vec!["health", "login"]);
    }

    #[test]
    fn test_use_colors_resolution() {
        let cli = Cli::parse_from(["act", "--color"]);
        assert!(cli.use_colors(false));

        let cli = Cli::parse_from(["act", "--no-color"]);
        assert!(!cli.use_colors(true));

        let cli = Cli::parse_from(["act"]);
        assert!(cli.use_colors(true));
        assert!(!cli.use_colors(false));
    }
}
