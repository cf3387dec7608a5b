//! API Connection Tester - Main CLI Application
//!
//! Sequentially probes a backend API's health, login, and authentication
//! status endpoints and prints a timestamped pass/fail transcript.

use api_connection_tester::{
    cli::Cli,
    config::load_config,
    error::{AppError, Result},
    output::formatter_for,
    runner::SequentialRunner,
    transcript::{ConsoleTranscript, Severity, TranscriptSink},
    PKG_NAME, VERSION,
};
use clap::Parser;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    let use_color = cli.use_colors(true);
    if let Err(e) = run_application(cli).await {
        eprintln!("{}", e.format_for_console(use_color));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let config = load_config(&cli)?;

    if config.debug {
        println!("Configuration loaded successfully:");
        for line in config.summary().lines() {
            println!("  {}", line);
        }
        println!();
    }

    let formatter = formatter_for(config.enable_color);
    let sink: Arc<dyn TranscriptSink> = Arc::new(ConsoleTranscript::new(formatter));
    let runner = SequentialRunner::from_config(&config, sink.clone())?;

    if config.verbose {
        println!("Probing {} ...", config.base_url);
        println!();
    }

    if cli.probes.is_empty() {
        runner.run_all().await?;
    } else {
        runner.run_named(&cli.probes).await?;
    }

    let records = sink.snapshot();
    let error_count = sink.error_count();

    if config.verbose {
        println!();
        println!(
            "Transcript: {} records, {} passed, {} failed",
            records.len(),
            records
                .iter()
                .filter(|r| r.severity == Severity::Success)
                .count(),
            error_count
        );
    }

    if error_count > 0 {
        Err(AppError::probe_execution(format!(
            "{} probe(s) failed - check the transcript above",
            error_count
        )))
    } else {
        Ok(())
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Base URL must start with http:// or https://");
            eprintln!("  - Probe names: health, login, auth-status");
        }
        AppError::Network(_) | AppError::Timeout(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Make sure the backend server is running");
            eprintln!("  - Check the base URL and port (--base-url)");
            eprintln!("  - Increase the timeout with --timeout");
        }
        AppError::ProbeExecution(_) => {
            eprintln!();
            eprintln!("Probe troubleshooting:");
            eprintln!("  - Inspect the error records in the transcript");
            eprintln!("  - Re-run a single probe with --probe <name>");
            eprintln!("  - Use --debug to see the resolved configuration");
        }
        _ => {}
    }
}
