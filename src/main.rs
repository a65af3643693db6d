use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::prelude::*;

use intake_form::adapters::ConsoleRunner;
use intake_form::config::{AppConfig, LogFormat, LoggingConfig};

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);
    info!("Intake form ready, reading events from stdin");

    let mut runner = ConsoleRunner::new(config.intake);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match runner.run(stdin.lock(), stdout.lock()) {
        Ok(()) => {
            info!("Input closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Console I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the event protocol.
fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}
