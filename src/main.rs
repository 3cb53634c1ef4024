//! Contact Assistant - Main entry point
//!
//! Runs one interactive session over stdin/stdout. Logs go to stderr only,
//! so stdout stays a clean protocol surface.

use anyhow::Result;
use contact_assistant::repl;
use contact_assistant::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting the interactive protocol)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact assistant");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run_session(stdin.lock(), stdout.lock(), &config.prompt) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
