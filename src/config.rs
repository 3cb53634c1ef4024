//! Configuration for the assistant.
//!
//! Everything is optional with sensible defaults; the assistant works with
//! no environment at all. Values are read from the process environment,
//! with an optional `.env` file loaded first. Nothing here prints to
//! stdout, which is reserved for the interactive protocol.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set.
const DEFAULT_LOG_LEVEL: &str = "error";

/// Default interactive prompt.
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Interactive prompt text (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is not an error.
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
