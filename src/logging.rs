//! Structured logging setup.
//!
//! Diagnostics are emitted with `tracing` and written to stderr so they never
//! mix with a document printed on stdout.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `DOCGEN_LOG_LEVEL` | trace/debug/info/warn/error or an `EnvFilter` directive | `warn` |
//! | `DOCGEN_LOG_FORMAT` | `pretty` / `json` | `pretty` |
//!
//! `--verbose` forces the level to `trace`, which shows how the resource DSL
//! was interpreted.

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: pretty for terminals, JSON for machine consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level or filter directive
    pub log_level: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("DOCGEN_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: LogFormat::parse(
                &env::var("DOCGEN_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
        }
    }

    /// Same configuration with the level raised to `trace`.
    pub fn verbose(mut self) -> Self {
        self.log_level = "trace".to_string();
        self
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level '{}'", config.log_level))?;

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
