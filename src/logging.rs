//! Structured logging initialization
//!
//! Sets up a `tracing` subscriber with an env filter and either pretty or JSON
//! output on stderr. The router itself only emits events; installing a
//! subscriber is left to the binary (or to the embedding server).
//!
//! ## Environment Variables
//!
//! | Variable                          | Default  | Meaning                                 |
//! |-----------------------------------|----------|-----------------------------------------|
//! | `TRIEROUTER_LOG_LEVEL`            | `info`   | trace / debug / info / warn / error     |
//! | `TRIEROUTER_LOG_FORMAT`           | `pretty` | `pretty` or `json`                      |
//! | `TRIEROUTER_LOG_TARGET_FILTER`    | unset    | extra directives, e.g. `trierouter=debug` |
//! | `TRIEROUTER_LOG_INCLUDE_LOCATION` | `false`  | include file:line                       |
//! | `TRIEROUTER_LOG_ASYNC`            | `false`  | buffer output on a background thread    |
//!
//! `RUST_LOG`, when set, takes precedence over `TRIEROUTER_LOG_LEVEL`.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for log shippers, pretty-print for terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Module filter (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
    /// Enable async buffered logging
    pub async_logging: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: false,
            async_logging: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("TRIEROUTER_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: lookup("TRIEROUTER_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            target_filter: lookup("TRIEROUTER_LOG_TARGET_FILTER").filter(|s| !s.trim().is_empty()),
            include_location: lookup("TRIEROUTER_LOG_INCLUDE_LOCATION")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
            async_logging: lookup("TRIEROUTER_LOG_ASYNC")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.async_logging),
        }
    }

    /// Create a verbose configuration for local debugging
    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
            async_logging: false,
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let mut env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if filter.is_empty() {
                    continue;
                }
                match filter.parse() {
                    Ok(directive) => env_filter = env_filter.add_directive(directive),
                    Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
                }
            }
        }

        env_filter
    }
}

/// Initialize logging with the given configuration
///
/// # Example
///
/// ```no_run
/// use trierouter::logging::{init_logging_with_config, LogConfig};
///
/// init_logging_with_config(&LogConfig::from_env())
///     .expect("Failed to initialize logging");
/// ```
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        registry
            .with(fmt_layer(config, non_blocking))
            .try_init()
            .context("Failed to initialize async logging")?;
        // Keep the worker alive for the lifetime of the process
        std::mem::forget(guard);
    } else {
        registry
            .with(fmt_layer(config, std::io::stderr))
            .try_init()
            .context("Failed to initialize sync logging")?;
    }

    Ok(())
}

fn fmt_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
    }
}
