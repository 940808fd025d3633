// ABOUTME: Logging configuration and structured logging setup for the tracker
// ABOUTME: Chooses level and output format from the environment and writes all logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Stdout belongs to command output (`list --json` must stay parseable), so
//! every format writes to stderr.

use std::env;
use std::io;

use anyhow::Result;
use tracing::{debug, Level};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::constants::{env_vars, service_names};

/// HTTP stack crates whose debug output drowns out lookup logs
const QUIET_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info` or `healthy_bytes=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Service name reported at startup
    pub service_name: String,
    /// Service version reported at startup
    pub service_version: String,
    /// Deployment environment (development, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Full human-readable lines
    Pretty,
    /// Short lines without targets, for the terminal
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO.as_str().to_lowercase(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::HEALTHY_BYTES.to_owned(),
            service_version: service_names::SERVICE_VERSION.to_owned(),
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, and `SERVICE_NAME`
    ///
    /// Production turns on location and thread details.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var(env_vars::ENVIRONMENT).unwrap_or(defaults.environment);
        let production = environment.eq_ignore_ascii_case("production");

        Self {
            level: env::var(env_vars::RUST_LOG).unwrap_or(defaults.level),
            format: env::var(env_vars::LOG_FORMAT)
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: production || env::var_os(env_vars::LOG_INCLUDE_LOCATION).is_some(),
            include_thread: production || env::var_os(env_vars::LOG_INCLUDE_THREAD).is_some(),
            service_name: env::var(env_vars::SERVICE_NAME).unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Terminal settings: compact and quiet unless asked otherwise
    ///
    /// `verbose` forces `debug`; explicit `RUST_LOG` / `LOG_FORMAT` still win
    /// over the quiet defaults.
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let mut config = Self::from_env();
        if verbose {
            config.level = Level::DEBUG.as_str().to_lowercase();
        } else if env::var_os(env_vars::RUST_LOG).is_none() {
            config.level = Level::WARN.as_str().to_lowercase();
        }
        if env::var_os(env_vars::LOG_FORMAT).is_none() {
            config.format = LogFormat::Compact;
        }
        config
    }

    /// The configured level plus `warn` caps for the HTTP stack
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        QUIET_TARGETS
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, target| {
                let directive: Directive = format!("{target}=warn")
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into());
                filter.add_directive(directive)
            })
    }

    fn output_layer(&self) -> BoxedLayer {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread);

        match self.format {
            LogFormat::Json => layer.json().with_current_span(true).boxed(),
            LogFormat::Pretty => layer.with_target(true).boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.output_layer())
            .with(self.env_filter())
            .try_init()?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}
