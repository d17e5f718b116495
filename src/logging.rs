// ABOUTME: Logging configuration and structured logging setup for the Wellpath CLI and embedders
// ABOUTME: Configures log level, output format, and stderr output on top of tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

//! Structured logging setup
//!
//! All output goes to stderr so that stdout stays reserved for JSON results.

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wellpath_core::constants::service_names;

/// Level used when `RUST_LOG` is unset or not a valid directive
pub const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::WELLPATH_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT").map_or(defaults.format, |v| LogFormat::parse(&v)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Raise the level to `debug` for `--verbose` runs
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = "debug".into();
        }
        self
    }

    /// Build the `EnvFilter` for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter directive
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| anyhow!("Invalid log filter '{}': {e}", self.level))
    }

    /// Level the subscriber actually applies
    #[must_use]
    pub fn effective_level(&self) -> &str {
        if self.env_filter().is_ok() {
            &self.level
        } else {
            DEFAULT_LEVEL
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// An invalid level falls back to [`DEFAULT_LEVEL`] and is reported once
    /// logging is up.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let (filter, rejected) = match self.env_filter() {
            Ok(filter) => (filter, None),
            Err(error) => (EnvFilter::new(DEFAULT_LEVEL), Some(error)),
        };
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry
                    .with(json_layer)
                    .try_init()
                    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry
                    .with(pretty_layer)
                    .try_init()
                    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry
                    .with(compact_layer)
                    .try_init()
                    .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            }
        }

        if let Some(error) = rejected {
            warn!(error = %error, fallback = DEFAULT_LEVEL, "Ignoring invalid log filter");
        }
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.effective_level(),
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from the environment, raising the level when `verbose`
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_logging(verbose: bool) -> Result<()> {
    LoggingConfig::from_env().verbose(verbose).init()
}
