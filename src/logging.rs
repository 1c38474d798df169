// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats for the Fit Hall API server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Production-ready logging configuration with structured output

use crate::constants::service;
use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: service::SERVICE_NAME.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG")
            .or_else(|_| env::var("LOG_LEVEL"))
            .unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service::SERVICE_NAME.into()),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        // Noise reduction for dependency internals regardless of RUST_LOG
        let env_filter = EnvFilter::new(&self.level)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "sqlx=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "tower_http=info"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().with_target(true).json())
                .try_init()?,
            LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init()?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false))
                .try_init()?,
        }

        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, service::SERVICE_NAME);
    }
}
