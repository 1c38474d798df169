// ABOUTME: Environment-driven server configuration
// ABOUTME: Parses ports, database URL, CORS origins, and log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Server configuration loaded from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `HTTP_PORT` | `8081` |
//! | `DATABASE_URL` | `sqlite:./data/fithall.db` |
//! | `CORS_ALLOWED_ORIGINS` | `*` |
//! | `LOG_LEVEL` | `info` |

use crate::constants::defaults;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Database connection URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// File-backed SQLite database
    SQLite { path: PathBuf },
    /// In-memory SQLite database (tests, ephemeral deployments)
    Memory,
}

impl DatabaseUrl {
    /// Parse a database URL string
    ///
    /// # Errors
    ///
    /// Returns an error for URL schemes other than `sqlite:`.
    pub fn parse_url(url: &str) -> Result<Self> {
        if url == "sqlite::memory:" || url.contains(":memory:") {
            Ok(Self::Memory)
        } else if let Some(path) = url.strip_prefix("sqlite:") {
            Ok(Self::SQLite {
                path: PathBuf::from(path),
            })
        } else {
            anyhow::bail!("unsupported database URL: {url}")
        }
    }

    /// Render back to a connection string for the storage layer
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_string(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/fithall.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: DatabaseUrl,
    /// Run migrations on startup
    pub auto_migrate: bool,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but unparseable.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(port) => port.parse().context("Invalid HTTP_PORT value")?,
            Err(_) => defaults::HTTP_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_string());

        let auto_migrate = env::var("AUTO_MIGRATE")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("Invalid AUTO_MIGRATE value")?;

        Ok(Self {
            http_port,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&database_url)
                    .context("Invalid DATABASE_URL value")?,
                auto_migrate,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database={} auto_migrate={} cors_origins={} log_level={}",
            self.http_port,
            self.database.url,
            self.database.auto_migrate,
            self.cors.allowed_origins,
            self.log_level
        )
    }
}
