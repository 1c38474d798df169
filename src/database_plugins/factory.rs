// ABOUTME: Storage factory and backend selection from connection strings
// ABOUTME: Provides a unified Database wrapper with runtime backend detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Storage factory for creating providers
//!
//! Detects the backend type from the connection string and constructs the
//! matching implementation.

use super::sqlite::SqliteStorage;
use super::StorageProvider;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    SQLite,
    PostgreSQL,
}

/// Storage instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    SQLite(SqliteStorage),
}

impl Database {
    /// Get a descriptive string for the current storage backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (embedded document store)",
        }
    }

    /// Get the backend type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }
}

#[async_trait]
impl StorageProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting storage backend from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected storage backend: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteStorage::new(database_url).await?;
                info!("SQLite document store initialized");
                Ok(Self::SQLite(db))
            }
            DatabaseType::PostgreSQL => Err(anyhow!(
                "PostgreSQL support is not built into this server; use a sqlite: URL"
            )),
        }
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn create_document(&self, collection: &str, record: &Value) -> Result<String> {
        match self {
            Self::SQLite(db) => db.create_document(collection, record).await,
        }
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>> {
        match self {
            Self::SQLite(db) => db.list_documents(collection).await,
        }
    }
}

/// Automatically detect backend type from a connection string
///
/// # Errors
///
/// Returns an error if the URL scheme is not recognized.
pub fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok(DatabaseType::PostgreSQL)
    } else {
        Err(anyhow!(
            "Unsupported database URL format: {database_url}. Expected sqlite: or postgresql:// prefix"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_sqlite_urls() {
        assert_eq!(
            detect_database_type("sqlite:./data/fithall.db").unwrap(),
            DatabaseType::SQLite
        );
        assert_eq!(
            detect_database_type("sqlite::memory:").unwrap(),
            DatabaseType::SQLite
        );
    }

    #[test]
    fn test_detect_postgres_urls() {
        assert_eq!(
            detect_database_type("postgresql://localhost/fithall").unwrap(),
            DatabaseType::PostgreSQL
        );
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        assert!(detect_database_type("mysql://localhost/fithall").is_err());
    }
}
