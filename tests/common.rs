// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory storage, server resources, and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

#![allow(dead_code)]

//! Shared test utilities for `fithall`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use axum::Router;
use fithall::{
    config::environment::{CorsConfig, DatabaseConfig, DatabaseUrl, ServerConfig},
    context::ServerResources,
    database_plugins::{factory::Database, StorageProvider},
    server,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test configuration against an in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: "warn".to_string(),
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            auto_migrate: true,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_string(),
        },
    }
}

/// Standard test database setup (migrated, in-memory)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    database.migrate().await?;
    Ok(database)
}

/// Full server resources over an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(database, test_config())))
}

/// Application router over fresh in-memory resources
pub async fn create_test_router() -> Result<Router> {
    Ok(server::build_router(create_test_resources().await?))
}
