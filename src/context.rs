// ABOUTME: Shared server resources container passed to route handlers
// ABOUTME: Bundles storage and configuration behind a single Arc for axum state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Shared server resources
//!
//! Constructed once at startup and handed to every route module as
//! `Arc<ServerResources>` via axum state.

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use std::sync::Arc;

/// Immutable resources shared across all request handlers
pub struct ServerResources {
    /// Document storage backend
    pub database: Arc<Database>,
    /// Server configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle storage and configuration for route handlers
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }
}
