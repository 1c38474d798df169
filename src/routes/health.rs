// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides banner, health, and readiness endpoints with a live storage probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Health check routes for service monitoring

use crate::constants::service;
use crate::context::ServerResources;
use crate::database_plugins::StorageProvider;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_root() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "message": service::ROOT_BANNER
        }))
    }

    /// Health status including a live storage probe
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        // An empty listing exercises the connection and the schema without
        // touching real data.
        let database_status = match resources.database.list_documents("healthcheck").await {
            Ok(_) => "healthy",
            Err(_) => "unhealthy",
        };

        Json(serde_json::json!({
            "status": if database_status == "healthy" { "healthy" } else { "degraded" },
            "service": service::SERVICE_NAME,
            "version": service::SERVER_VERSION,
            "database": {
                "status": database_status,
                "backend": resources.database.backend_info(),
            },
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
