// ABOUTME: Router assembly and HTTP server startup for the Fit Hall API
// ABOUTME: Merges domain routers, applies CORS and request tracing, binds the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Router assembly and server startup

use crate::context::ServerResources;
use crate::middleware::setup_cors;
use crate::routes::{BookingRoutes, ContentRoutes, HealthRoutes, MemberRoutes, RecompositionRoutes};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assemble the full application router
///
/// Exposed separately from [`serve`] so integration tests can drive the
/// router directly without binding a socket.
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(ContentRoutes::routes(resources.clone()))
        .merge(MemberRoutes::routes(resources.clone()))
        .merge(BookingRoutes::routes(resources.clone()))
        .merge(RecompositionRoutes::routes(resources.clone()))
        .layer(setup_cors(&resources.config))
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured port and serve requests until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Fit Hall API listening on {addr}");

    axum::serve(listener, build_router(resources)).await?;
    Ok(())
}
