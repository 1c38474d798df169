// ABOUTME: Membership route handlers for member registration and listing
// ABOUTME: Generic create/list operations over the member collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Membership routes

use crate::constants::collections;
use crate::context::ServerResources;
use crate::database_plugins::StorageProvider;
use crate::errors::{AppError, ErrorCode};
use crate::models::Member;
use crate::routes::CreatedResponse;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

/// Membership routes
pub struct MemberRoutes;

impl MemberRoutes {
    /// Create all membership routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/members",
                post(Self::handle_create_member).get(Self::handle_list_members),
            )
            .with_state(resources)
    }

    /// Handle member registration
    async fn handle_create_member(
        State(resources): State<Arc<ServerResources>>,
        Json(member): Json<Member>,
    ) -> Result<Json<CreatedResponse>, AppError> {
        let record = serde_json::to_value(&member)
            .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))?;

        let id = resources
            .database
            .create_document(collections::MEMBER, &record)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(CreatedResponse::new(id)))
    }

    /// Handle member listing
    async fn handle_list_members(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<serde_json::Value>>, AppError> {
        let items = resources
            .database
            .list_documents(collections::MEMBER)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(items))
    }
}
