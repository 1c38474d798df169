// ABOUTME: Public content route handlers for the company profile pages
// ABOUTME: Contact form submission plus trainer and class listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Public content routes
//!
//! These endpoints back the public website: a contact form and read-only
//! listings of trainers and scheduled classes. No authentication.

use crate::constants::collections;
use crate::context::ServerResources;
use crate::database_plugins::StorageProvider;
use crate::errors::{AppError, ErrorCode};
use crate::models::ContactMessage;
use crate::routes::CreatedResponse;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Public content routes
pub struct ContentRoutes;

impl ContentRoutes {
    /// Create all public content routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/contact", post(Self::handle_submit_contact))
            .route("/api/trainers", get(Self::handle_list_trainers))
            .route("/api/classes", get(Self::handle_list_classes))
            .with_state(resources)
    }

    /// Handle contact form submission
    async fn handle_submit_contact(
        State(resources): State<Arc<ServerResources>>,
        Json(message): Json<ContactMessage>,
    ) -> Result<Json<CreatedResponse>, AppError> {
        let record = serde_json::to_value(&message)
            .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))?;

        let id = resources
            .database
            .create_document(collections::CONTACT_MESSAGE, &record)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(CreatedResponse::new(id)))
    }

    /// Handle trainer listing
    async fn handle_list_trainers(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<serde_json::Value>>, AppError> {
        let items = resources
            .database
            .list_documents(collections::TRAINER)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(items))
    }

    /// Handle class listing
    async fn handle_list_classes(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<serde_json::Value>>, AppError> {
        let items = resources
            .database
            .list_documents(collections::GYM_CLASS)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(items))
    }
}
