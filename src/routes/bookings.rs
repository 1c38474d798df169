// ABOUTME: Booking route handlers for class and trainer session reservations
// ABOUTME: Generic create operations over the booking collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Booking routes
//!
//! Bookings reference member, class, and trainer documents by id only; no
//! referential integrity is enforced at this layer.

use crate::constants::collections;
use crate::context::ServerResources;
use crate::database_plugins::StorageProvider;
use crate::errors::{AppError, ErrorCode};
use crate::models::{ClassBooking, TrainerBooking};
use crate::routes::CreatedResponse;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

/// Booking routes
pub struct BookingRoutes;

impl BookingRoutes {
    /// Create all booking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/bookings/class", post(Self::handle_book_class))
            .route("/api/bookings/trainer", post(Self::handle_book_trainer))
            .with_state(resources)
    }

    /// Handle class booking
    async fn handle_book_class(
        State(resources): State<Arc<ServerResources>>,
        Json(booking): Json<ClassBooking>,
    ) -> Result<Json<CreatedResponse>, AppError> {
        let record = serde_json::to_value(&booking)
            .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))?;

        let id = resources
            .database
            .create_document(collections::CLASS_BOOKING, &record)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(CreatedResponse::new(id)))
    }

    /// Handle trainer session booking
    async fn handle_book_trainer(
        State(resources): State<Arc<ServerResources>>,
        Json(booking): Json<TrainerBooking>,
    ) -> Result<Json<CreatedResponse>, AppError> {
        let record = serde_json::to_value(&booking)
            .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))?;

        let id = resources
            .database
            .create_document(collections::TRAINER_BOOKING, &record)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(CreatedResponse::new(id)))
    }
}
