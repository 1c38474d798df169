// ABOUTME: Body recomposition route handlers for metrics submission and plan generation
// ABOUTME: Validates input, runs the recommendation engine, and best-effort persists results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Body recomposition routes
//!
//! Two endpoints: a dedicated metrics submission endpoint where persistence
//! failure is a hard error, and a recommendation endpoint where persistence
//! is best-effort and never blocks the response.

use crate::constants::collections;
use crate::context::ServerResources;
use crate::database_plugins::StorageProvider;
use crate::errors::{AppError, ErrorCode};
use crate::intelligence::generate_recommendation;
use crate::models::{BodyMetrics, Recommendation};
use crate::routes::CreatedResponse;
use crate::validation::validate_body_metrics;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{debug, warn};

/// Body recomposition routes
pub struct RecompositionRoutes;

impl RecompositionRoutes {
    /// Create all recomposition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recomposition/metrics",
                post(Self::handle_submit_metrics),
            )
            .route(
                "/api/recomposition/recommend",
                post(Self::handle_recommend),
            )
            .with_state(resources)
    }

    fn validated(metrics: &BodyMetrics) -> Result<(), AppError> {
        validate_body_metrics(metrics).map_err(|violations| {
            AppError::out_of_range("body metrics failed validation").with_details(
                serde_json::json!({
                    "violations": violations
                }),
            )
        })
    }

    fn to_record<T: serde::Serialize>(record: &T) -> Result<serde_json::Value, AppError> {
        serde_json::to_value(record)
            .map_err(|e| AppError::new(ErrorCode::SerializationError, e.to_string()))
    }

    /// Handle dedicated metrics submission
    ///
    /// Persistence failure here surfaces as a server error, unlike the
    /// best-effort save in the recommend flow.
    async fn handle_submit_metrics(
        State(resources): State<Arc<ServerResources>>,
        Json(metrics): Json<BodyMetrics>,
    ) -> Result<Json<CreatedResponse>, AppError> {
        Self::validated(&metrics)?;

        let record = Self::to_record(&metrics)?;
        let id = resources
            .database
            .create_document(collections::BODY_METRIC, &record)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(Json(CreatedResponse::new(id)))
    }

    /// Handle plan recommendation
    ///
    /// Runs the pure engine, then attempts to persist the metrics and the
    /// linked recommendation. The response carries the recommendation as
    /// computed; the persisted copy (not the response) receives the metrics
    /// document id as its back-reference.
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        Json(metrics): Json<BodyMetrics>,
    ) -> Result<Json<Recommendation>, AppError> {
        Self::validated(&metrics)?;

        let recommendation = generate_recommendation(&metrics);

        Self::persist_best_effort(&resources, &metrics, &recommendation).await;

        Ok(Json(recommendation))
    }

    /// Fire-and-forget persistence of metrics and recommendation
    ///
    /// Failures are logged at the boundary and deliberately discarded; a
    /// storage outage must never block a recommendation response. Note this
    /// stores the metrics under the same collection as the dedicated
    /// submission endpoint, so one recommend call can leave a second metrics
    /// document behind.
    async fn persist_best_effort(
        resources: &Arc<ServerResources>,
        metrics: &BodyMetrics,
        recommendation: &Recommendation,
    ) {
        let metrics_record = match serde_json::to_value(metrics) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping best-effort save, metrics not serializable: {e}");
                return;
            }
        };

        let metric_id = match resources
            .database
            .create_document(collections::BODY_METRIC, &metrics_record)
            .await
        {
            Ok(id) => {
                debug!("stored body metrics copy for recommendation: {id}");
                id
            }
            Err(e) => {
                warn!("best-effort metrics save failed: {e}");
                return;
            }
        };

        let mut stored = recommendation.clone();
        stored.body_metric_id = Some(metric_id);

        let stored_record = match serde_json::to_value(&stored) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping best-effort save, recommendation not serializable: {e}");
                return;
            }
        };

        if let Err(e) = resources
            .database
            .create_document(collections::RECOMMENDATION, &stored_record)
            .await
        {
            warn!("best-effort recommendation save failed: {e}");
        }
    }
}
