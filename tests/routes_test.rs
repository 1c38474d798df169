// ABOUTME: HTTP-level integration tests for the Fit Hall API routes
// ABOUTME: Drives the assembled router with oneshot requests over in-memory storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Route integration tests

mod common;

use anyhow::Result;
use axum::body::Body;
use axum::Router;
use fithall::{context::ServerResources, database_plugins::factory::Database, server};
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => Request::builder().method(method).uri(uri).body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn valid_metrics() -> Value {
    json!({
        "gender": "female",
        "age": 30,
        "height_cm": 165.0,
        "weight_kg": 70.0,
        "body_fat_pct": 28.0,
        "activity_level": "sedentary",
        "goal": "fat_loss"
    })
}

#[tokio::test]
async fn test_root_banner_and_health() -> Result<()> {
    let router = common::create_test_router().await?;

    let (status, body) = send_json(&router, Method::GET, "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fit Hall Backend Running");

    let (status, body) = send_json(&router, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn test_member_create_then_list() -> Result<()> {
    let router = common::create_test_router().await?;

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/members",
        Some(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+62-811-0001"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let created_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(&router, Method::GET, "/api/members", None).await?;
    assert_eq!(status, StatusCode::OK);
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["_id"], created_id.as_str());
    assert_eq!(members[0]["plan"], "basic");
    assert_eq!(members[0]["active"], true);
    Ok(())
}

#[tokio::test]
async fn test_contact_and_bookings_create() -> Result<()> {
    let router = common::create_test_router().await?;

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/contact",
        Some(json!({"name": "Eka", "email": "eka@example.com", "message": "Opening hours?"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, _) = send_json(
        &router,
        Method::POST,
        "/api/bookings/class",
        Some(json!({"member_id": "m1", "class_id": "c1", "date": "2026-09-01"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        &router,
        Method::POST,
        "/api/bookings/trainer",
        Some(json!({
            "member_id": "m1",
            "trainer_id": "t1",
            "datetime_iso": "2026-09-01T10:00:00Z"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_trainers_and_classes_list_empty() -> Result<()> {
    let router = common::create_test_router().await?;

    for uri in ["/api/trainers", "/api/classes"] {
        let (status, body) = send_json(&router, Method::GET, uri, None).await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_metrics_submission_stores_document() -> Result<()> {
    let router = common::create_test_router().await?;

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/metrics",
        Some(valid_metrics()),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert!(body["id"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_metrics_validation_rejects_out_of_range() -> Result<()> {
    let router = common::create_test_router().await?;

    let mut metrics = valid_metrics();
    metrics["age"] = json!(9);
    metrics["weight_kg"] = json!(500.0);

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/metrics",
        Some(metrics),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");

    let violations = body["error"]["details"]["violations"].as_array().unwrap();
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["age", "weight_kg"]);
    Ok(())
}

#[tokio::test]
async fn test_recommend_returns_plan() -> Result<()> {
    let router = common::create_test_router().await?;

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/recommend",
        Some(valid_metrics()),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    // Response carries the engine output; back-reference stays unset here
    assert!(body["body_metric_id"].is_null());
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .ends_with("prioritize sleep and steps."));
    let plan = body["weekly_plan"].as_array().unwrap();
    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0]["name"], "Treadmill Intervals");
    assert_eq!(plan[0]["frequency_per_week"], 2);
    Ok(())
}

#[tokio::test]
async fn test_recommend_persistence_is_observable_in_storage() -> Result<()> {
    use fithall::database_plugins::StorageProvider;

    let database = common::create_test_database().await?;
    let resources = Arc::new(ServerResources::new(database, common::test_config()));
    let router = server::build_router(resources.clone());

    let (status, _) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/recommend",
        Some(valid_metrics()),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let metrics_docs = resources.database.list_documents("bodymetric").await?;
    assert_eq!(metrics_docs.len(), 1);
    let metric_id = metrics_docs[0]["_id"].as_str().unwrap();

    let rec_docs = resources.database.list_documents("recommendation").await?;
    assert_eq!(rec_docs.len(), 1);
    assert_eq!(rec_docs[0]["body_metric_id"], metric_id);
    Ok(())
}

#[tokio::test]
async fn test_recommend_survives_storage_outage() -> Result<()> {
    use fithall::database_plugins::StorageProvider;

    common::init_test_logging();
    // Skipping migration leaves no documents table, so every save fails
    let database = Database::new("sqlite::memory:").await?;
    let resources = Arc::new(ServerResources::new(database, common::test_config()));
    let router = server::build_router(resources);

    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/recommend",
        Some(valid_metrics()),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekly_plan"].as_array().unwrap().len(), 3);

    // The dedicated metrics endpoint surfaces the same outage as a 500
    let (status, body) = send_json(
        &router,
        Method::POST,
        "/api/recomposition/metrics",
        Some(valid_metrics()),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    Ok(())
}
