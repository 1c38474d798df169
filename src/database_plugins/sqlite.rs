// ABOUTME: SQLite document store implementation over sqlx
// ABOUTME: Stores schema-less JSON records in a single documents table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! SQLite storage implementation
//!
//! Documents live in one `documents` table: a uuid id, a collection name,
//! and the record body as JSON text. A monotonically increasing `seq` column
//! preserves insertion order for listings.

use super::StorageProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

/// SQLite document storage
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    fn is_memory(database_url: &str) -> bool {
        database_url.contains(":memory:")
    }
}

#[async_trait]
impl StorageProvider for SqliteStorage {
    async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid sqlite URL: {database_url}"))?
            .create_if_missing(true);

        // In-memory databases exist per connection, so the pool must hold a
        // single connection open for the lifetime of the store.
        let pool = if Self::is_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<std::time::Duration>)
                .max_lifetime(None::<std::time::Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        Ok(Self { pool })
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                collection TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("failed to create documents table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection)")
            .execute(&self.pool)
            .await
            .context("failed to create collection index")?;

        Ok(())
    }

    async fn create_document(&self, collection: &str, record: &Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(record).context("failed to serialize document body")?;

        sqlx::query(
            "INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(collection)
        .bind(&body)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to insert document into {collection}"))?;

        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>> {
        let rows =
            sqlx::query("SELECT id, body FROM documents WHERE collection = ? ORDER BY seq ASC")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("failed to list documents from {collection}"))?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id");
            let body: String = row.get("body");
            let mut value: Value = serde_json::from_str(&body)
                .with_context(|| format!("corrupt document body in {collection}: {id}"))?;
            if let Value::Object(ref mut map) = value {
                map.insert("_id".to_string(), Value::String(id));
            }
            documents.push(value);
        }

        Ok(documents)
    }
}
