// ABOUTME: Document storage abstraction for the Fit Hall API
// ABOUTME: Plugin architecture with a SQLite backend behind the StorageProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Storage Gateway
//!
//! Documents are schema-less JSON records keyed by a collection name. Routes
//! depend only on the [`StorageProvider`] capability trait, never on a
//! concrete store, so backends can be swapped without touching handlers.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub mod factory;
pub mod sqlite;

/// Core storage abstraction trait
///
/// All storage backends implement this trait to provide a consistent
/// interface for the application layer. Two operations cover the whole API
/// surface: create a document in a named collection, and fetch all documents
/// from a named collection.
#[async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    /// Create a new storage connection from a database URL
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run migrations to set up the document schema
    async fn migrate(&self) -> Result<()>;

    /// Store a record in the named collection, returning the new document id
    async fn create_document(&self, collection: &str, record: &Value) -> Result<String>;

    /// Fetch all documents from the named collection in insertion order
    ///
    /// Each returned object carries its document id under `_id`.
    async fn list_documents(&self, collection: &str) -> Result<Vec<Value>>;
}
