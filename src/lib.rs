// ABOUTME: Main library entry point for the Fit Hall gym backend
// ABOUTME: Provides REST API routes, document storage, and the workout recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

#![deny(unsafe_code)]

//! # Fit Hall API Server
//!
//! Backend API for a gym business. Accepts and stores member, trainer, class,
//! booking, and contact records as schema-less documents, and produces a
//! rule-based weekly workout recommendation from a client's body metrics.
//!
//! ## Architecture
//!
//! - **Models**: Domain records and enums shared across routes and storage
//! - **Intelligence**: Pure recommendation engine (`BodyMetrics` -> `Recommendation`)
//! - **Database plugins**: Document storage behind the `StorageProvider` trait
//! - **Routes**: Thin axum handlers organized by domain
//! - **Config**: Environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fithall::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Fit Hall API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;
/// Application constants (collection names, service metadata)
pub mod constants;
/// Shared server resources handed to route handlers
pub mod context;
/// Document storage abstraction with pluggable backends
pub mod database_plugins;
/// Unified error handling and HTTP error responses
pub mod errors;
/// Rule-based workout recommendation engine
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Domain data models
pub mod models;
/// HTTP middleware (CORS)
pub mod middleware;
/// HTTP routes organized by domain
pub mod routes;
/// Router assembly and server startup
pub mod server;
/// Body metrics range validation
pub mod validation;
