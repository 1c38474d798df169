// ABOUTME: HTTP middleware for the Fit Hall API server
// ABOUTME: Currently CORS; request tracing comes from tower-http directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! HTTP middleware

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
