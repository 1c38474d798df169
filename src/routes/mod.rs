// ABOUTME: Route module organization for Fit Hall API HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Route module for the Fit Hall API
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to the storage layer
//! or the recommendation engine.

use serde::{Deserialize, Serialize};

/// Class and trainer booking routes
pub mod bookings;
/// Public content routes (contact form, trainer and class listings)
pub mod content;
/// Health check and system status routes
pub mod health;
/// Membership routes
pub mod members;
/// Body recomposition routes (metrics submission, recommendations)
pub mod recomposition;

/// Booking route handlers
pub use bookings::BookingRoutes;
/// Public content route handlers
pub use content::ContentRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Membership route handlers
pub use members::MemberRoutes;
/// Body recomposition route handlers
pub use recomposition::RecompositionRoutes;

/// Standard response for document creation endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Always true on success
    pub ok: bool,
    /// Id of the created document
    pub id: String,
}

impl CreatedResponse {
    #[must_use]
    pub fn new(id: String) -> Self {
        Self { ok: true, id }
    }
}
