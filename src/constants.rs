// ABOUTME: System-wide constants for the Fit Hall API
// ABOUTME: Contains service metadata, collection names, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Constants Module
//!
//! Application constants and environment-based defaults.

/// Service metadata
pub mod service {
    /// Service name used in logs and health responses
    pub const SERVICE_NAME: &str = "fithall-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Banner returned from the root endpoint
    pub const ROOT_BANNER: &str = "Fit Hall Backend Running";
}

/// Document collection names
///
/// Collection names mirror the record type they hold. Records are stored
/// schema-less, keyed only by these names.
pub mod collections {
    /// Gym members
    pub const MEMBER: &str = "member";
    /// Trainers and coaches
    pub const TRAINER: &str = "trainer";
    /// Scheduled gym classes
    pub const GYM_CLASS: &str = "gymclass";
    /// Class bookings
    pub const CLASS_BOOKING: &str = "classbooking";
    /// One-on-one trainer bookings
    pub const TRAINER_BOOKING: &str = "trainerbooking";
    /// Contact form messages
    pub const CONTACT_MESSAGE: &str = "contactmessage";
    /// Submitted body metrics
    pub const BODY_METRIC: &str = "bodymetric";
    /// Generated workout recommendations
    pub const RECOMMENDATION: &str = "recommendation";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP port when `HTTP_PORT` is unset
    pub const HTTP_PORT: u16 = 8081;

    /// Default database URL when `DATABASE_URL` is unset
    pub const DATABASE_URL: &str = "sqlite:./data/fithall.db";
}
