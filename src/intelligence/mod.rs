// ABOUTME: Intelligence module for rule-based workout planning
// ABOUTME: Houses the pure recommendation engine and its plan tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Intelligence Module
//!
//! The recommendation engine is the only decision logic in the service: a
//! deterministic, pure mapping from a body metrics record to a structured
//! weekly exercise plan. It performs no I/O and holds no state, so it is safe
//! to invoke concurrently from arbitrarily many requests.

pub mod recommendation;

pub use recommendation::{generate_recommendation, BASE_SUMMARY, FAT_LOSS_SUFFIX};
