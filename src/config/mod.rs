// ABOUTME: Configuration module for the Fit Hall API
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Configuration management
//!
//! Configuration is environment-only: every knob is an environment variable
//! with a sensible default, loaded once at startup.

pub mod environment;
