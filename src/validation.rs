// ABOUTME: Range validation for body metrics submissions
// ABOUTME: Produces field-level violations before the recommendation engine runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Body Metrics Validation
//!
//! Explicit validation step run at the API boundary. The recommendation
//! engine assumes structurally valid input and never re-checks ranges, so
//! every recomposition route calls [`validate_body_metrics`] first and maps
//! violations to a 400 response.
//!
//! Enum fields (gender, goal, activity level) are already enforced by serde
//! deserialization; only numeric ranges are checked here.

use crate::models::BodyMetrics;
use serde::{Deserialize, Serialize};

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// What was expected
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a body metrics record against its documented ranges
///
/// Returns all violations at once rather than failing on the first, so
/// clients can fix a submission in one round trip.
///
/// # Errors
///
/// Returns the list of field violations when any range check fails.
pub fn validate_body_metrics(metrics: &BodyMetrics) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_range_u32(&mut violations, "age", metrics.age, 12, 90);
    check_range(&mut violations, "height_cm", metrics.height_cm, 120.0, 230.0);
    check_range(&mut violations, "weight_kg", metrics.weight_kg, 30.0, 250.0);
    check_optional_range(&mut violations, "waist_cm", metrics.waist_cm, 40.0, 200.0);
    check_optional_range(&mut violations, "hip_cm", metrics.hip_cm, 40.0, 200.0);
    check_optional_range(&mut violations, "neck_cm", metrics.neck_cm, 20.0, 60.0);
    check_optional_range(
        &mut violations,
        "body_fat_pct",
        metrics.body_fat_pct,
        3.0,
        60.0,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_range_u32(violations: &mut Vec<FieldViolation>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        violations.push(FieldViolation::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
}

fn check_range(violations: &mut Vec<FieldViolation>, field: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() || value < min || value > max {
        violations.push(FieldViolation::new(
            field,
            format!("must be between {min} and {max}, got {value}"),
        ));
    }
}

fn check_optional_range(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<f64>,
    min: f64,
    max: f64,
) {
    if let Some(value) = value {
        check_range(violations, field, value, min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, Goal};

    fn valid_metrics() -> BodyMetrics {
        BodyMetrics {
            gender: Gender::Female,
            age: 30,
            height_cm: 165.0,
            weight_kg: 70.0,
            waist_cm: None,
            hip_cm: None,
            neck_cm: None,
            body_fat_pct: Some(28.0),
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::FatLoss,
            member_id: None,
        }
    }

    #[test]
    fn test_valid_metrics_pass() {
        assert!(validate_body_metrics(&valid_metrics()).is_ok());
    }

    #[test]
    fn test_boundaries_inclusive() {
        let mut metrics = valid_metrics();
        metrics.age = 12;
        metrics.height_cm = 230.0;
        metrics.weight_kg = 30.0;
        metrics.body_fat_pct = Some(60.0);
        assert!(validate_body_metrics(&metrics).is_ok());
    }

    #[test]
    fn test_out_of_range_fields_all_reported() {
        let mut metrics = valid_metrics();
        metrics.age = 11;
        metrics.weight_kg = 300.0;
        metrics.neck_cm = Some(75.0);

        let violations = validate_body_metrics(&metrics).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["age", "weight_kg", "neck_cm"]);
    }

    #[test]
    fn test_absent_optional_fields_skip_checks() {
        let mut metrics = valid_metrics();
        metrics.body_fat_pct = None;
        assert!(validate_body_metrics(&metrics).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut metrics = valid_metrics();
        metrics.height_cm = f64::NAN;
        let violations = validate_body_metrics(&metrics).unwrap_err();
        assert_eq!(violations[0].field, "height_cm");
    }
}
