// ABOUTME: Rule-based weekly workout recommendation engine
// ABOUTME: Maps body metrics to a fixed exercise plan adjusted by activity level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Weekly plan recommendation engine
//!
//! Three ordered stages:
//!
//! 1. **Base plan selection by goal** - one of three fixed exercise lists
//! 2. **Frequency adjustment by activity level** - uniform, in place, floored at 1
//! 3. **Summary construction** - fixed base text, one conditional suffix
//!
//! The engine never fails for a structurally valid input; range and enum
//! validation is the API boundary's responsibility
//! ([`crate::validation::validate_body_metrics`]).

use crate::models::{ActivityLevel, BodyMetrics, ExerciseItem, Goal, Recommendation};

/// Base summary text, always present
pub const BASE_SUMMARY: &str =
    "Personalized plan generated based on your goal and activity level.";

/// Appended when goal is fat loss and body fat is above the coaching threshold
pub const FAT_LOSS_SUFFIX: &str = " Focus on sustainable deficit, prioritize sleep and steps.";

/// Body fat percentage above which the fat-loss summary suffix applies (strict >)
const HIGH_BODY_FAT_THRESHOLD: f64 = 25.0;

fn item(name: &str, sets: u32, reps: &str, frequency_per_week: u32) -> ExerciseItem {
    ExerciseItem {
        name: name.to_string(),
        sets,
        reps: reps.to_string(),
        frequency_per_week,
    }
}

/// Base exercise plan for a goal, in prescribed priority order
///
/// The recomp plan doubles as the catch-all branch; the match is deliberately
/// not exhaustive over future goal variants.
fn base_plan(goal: Goal) -> Vec<ExerciseItem> {
    match goal {
        Goal::FatLoss => vec![
            item("Treadmill Intervals", 6, "1 min fast / 2 min easy", 3),
            item("Full-Body Circuit", 4, "12-15 reps", 2),
            item("Core Stability", 3, "12-15 reps", 2),
        ],
        Goal::MuscleGain => vec![
            item("Barbell Squat", 5, "5-8 reps", 2),
            item("Bench Press", 5, "5-8 reps", 2),
            item("Deadlift", 3, "3-5 reps", 1),
            item("Accessory (Rows, Press, Pull-ups)", 4, "8-12 reps", 2),
        ],
        _ => vec![
            item("Upper/Lower Split Strength", 4, "6-10 reps", 3),
            item("Zone 2 Cardio", 1, "30-40 mins", 2),
            item("Mobility & Core", 3, "10-15 reps", 2),
        ],
    }
}

/// Adjust every item's weekly frequency for the client's activity level
///
/// Applied uniformly and in place; adjustment only ever touches
/// `frequency_per_week`, never plan contents or ordering. Frequency is
/// floored at 1 even when the base value was already 1.
fn adjust_for_activity(plan: &mut [ExerciseItem], activity_level: ActivityLevel) {
    match activity_level {
        ActivityLevel::Sedentary | ActivityLevel::Light => {
            for exercise in plan.iter_mut() {
                exercise.frequency_per_week = exercise.frequency_per_week.saturating_sub(1).max(1);
            }
        }
        ActivityLevel::Athlete => {
            for exercise in plan.iter_mut() {
                exercise.frequency_per_week += 1;
            }
        }
        ActivityLevel::Moderate | ActivityLevel::Active => {}
    }
}

fn build_summary(metrics: &BodyMetrics) -> String {
    let mut summary = BASE_SUMMARY.to_string();
    if metrics.goal == Goal::FatLoss {
        if let Some(body_fat) = metrics.body_fat_pct {
            if body_fat > HIGH_BODY_FAT_THRESHOLD {
                summary.push_str(FAT_LOSS_SUFFIX);
            }
        }
    }
    summary
}

/// Generate a weekly workout recommendation from a body metrics record
///
/// Pure and referentially transparent: the same input always yields the same
/// output, and nothing outside the returned value is touched. The returned
/// `body_metric_id` is always `None`; persistence linkage is the caller's
/// concern.
#[must_use]
pub fn generate_recommendation(metrics: &BodyMetrics) -> Recommendation {
    let mut weekly_plan = base_plan(metrics.goal);
    adjust_for_activity(&mut weekly_plan, metrics.activity_level);

    Recommendation {
        body_metric_id: None,
        summary: build_summary(metrics),
        weekly_plan,
    }
}
