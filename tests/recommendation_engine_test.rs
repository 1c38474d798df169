// ABOUTME: Integration tests for the recommendation engine's documented properties
// ABOUTME: Covers plan tables, frequency adjustment, summary suffix, and worked examples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! Recommendation engine property tests

use fithall::intelligence::{generate_recommendation, BASE_SUMMARY, FAT_LOSS_SUFFIX};
use fithall::models::{ActivityLevel, BodyMetrics, Gender, Goal};

fn metrics() -> BodyMetrics {
    BodyMetrics {
        gender: Gender::Male,
        age: 35,
        height_cm: 180.0,
        weight_kg: 85.0,
        waist_cm: None,
        hip_cm: None,
        neck_cm: None,
        body_fat_pct: None,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Recomp,
        member_id: None,
    }
}

#[test]
fn test_plan_size_per_goal() {
    let mut input = metrics();

    input.goal = Goal::FatLoss;
    assert_eq!(generate_recommendation(&input).weekly_plan.len(), 3);

    input.goal = Goal::MuscleGain;
    assert_eq!(generate_recommendation(&input).weekly_plan.len(), 4);

    input.goal = Goal::Recomp;
    assert_eq!(generate_recommendation(&input).weekly_plan.len(), 3);
}

#[test]
fn test_adjustment_applies_to_every_item() {
    for (level, delta) in [
        (ActivityLevel::Sedentary, -1i64),
        (ActivityLevel::Light, -1),
        (ActivityLevel::Moderate, 0),
        (ActivityLevel::Active, 0),
        (ActivityLevel::Athlete, 1),
    ] {
        let mut baseline = metrics();
        baseline.goal = Goal::MuscleGain;
        let base = generate_recommendation(&baseline);

        let mut adjusted_input = baseline.clone();
        adjusted_input.activity_level = level;
        let adjusted = generate_recommendation(&adjusted_input);

        for (base_item, adjusted_item) in base.weekly_plan.iter().zip(&adjusted.weekly_plan) {
            let expected = (i64::from(base_item.frequency_per_week) + delta).max(1);
            assert_eq!(
                i64::from(adjusted_item.frequency_per_week),
                expected,
                "item {} at level {level}",
                base_item.name
            );
        }
    }
}

#[test]
fn test_adjustment_never_touches_sets_reps_or_order() {
    let mut input = metrics();
    input.goal = Goal::FatLoss;
    let base = generate_recommendation(&input);

    input.activity_level = ActivityLevel::Athlete;
    let adjusted = generate_recommendation(&input);

    for (b, a) in base.weekly_plan.iter().zip(&adjusted.weekly_plan) {
        assert_eq!(b.name, a.name);
        assert_eq!(b.sets, a.sets);
        assert_eq!(b.reps, a.reps);
    }
}

#[test]
fn test_worked_example_sedentary_fat_loss() {
    // gender=female, age=30, 165cm, 70kg, sedentary, fat_loss, bf=28
    let input = BodyMetrics {
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
    };

    let rec = generate_recommendation(&input);

    let plan: Vec<(&str, u32)> = rec
        .weekly_plan
        .iter()
        .map(|e| (e.name.as_str(), e.frequency_per_week))
        .collect();
    assert_eq!(
        plan,
        vec![
            ("Treadmill Intervals", 2),
            ("Full-Body Circuit", 1),
            ("Core Stability", 1)
        ]
    );
    assert_eq!(
        rec.summary,
        format!("{BASE_SUMMARY}{FAT_LOSS_SUFFIX}")
    );
}

#[test]
fn test_worked_example_athlete_muscle_gain() {
    let mut input = metrics();
    input.goal = Goal::MuscleGain;
    input.activity_level = ActivityLevel::Athlete;

    let freqs: Vec<u32> = generate_recommendation(&input)
        .weekly_plan
        .iter()
        .map(|e| e.frequency_per_week)
        .collect();
    assert_eq!(freqs, vec![3, 3, 2, 3]);
}

#[test]
fn test_summary_suffix_boundary() {
    let mut input = metrics();
    input.goal = Goal::FatLoss;

    input.body_fat_pct = Some(25.0);
    assert_eq!(generate_recommendation(&input).summary, BASE_SUMMARY);

    input.body_fat_pct = Some(25.1);
    assert!(generate_recommendation(&input)
        .summary
        .ends_with(FAT_LOSS_SUFFIX));
}

#[test]
fn test_engine_deterministic_across_calls() {
    let mut input = metrics();
    input.goal = Goal::FatLoss;
    input.activity_level = ActivityLevel::Light;
    input.body_fat_pct = Some(31.5);

    let first = generate_recommendation(&input);
    for _ in 0..10 {
        assert_eq!(generate_recommendation(&input), first);
    }
}
