// ABOUTME: Core data models for the Fit Hall gym backend
// ABOUTME: Defines members, trainers, classes, bookings, body metrics, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fit Hall

//! # Data Models
//!
//! Core data structures shared by routes, storage, and the recommendation
//! engine. Each record type maps to a document collection named after it
//! (see [`crate::constants::collections`]).
//!
//! ## Design Principles
//!
//! - **Serializable**: All models round-trip through JSON for document storage
//! - **Type Safe**: Enums for every closed vocabulary in the API surface
//! - **Defaults**: Optional request fields carry the same defaults the
//!   public API documents

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client gender, used for body metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Self-reported weekly activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Moderate
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Athlete => "athlete",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "athlete" => Ok(Self::Athlete),
            other => Err(format!("unknown activity level: {other}")),
        }
    }
}

/// Training goal, selects the base exercise plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Recomp,
}

impl Default for Goal {
    fn default() -> Self {
        Self::Recomp
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Recomp => "recomp",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fat_loss" => Ok(Self::FatLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "recomp" => Ok(Self::Recomp),
            other => Err(format!("unknown goal: {other}")),
        }
    }
}

/// Membership plan tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipPlan {
    Basic,
    Pro,
    Elite,
}

impl Default for MembershipPlan {
    fn default() -> Self {
        Self::Basic
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Class difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for ClassLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

/// Day of week for the class schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// A gym member record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// WhatsApp/phone number
    pub phone: String,
    /// Membership plan
    #[serde(default)]
    pub plan: MembershipPlan,
    /// Membership start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Is membership active
    #[serde(default = "default_true")]
    pub active: bool,
    /// Internal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A trainer profile record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    /// Full name
    pub name: String,
    /// Primary specialty, e.g. Strength, HIIT, Yoga
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Rate per 60-minute session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_session: Option<i64>,
    /// ISO datetime strings or slot labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
}

/// A scheduled class record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymClass {
    /// Class title
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Trainer document id as string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_id: Option<String>,
    /// Day of week the class runs
    pub day_of_week: DayOfWeek,
    /// Start time in HH:MM (24h)
    pub start_time: String,
    /// Duration in minutes (15-180)
    pub duration_min: u32,
    /// Maximum participants
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Difficulty level
    #[serde(default)]
    pub level: ClassLevel,
}

fn default_capacity() -> u32 {
    15
}

/// A booking of a member into a scheduled class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBooking {
    /// Member document id
    pub member_id: String,
    /// Class document id
    pub class_id: String,
    /// Class date YYYY-MM-DD
    pub date: String,
    /// Booking status
    #[serde(default)]
    pub status: BookingStatus,
}

/// A one-on-one session booking with a trainer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerBooking {
    /// Member document id
    pub member_id: String,
    /// Trainer document id
    pub trainer_id: String,
    /// Session start time in ISO 8601
    pub datetime_iso: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Booking status
    #[serde(default)]
    pub status: BookingStatus,
}

/// A contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Client-submitted physical and activity profile
///
/// Immutable once constructed. Field ranges are enforced by
/// [`crate::validation::validate_body_metrics`] at the API boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Client gender
    pub gender: Gender,
    /// Age in years (12-90)
    pub age: u32,
    /// Height in centimeters (120-230)
    pub height_cm: f64,
    /// Weight in kilograms (30-250)
    pub weight_kg: f64,
    /// Waist circumference in centimeters (40-200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters (40-200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Neck circumference in centimeters (20-60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_cm: Option<f64>,
    /// Body fat percentage (3-60)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    /// Self-reported activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Training goal
    #[serde(default)]
    pub goal: Goal,
    /// Member document id reference; no referential integrity enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

/// One prescribed exercise in a weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseItem {
    /// Exercise name
    pub name: String,
    /// Number of sets per session
    pub sets: u32,
    /// Free-form rep or duration prescription, e.g. "5-8 reps"
    pub reps: String,
    /// Sessions per week; adjusted by activity level, never below 1
    pub frequency_per_week: u32,
}

/// The engine's output: a summary plus an ordered weekly exercise plan
///
/// Plan order is meaningful (prescribed workout priority) and is preserved
/// through serialization and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Back-reference to a persisted body metrics document, filled in by the
    /// caller after persistence; the engine always emits `None`
    #[serde(default)]
    pub body_metric_id: Option<String>,
    /// Human-readable summary
    pub summary: String,
    /// Ordered weekly exercise plan
    pub weekly_plan: Vec<ExerciseItem>,
}
