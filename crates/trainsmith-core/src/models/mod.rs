// ABOUTME: Core data models for catalog records, profiles, predictions, and plans
// ABOUTME: All types are serde-derived values with camelCase wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Core data models.
//!
//! Every type here is an immutable value from the pipeline's point of view:
//! stages take references in and build new values out.

mod exercise;
mod plan;
mod profile;

pub use exercise::ExerciseRecord;
pub use plan::{
    scale_rounded, Plan, Prediction, Prescription, ScheduledExercise, WeekPlan, DAYS_IN_WEEK,
};
pub use profile::{EquipmentAllowance, EquipmentMode, Goal, Profile};
