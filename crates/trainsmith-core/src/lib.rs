// ABOUTME: Core types and constants for the Trainsmith plan composition engine
// ABOUTME: Foundation crate with data models, error types, and domain constant tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

#![deny(unsafe_code)]

//! # Trainsmith Core
//!
//! Foundation crate providing shared types and constants for the Trainsmith
//! plan composition engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Catalog records, user profiles, predictions, and plan types
//! - **muscle**: Muscle group classification and weekly volume ceilings
//! - **constants**: Domain constant tables organized by concern
//! - **errors**: Structured error types for the application edge

/// Core data models (`ExerciseRecord`, `Profile`, `Prediction`, `Plan`)
pub mod models;

/// Muscle group classification and weekly set ceilings
pub mod muscle;

/// Domain constants organized by concern (volume, equipment, scheduling)
pub mod constants;

/// Structured error types for catalog loading and input parsing
pub mod errors;

pub use errors::CatalogError;
pub use models::{
    EquipmentAllowance, EquipmentMode, ExerciseRecord, Goal, Plan, Prediction, Prescription,
    Profile, ScheduledExercise, WeekPlan, DAYS_IN_WEEK,
};
pub use muscle::MuscleGroup;
