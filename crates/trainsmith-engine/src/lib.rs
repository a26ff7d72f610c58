// ABOUTME: Plan composition pipeline - catalog, substitution, refinement, scheduling, progression
// ABOUTME: Five pure stages threading an insertion-ordered prediction map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

#![deny(unsafe_code)]

//! # Trainsmith Engine
//!
//! The plan composition pipeline. Five stages run in order, each a pure
//! transform over the prediction map:
//!
//! 1. **catalog**: read-only index over exercise records
//! 2. **substitution**: swap or de-risk exercises under equipment and
//!    injury constraints
//! 3. **refine**: goal adjustments and weekly muscle-group volume caps
//! 4. **scheduler**: day assignment across a 7-day week
//! 5. **progression**: multi-week expansion with stepped overload
//!
//! No stage performs I/O or fails: lookup misses pass through, missing
//! substitutes reduce volume, a missing catalog degrades to empty. The
//! pipeline always produces a plan.

/// In-memory exercise catalog with name and muscle lookups
pub mod catalog;

/// Equipment- and injury-driven exercise substitution
pub mod substitution;

/// Goal refinement and weekly volume capping
pub mod refine;

/// Weekly day-assignment scheduling
pub mod scheduler;

/// Multi-week progressive-overload expansion
pub mod progression;

/// The end-to-end plan composer
pub mod pipeline;

pub use catalog::ExerciseCatalog;
pub use pipeline::PlanComposer;
pub use progression::ProgressionGenerator;
pub use refine::SafetyRefiner;
pub use scheduler::{Category, WeeklyScheduler};
pub use substitution::SubstitutionResolver;
