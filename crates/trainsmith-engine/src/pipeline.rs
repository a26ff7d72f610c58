// ABOUTME: End-to-end plan composer running the five pipeline stages in order
// ABOUTME: Substitution, refinement, scheduling, progression over a shared catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! The end-to-end plan composer.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use trainsmith_core::models::{Plan, Prediction, Profile};

use crate::catalog::ExerciseCatalog;
use crate::progression::ProgressionGenerator;
use crate::refine::SafetyRefiner;
use crate::scheduler::WeeklyScheduler;
use crate::substitution::SubstitutionResolver;

/// Composes a multi-week plan from a prediction map and a profile.
///
/// The catalog is shared and read-only; any number of compositions may run
/// concurrently against the same instance. Composition never fails: every
/// stage degrades gracefully instead of erroring.
#[derive(Debug, Clone)]
pub struct PlanComposer {
    catalog: Arc<ExerciseCatalog>,
}

impl PlanComposer {
    /// Create a composer over the shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this composer resolves against.
    #[must_use]
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Run the full pipeline: substitution, refinement, scheduling, and
    /// multi-week progression.
    #[must_use]
    pub fn compose(&self, profile: &Profile, predictions: &Prediction, weeks: usize) -> Plan {
        info!(
            exercises = predictions.len(),
            weeks,
            goal = %profile.goal,
            days_per_week = profile.days_per_week,
            "composing plan"
        );

        let resolved = SubstitutionResolver::new(&self.catalog).resolve(predictions, profile);
        let refined = SafetyRefiner::new().refine(&resolved, profile.goal);
        let base_week = WeeklyScheduler::new().schedule(&refined, profile.days_per_week);
        let week_plans = ProgressionGenerator::new().expand(&refined, &base_week, weeks);

        Plan {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            weeks: week_plans,
        }
    }
}
