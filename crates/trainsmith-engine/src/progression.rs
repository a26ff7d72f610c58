// ABOUTME: Progression generator - expands a base week into an N-week plan
// ABOUTME: Sets and intensity step up every second week; day assignments stay fixed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Multi-week progressive-overload expansion.

use trainsmith_core::constants::intensity::MAX_INTENSITY;
use trainsmith_core::constants::progression::WEEKS_PER_INCREMENT;
use trainsmith_core::models::{Prediction, ScheduledExercise, WeekPlan};

/// Expands one base week into a deterministic multi-week plan.
///
/// Week `w` (0-based) adds `w / 2` sets and `w / 2` intensity steps to the
/// base prescription, with intensity capped at 10 and reps held stable.
/// Day assignments are fixed once at week 0; only parameters change.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionGenerator;

impl ProgressionGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The progressed prediction map for the given 0-based week index.
    #[must_use]
    pub fn progressed_week(base: &Prediction, week_index: usize) -> Prediction {
        let step = (week_index / WEEKS_PER_INCREMENT) as u32;
        base.iter()
            .map(|(name, prescription)| {
                let mut progressed = *prescription;
                progressed.sets = (progressed.sets + step).max(1);
                progressed.intensity = (progressed.intensity + step).min(MAX_INTENSITY);
                (name.clone(), progressed)
            })
            .collect()
    }

    /// Expand the base prediction map into `weeks` week plans, projecting
    /// each week's progressed parameters through the fixed base schedule.
    #[must_use]
    pub fn expand(&self, base: &Prediction, base_week: &WeekPlan, weeks: usize) -> Vec<WeekPlan> {
        (0..weeks)
            .map(|week_index| {
                let progressed = Self::progressed_week(base, week_index);
                project(base_week, &progressed)
            })
            .collect()
    }
}

/// Rebuild a week plan with the same day assignments but this week's
/// parameters. Names absent from the progressed map are dropped.
fn project(base_week: &WeekPlan, progressed: &Prediction) -> WeekPlan {
    let mut week = WeekPlan::default();
    for (index, entries) in base_week.days.iter().enumerate() {
        let day = (index + 1) as u8;
        for entry in entries {
            if let Some(&prescription) = progressed.get(&entry.name) {
                week.push(
                    day,
                    ScheduledExercise {
                        name: entry.name.clone(),
                        prescription,
                    },
                );
            }
        }
    }
    week
}
