// ABOUTME: Safety refiner - goal-driven parameter adjustment and weekly volume capping
// ABOUTME: Over-cap muscle groups shrink proportionally, same ratio for every member
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Goal refinement and weekly per-muscle-group set capping.

use indexmap::IndexMap;
use tracing::debug;

use trainsmith_core::constants::intensity::{MAX_INTENSITY, MIN_INTENSITY};
use trainsmith_core::constants::refinement::{
    ENDURANCE_EXTRA_REPS, HYPERTROPHY_SET_FACTOR, STRENGTH_MIN_REPS,
};
use trainsmith_core::models::{scale_rounded, Goal, Prediction, Prescription};
use trainsmith_core::muscle::MuscleGroup;

/// Applies goal adjustments, then enforces weekly muscle-group set caps.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyRefiner;

impl SafetyRefiner {
    /// Create a refiner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Produce a refined prediction map. The input map is never mutated.
    #[must_use]
    pub fn refine(&self, predictions: &Prediction, goal: Goal) -> Prediction {
        let mut refined: Prediction = predictions
            .iter()
            .map(|(name, &prescription)| (name.clone(), adjust_for_goal(prescription, goal)))
            .collect();
        enforce_weekly_caps(&mut refined);
        refined
    }
}

/// Goal-driven per-exercise adjustment, applied before capping.
fn adjust_for_goal(prescription: Prescription, goal: Goal) -> Prescription {
    let mut adjusted = prescription;
    match goal {
        Goal::Strength => {
            adjusted.intensity = (adjusted.intensity + 1).min(MAX_INTENSITY);
            adjusted.reps = adjusted.reps.saturating_sub(1).max(STRENGTH_MIN_REPS);
        }
        Goal::Endurance => {
            adjusted.reps += ENDURANCE_EXTRA_REPS;
            adjusted.intensity = adjusted.intensity.saturating_sub(1).max(MIN_INTENSITY);
        }
        Goal::MuscleGain => {
            adjusted.sets = (f64::from(adjusted.sets) * HYPERTROPHY_SET_FACTOR).round() as u32;
        }
        Goal::WeightLoss | Goal::Toning | Goal::General => {}
    }
    adjusted
}

/// Scale down every member of an over-cap muscle group by `cap / total`,
/// rounding to nearest with a floor of one set. Groups at or under their
/// cap, and groups with zero total sets, are untouched.
fn enforce_weekly_caps(predictions: &mut Prediction) {
    let mut totals: IndexMap<MuscleGroup, u32> = IndexMap::new();
    for (name, prescription) in predictions.iter() {
        *totals.entry(MuscleGroup::for_exercise(name)).or_insert(0) += prescription.sets;
    }

    for (&group, &total) in &totals {
        let cap = group.weekly_set_cap();
        if total <= cap {
            continue;
        }
        let ratio = f64::from(cap) / f64::from(total);
        debug!(?group, total, cap, ratio, "weekly set cap exceeded, scaling group");
        for (name, prescription) in predictions.iter_mut() {
            if MuscleGroup::for_exercise(name) == group {
                prescription.sets = scale_rounded(prescription.sets, ratio);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rx(sets: u32, reps: u32, intensity: u32) -> Prescription {
        Prescription {
            sets,
            reps,
            intensity,
        }
    }

    #[test]
    fn strength_raises_intensity_and_lowers_reps() {
        let refined = SafetyRefiner::new().refine(
            &Prediction::from([("Bench".to_owned(), rx(4, 8, 9))]),
            Goal::Strength,
        );
        let bench = refined.get("Bench").unwrap();
        assert_eq!(bench.intensity, 10);
        assert_eq!(bench.reps, 7);
    }

    #[test]
    fn strength_respects_intensity_ceiling_and_rep_floor() {
        let refined = SafetyRefiner::new().refine(
            &Prediction::from([("Bench".to_owned(), rx(4, 3, 10))]),
            Goal::Strength,
        );
        let bench = refined.get("Bench").unwrap();
        assert_eq!(bench.intensity, 10);
        assert_eq!(bench.reps, 3);
    }

    #[test]
    fn endurance_adds_reps_and_eases_intensity() {
        let refined = SafetyRefiner::new().refine(
            &Prediction::from([("Row".to_owned(), rx(3, 12, 1))]),
            Goal::Endurance,
        );
        let row = refined.get("Row").unwrap();
        assert_eq!(row.reps, 14);
        assert_eq!(row.intensity, 1); // floored
    }

    #[test]
    fn muscle_gain_bumps_sets() {
        let refined = SafetyRefiner::new().refine(
            &Prediction::from([("Bench".to_owned(), rx(10, 10, 7))]),
            Goal::MuscleGain,
        );
        assert_eq!(refined.get("Bench").unwrap().sets, 11); // 10.5 rounds up
    }

    #[test]
    fn neutral_goals_leave_parameters_alone() {
        let predictions = Prediction::from([("Bench".to_owned(), rx(3, 10, 7))]);
        for goal in [Goal::WeightLoss, Goal::Toning, Goal::General] {
            let refined = SafetyRefiner::new().refine(&predictions, goal);
            assert_eq!(refined, predictions);
        }
    }

    #[test]
    fn over_cap_group_scales_proportionally() {
        // Legs cap is 25; one mapped leg exercise carrying 30 sets.
        let refined = SafetyRefiner::new().refine(
            &Prediction::from([("Squat".to_owned(), rx(30, 8, 6))]),
            Goal::General,
        );
        assert_eq!(refined.get("Squat").unwrap().sets, 25);
    }

    #[test]
    fn scaling_ratio_applies_to_every_group_member() {
        // Chest cap is 20; Bench at 30 sets scales by 20/30.
        let mut predictions = Prediction::new();
        predictions.insert("Bench".to_owned(), rx(30, 10, 7));
        predictions.insert("Row".to_owned(), rx(10, 10, 7));
        let refined = SafetyRefiner::new().refine(&predictions, Goal::General);
        assert_eq!(refined.get("Bench").unwrap().sets, 20);
        // Back total is under its cap and stays put.
        assert_eq!(refined.get("Row").unwrap().sets, 10);
    }

    #[test]
    fn under_cap_groups_are_untouched() {
        let predictions = Prediction::from([
            ("Squat".to_owned(), rx(12, 8, 6)),
            ("Deadlift".to_owned(), rx(8, 5, 8)),
        ]);
        let refined = SafetyRefiner::new().refine(&predictions, Goal::General);
        assert_eq!(refined, predictions);
    }

    #[test]
    fn unmapped_exercises_share_the_default_cap() {
        // Two unmapped exercises totalling 40 sets against the default cap
        // of 30: each scales by 30/40.
        let mut predictions = Prediction::new();
        predictions.insert("mountain climber".to_owned(), rx(20, 15, 5));
        predictions.insert("burpee".to_owned(), rx(20, 15, 5));
        let refined = SafetyRefiner::new().refine(&predictions, Goal::General);
        assert_eq!(refined.get("mountain climber").unwrap().sets, 15);
        assert_eq!(refined.get("burpee").unwrap().sets, 15);
    }
}
