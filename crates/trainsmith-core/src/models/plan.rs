// ABOUTME: Prescription, prediction map, weekly schedule, and multi-week plan types
// ABOUTME: Insertion-ordered maps preserve first-match and display-order semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days in the scheduling week.
pub const DAYS_IN_WEEK: usize = 7;

/// Predicted training parameters for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Working sets per week occurrence
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Effort on a 1-10 scale
    pub intensity: u32,
}

impl Prescription {
    /// Scale sets and intensity by `factor`, rounding to nearest with a
    /// floor of 1. Reps are untouched.
    #[must_use]
    pub fn with_reduced_volume(self, factor: f64) -> Self {
        Self {
            sets: scale_rounded(self.sets, factor),
            reps: self.reps,
            intensity: scale_rounded(self.intensity, factor),
        }
    }
}

/// Scale a parameter by `factor`, rounding to nearest with a floor of 1.
#[must_use]
pub fn scale_rounded(value: u32, factor: f64) -> u32 {
    let scaled = (f64::from(value) * factor).round();
    if scaled < 1.0 {
        1
    } else {
        scaled as u32
    }
}

/// Insertion-ordered map from exercise name to prescription.
///
/// Order is semantically load-bearing across the pipeline: round-robin day
/// assignment and same-ratio scaling both walk the map in insertion order.
pub type Prediction = IndexMap<String, Prescription>;

/// One exercise placed on a training day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledExercise {
    /// Exercise name, always a key of the week's prediction map
    pub name: String,
    /// Parameters for this week
    #[serde(flatten)]
    pub prescription: Prescription,
}

/// A 7-day schedule. Non-training days are present as empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Entries per day; index 0 is day 1. Insertion order within a day is
    /// the display order.
    pub days: [Vec<ScheduledExercise>; DAYS_IN_WEEK],
}

impl WeekPlan {
    /// Exercises assigned to the given 1-based day. Out-of-range days read
    /// as rest days.
    #[must_use]
    pub fn day(&self, day: u8) -> &[ScheduledExercise] {
        usize::from(day)
            .checked_sub(1)
            .and_then(|index| self.days.get(index))
            .map_or(&[], Vec::as_slice)
    }

    /// Append an exercise to the given 1-based day. Out-of-range days are
    /// ignored.
    pub fn push(&mut self, day: u8, exercise: ScheduledExercise) {
        if let Some(index) = usize::from(day).checked_sub(1) {
            if let Some(entries) = self.days.get_mut(index) {
                entries.push(exercise);
            }
        }
    }

    /// Whether the given 1-based day has no exercises.
    #[must_use]
    pub fn is_rest_day(&self, day: u8) -> bool {
        self.day(day).is_empty()
    }

    /// All exercise names across the week, in day order.
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .flatten()
            .map(|exercise| exercise.name.as_str())
    }
}

/// A composed multi-week plan.
///
/// `weeks[0]` is the base week; later weeks carry the progressed
/// prescriptions projected through the same day assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier
    pub id: Uuid,
    /// Generation timestamp (UTC)
    pub generated_at: DateTime<Utc>,
    /// Week schedules, one per requested week
    pub weeks: Vec<WeekPlan>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reduced_volume_scales_sets_and_intensity_only() {
        let rx = Prescription {
            sets: 4,
            reps: 10,
            intensity: 7,
        };
        let reduced = rx.with_reduced_volume(0.7);
        assert_eq!(reduced.sets, 3); // 2.8 rounds up
        assert_eq!(reduced.reps, 10);
        assert_eq!(reduced.intensity, 5); // 4.9 rounds up
    }

    #[test]
    fn scaling_never_drops_below_one() {
        assert_eq!(scale_rounded(1, 0.1), 1);
        assert_eq!(scale_rounded(2, 0.0), 1);
        assert_eq!(scale_rounded(3, 0.833), 2);
    }

    #[test]
    fn week_plan_day_access_is_one_based() {
        let mut week = WeekPlan::default();
        week.push(
            3,
            ScheduledExercise {
                name: "Squat".to_owned(),
                prescription: Prescription {
                    sets: 3,
                    reps: 8,
                    intensity: 6,
                },
            },
        );
        assert_eq!(week.day(3).len(), 1);
        assert!(week.is_rest_day(1));
        assert!(week.is_rest_day(9)); // out of range reads as rest
        assert_eq!(week.exercise_names().collect::<Vec<_>>(), vec!["Squat"]);
    }

    #[test]
    fn scheduled_exercise_flattens_prescription() {
        let exercise = ScheduledExercise {
            name: "Row".to_owned(),
            prescription: Prescription {
                sets: 3,
                reps: 10,
                intensity: 6,
            },
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["name"], "Row");
        assert_eq!(json["sets"], 3);
        assert_eq!(json["reps"], 10);
    }
}
