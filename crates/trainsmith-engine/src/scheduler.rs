// ABOUTME: Weekly scheduler - assigns exercises to training days across a 7-day week
// ABOUTME: Category-per-day split when it fits, plain round-robin otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Weekly day-assignment scheduling.

use tracing::debug;

use trainsmith_core::constants::categories::{
    LEG_KEYWORDS, PULL_KEYWORDS, PUSH_KEYWORDS, STRETCH_KEYWORDS,
};
use trainsmith_core::constants::scheduling;
use trainsmith_core::models::{Prediction, ScheduledExercise, WeekPlan};

/// Exercise category inferred from the exercise name.
///
/// A name belongs to the first category whose keyword table matches it,
/// checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Pressing movements
    Push,
    /// Rowing, pulling, and curling movements
    Pull,
    /// Squatting and hinging movements
    Legs,
    /// Mobility work, replicated onto every training day
    Stretch,
    /// Everything else
    Other,
}

impl Category {
    /// Classify an exercise name by case-insensitive keyword match.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|keyword| lower.contains(keyword));
        if matches(&PUSH_KEYWORDS) {
            Self::Push
        } else if matches(&PULL_KEYWORDS) {
            Self::Pull
        } else if matches(&LEG_KEYWORDS) {
            Self::Legs
        } else if matches(&STRETCH_KEYWORDS) {
            Self::Stretch
        } else {
            Self::Other
        }
    }
}

/// Assigns each exercise of a prediction map to days of a 7-day week.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyScheduler;

impl WeeklyScheduler {
    /// Create a scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Training days for the requested weekly frequency, spread for rest
    /// spacing. Out-of-range requests clamp to one or seven days.
    #[must_use]
    pub fn training_days(days_per_week: u8) -> &'static [u8] {
        match days_per_week {
            0 | 1 => &scheduling::ONE_DAY,
            2 => &scheduling::TWO_DAYS,
            3 => &scheduling::THREE_DAYS,
            4 => &scheduling::FOUR_DAYS,
            5 => &scheduling::FIVE_DAYS,
            6 => &scheduling::SIX_DAYS,
            _ => &scheduling::SEVEN_DAYS,
        }
    }

    /// Build the week's day assignments. Non-training days stay empty.
    ///
    /// With three or more training days, each non-empty category (push,
    /// pull, legs, other) gets its own day when the day count allows, and
    /// stretches replicate onto every training day. When categories
    /// outnumber days the scheduler falls back to plain round-robin over
    /// all exercises, ignoring category, a deliberate coarseness kept
    /// for deterministic output.
    #[must_use]
    pub fn schedule(&self, predictions: &Prediction, days_per_week: u8) -> WeekPlan {
        let days = Self::training_days(days_per_week);
        let mut week = WeekPlan::default();

        if days_per_week <= 2 {
            round_robin(&mut week, predictions, days);
            return week;
        }

        let mut push = Vec::new();
        let mut pull = Vec::new();
        let mut legs = Vec::new();
        let mut stretch = Vec::new();
        let mut other = Vec::new();
        for name in predictions.keys() {
            match Category::classify(name) {
                Category::Push => push.push(name),
                Category::Pull => pull.push(name),
                Category::Legs => legs.push(name),
                Category::Stretch => stretch.push(name),
                Category::Other => other.push(name),
            }
        }

        let groups: Vec<&Vec<&String>> = [&push, &pull, &legs, &other]
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();

        if groups.len() <= days.len() {
            for (group, &day) in groups.iter().zip(days) {
                for &name in *group {
                    push_entry(&mut week, day, name, predictions);
                }
            }
            for &day in days {
                for &name in &stretch {
                    push_entry(&mut week, day, name, predictions);
                }
            }
        } else {
            debug!(
                categories = groups.len(),
                training_days = days.len(),
                "more categories than training days, falling back to round-robin"
            );
            round_robin(&mut week, predictions, days);
        }

        week
    }
}

fn round_robin(week: &mut WeekPlan, predictions: &Prediction, days: &[u8]) {
    for (index, name) in predictions.keys().enumerate() {
        let day = days[index % days.len()];
        push_entry(week, day, name, predictions);
    }
}

fn push_entry(week: &mut WeekPlan, day: u8, name: &str, predictions: &Prediction) {
    if let Some(&prescription) = predictions.get(name) {
        week.push(
            day,
            ScheduledExercise {
                name: name.to_owned(),
                prescription,
            },
        );
    }
}
