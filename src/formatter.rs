// ABOUTME: Plain-text rendering of composed training plans for terminal output
// ABOUTME: Lists each week day by day with prescriptions and closes with a goal-specific note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Human-readable plan formatting

use std::fmt::Write as _;
use trainsmith_core::{Goal, Plan, Profile, DAYS_IN_WEEK};

/// Render a composed plan as plain text
///
/// Weeks are numbered from one. Days without exercises are shown as rest
/// days so the weekly rhythm stays visible.
#[must_use]
pub fn render_plan_text(plan: &Plan, profile: &Profile) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Training plan for goal: {} ({} weeks, {} days/week)",
        profile.goal,
        plan.weeks.len(),
        profile.days_per_week
    );

    for (index, week) in plan.weeks.iter().enumerate() {
        let _ = writeln!(out, "\nWeek {}:", index + 1);
        for day in 1..=DAYS_IN_WEEK as u8 {
            let entries = week.day(day);
            if entries.is_empty() {
                let _ = writeln!(out, "  Day {day}: Rest");
                continue;
            }
            let line = entries
                .iter()
                .map(|entry| {
                    format!(
                        "{} ({}x{} @ intensity {})",
                        entry.name,
                        entry.prescription.sets,
                        entry.prescription.reps,
                        entry.prescription.intensity
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "  Day {day}: {line}");
        }
    }

    let _ = writeln!(out, "\nNote: {}", goal_tip(profile.goal));
    out
}

/// One-line coaching note keyed to the training goal
fn goal_tip(goal: Goal) -> &'static str {
    match goal {
        Goal::Strength => "prioritize full recovery between heavy sets and keep rest periods long.",
        Goal::MuscleGain => "push close to failure on working sets and keep protein intake high.",
        Goal::Endurance => "keep rest periods short and focus on steady breathing across sets.",
        Goal::WeightLoss => "pair the plan with a modest calorie deficit and daily walking.",
        Goal::Toning => "control the tempo on every rep rather than chasing heavier loads.",
        Goal::General => "consistency beats intensity. Aim to complete every scheduled day.",
    }
}
