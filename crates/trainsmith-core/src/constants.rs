// ABOUTME: Domain constant tables for volume caps, equipment modes, and scheduling
// ABOUTME: Explicit enumerated mappings, organized by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Domain constants organized by concern.
//!
//! Every table here is an explicit constant. The substitution and scheduling
//! policies depend on these values being stable: changing an entry changes
//! observable plan output.

/// Weekly per-muscle-group set ceilings
pub mod volume {
    /// Weekly set ceiling for leg exercises
    pub const LEGS_WEEKLY_SET_CAP: u32 = 25;
    /// Weekly set ceiling for chest exercises
    pub const CHEST_WEEKLY_SET_CAP: u32 = 20;
    /// Weekly set ceiling for back exercises
    pub const BACK_WEEKLY_SET_CAP: u32 = 20;
    /// Weekly set ceiling for shoulder exercises
    pub const SHOULDERS_WEEKLY_SET_CAP: u32 = 15;
    /// Weekly set ceiling for posterior chain exercises
    pub const POSTERIOR_CHAIN_WEEKLY_SET_CAP: u32 = 20;
    /// Generous ceiling applied to exercises outside the mapped groups
    pub const DEFAULT_WEEKLY_SET_CAP: u32 = 30;
}

/// Intensity scale bounds (RPE-style 1-10)
pub mod intensity {
    /// Lowest prescribable intensity
    pub const MIN_INTENSITY: u32 = 1;
    /// Highest prescribable intensity
    pub const MAX_INTENSITY: u32 = 10;
}

/// Equipment allow-lists per equipment mode
pub mod equipment {
    /// Equipment reachable in a dumbbells-only home setup
    pub const DUMBBELL_HOME_EQUIPMENT: [&str; 4] =
        ["dumbbell", "body weight", "band", "kettlebell"];
    /// Equipment reachable with no gear at all
    pub const BODYWEIGHT_EQUIPMENT: [&str; 1] = ["body weight"];
}

/// Substitution fallback parameters
pub mod substitution {
    /// Scale applied to sets and intensity when no substitute exists
    pub const NO_SUBSTITUTE_VOLUME_SCALE: f64 = 0.7;
}

/// Goal-driven refinement parameters
pub mod refinement {
    /// Rep floor after the strength-goal rep reduction
    pub const STRENGTH_MIN_REPS: u32 = 3;
    /// Extra reps granted by the endurance goal
    pub const ENDURANCE_EXTRA_REPS: u32 = 2;
    /// Set multiplier for the muscle-gain goal
    pub const HYPERTROPHY_SET_FACTOR: f64 = 1.05;
}

/// Training-day placement tables, keyed by days-per-week
pub mod scheduling {
    /// One training day, mid-week
    pub const ONE_DAY: [u8; 1] = [3];
    /// Two training days, spread across the week
    pub const TWO_DAYS: [u8; 2] = [1, 4];
    /// Mon/Wed/Fri
    pub const THREE_DAYS: [u8; 3] = [1, 3, 5];
    /// Mon/Tue/Thu/Fri
    pub const FOUR_DAYS: [u8; 4] = [1, 2, 4, 5];
    /// Mon-Wed plus Fri/Sat
    pub const FIVE_DAYS: [u8; 5] = [1, 2, 3, 5, 6];
    /// Mon-Sat
    pub const SIX_DAYS: [u8; 6] = [1, 2, 3, 4, 5, 6];
    /// Every day of the week
    pub const SEVEN_DAYS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];
}

/// Case-insensitive keyword tables for exercise categorization
pub mod categories {
    /// Name fragments identifying pushing movements
    pub const PUSH_KEYWORDS: [&str; 6] =
        ["bench", "overhead press", "push", "press", "dip", "handstand"];
    /// Name fragments identifying pulling movements
    pub const PULL_KEYWORDS: [&str; 3] = ["row", "pull", "curl"];
    /// Name fragments identifying leg movements
    pub const LEG_KEYWORDS: [&str; 5] = ["squat", "deadlift", "leg", "femoral", "hamstring"];
    /// Name fragments identifying mobility work
    pub const STRETCH_KEYWORDS: [&str; 1] = ["stretch"];
}

/// Multi-week progression parameters
pub mod progression {
    /// Sets and intensity step up once per this many weeks
    pub const WEEKS_PER_INCREMENT: usize = 2;
}
