// ABOUTME: Muscle group enumeration with exercise-name mapping and weekly set ceilings
// ABOUTME: Static classification table driving safety-volume capping and substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Muscle group classification for predicted exercises.

use serde::{Deserialize, Serialize};

use crate::constants::volume;

/// Muscle groups tracked for weekly volume capping.
///
/// Predicted exercises map to a group through a static exact-name table;
/// anything outside the table lands in [`MuscleGroup::Other`], which carries
/// the generous default ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Chest / pectorals
    Chest,
    /// Shoulders / deltoids
    Shoulders,
    /// Upper and mid back
    Back,
    /// Quadriceps-dominant leg work
    Legs,
    /// Hamstrings, glutes, lower back
    PosteriorChain,
    /// Everything outside the mapped groups
    Other,
}

impl MuscleGroup {
    /// Classify a predicted exercise by its canonical name.
    ///
    /// The table is an exact-name lookup over the predictor's canonical
    /// exercise names. Catalog display names (for example a substitute's
    /// full name) intentionally fall into [`MuscleGroup::Other`].
    #[must_use]
    pub fn for_exercise(name: &str) -> Self {
        match name {
            "Bench" => Self::Chest,
            "OverheadPress" => Self::Shoulders,
            "Row" => Self::Back,
            "Squat" => Self::Legs,
            "Deadlift" => Self::PosteriorChain,
            _ => Self::Other,
        }
    }

    /// Weekly set ceiling for this group.
    #[must_use]
    pub const fn weekly_set_cap(self) -> u32 {
        match self {
            Self::Chest => volume::CHEST_WEEKLY_SET_CAP,
            Self::Shoulders => volume::SHOULDERS_WEEKLY_SET_CAP,
            Self::Back => volume::BACK_WEEKLY_SET_CAP,
            Self::Legs => volume::LEGS_WEEKLY_SET_CAP,
            Self::PosteriorChain => volume::POSTERIOR_CHAIN_WEEKLY_SET_CAP,
            Self::Other => volume::DEFAULT_WEEKLY_SET_CAP,
        }
    }

    /// Lowercase key used to match catalog body parts and target muscles
    /// when searching for a substitute.
    ///
    /// [`MuscleGroup::Other`] has no catalog key: an exercise without an
    /// inferred group can never match a substitute and takes the
    /// volume-reduction fallback instead.
    #[must_use]
    pub const fn catalog_key(self) -> Option<&'static str> {
        match self {
            Self::Chest => Some("chest"),
            Self::Shoulders => Some("shoulders"),
            Self::Back => Some("back"),
            Self::Legs => Some("legs"),
            Self::PosteriorChain => Some("posterior_chain"),
            Self::Other => None,
        }
    }
}
