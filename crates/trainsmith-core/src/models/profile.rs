// ABOUTME: User profile types - training goal, equipment mode, injuries, day count
// ABOUTME: Tolerant deserialization of external strings per graceful-degradation policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::equipment;

/// Training goal driving parameter refinement.
///
/// Unrecognized external goal strings deserialize to [`Goal::General`],
/// which receives no goal adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Hypertrophy-focused training
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    /// Maximal strength training
    Strength,
    /// Muscular endurance training
    Endurance,
    /// Fat-loss-focused training
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    /// Moderate-volume toning
    Toning,
    /// Catch-all for unrecognized goals; no adjustment applied
    #[default]
    #[serde(other)]
    General,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MuscleGain => "Muscle Gain",
            Self::Strength => "Strength",
            Self::Endurance => "Endurance",
            Self::WeightLoss => "Weight Loss",
            Self::Toning => "Toning",
            Self::General => "General Fitness",
        };
        f.write_str(label)
    }
}

/// Equipment available to the user.
///
/// External input is either a mode string (`"gym"`, `"dumbbells"`, anything
/// else meaning bodyweight-only) or an explicit equipment array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "EquipmentModeRepr")]
pub enum EquipmentMode {
    /// Full gym: every piece of equipment is allowed
    #[default]
    Gym,
    /// Dumbbells plus the usual home accessories
    DumbbellsOnly,
    /// No equipment beyond body weight
    BodyweightOnly,
    /// Explicit equipment set, stored lower-cased
    Custom(Vec<String>),
}

/// Wire shape accepted for [`EquipmentMode`].
#[derive(Deserialize)]
#[serde(untagged)]
enum EquipmentModeRepr {
    Named(String),
    Explicit(Vec<String>),
}

impl From<EquipmentModeRepr> for EquipmentMode {
    fn from(repr: EquipmentModeRepr) -> Self {
        match repr {
            EquipmentModeRepr::Named(name) => match name.trim().to_lowercase().as_str() {
                "gym" => Self::Gym,
                "dumbbells" => Self::DumbbellsOnly,
                _ => Self::BodyweightOnly,
            },
            EquipmentModeRepr::Explicit(items) => {
                Self::Custom(items.iter().map(|item| item.trim().to_lowercase()).collect())
            }
        }
    }
}

impl Serialize for EquipmentMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Gym => serializer.serialize_str("gym"),
            Self::DumbbellsOnly => serializer.serialize_str("dumbbells"),
            Self::BodyweightOnly => serializer.serialize_str("bodyweight"),
            Self::Custom(items) => items.serialize(serializer),
        }
    }
}

impl EquipmentMode {
    /// The concrete allow-list this mode grants.
    #[must_use]
    pub fn allowance(&self) -> EquipmentAllowance {
        match self {
            Self::Gym => EquipmentAllowance::AllowAll,
            Self::DumbbellsOnly => EquipmentAllowance::Only(
                equipment::DUMBBELL_HOME_EQUIPMENT
                    .iter()
                    .map(|&item| item.to_owned())
                    .collect(),
            ),
            Self::BodyweightOnly => EquipmentAllowance::Only(
                equipment::BODYWEIGHT_EQUIPMENT
                    .iter()
                    .map(|&item| item.to_owned())
                    .collect(),
            ),
            Self::Custom(items) => {
                EquipmentAllowance::Only(items.iter().cloned().collect())
            }
        }
    }
}

/// Resolved equipment allow-list used for catalog matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentAllowance {
    /// Every piece of equipment is permitted
    AllowAll,
    /// Only the listed (lowercase) equipment is permitted
    Only(HashSet<String>),
}

impl EquipmentAllowance {
    /// Whether an exercise requiring any of `equipments` is permitted.
    ///
    /// A record listing no equipment at all is unavailable under a
    /// restricted allowance: there is nothing to intersect.
    #[must_use]
    pub fn permits(&self, equipments: &[String]) -> bool {
        match self {
            Self::AllowAll => true,
            Self::Only(allowed) => equipments
                .iter()
                .any(|item| allowed.contains(&item.to_lowercase())),
        }
    }
}

fn default_days_per_week() -> u8 {
    4
}

/// Per-request user profile, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Training goal
    #[serde(default)]
    pub goal: Goal,
    /// Requested training days per week (2-7)
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
    /// Equipment available to the user
    #[serde(default)]
    pub equipment_mode: EquipmentMode,
    /// Body parts to avoid loading
    #[serde(default)]
    pub injuries: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            days_per_week: default_days_per_week(),
            equipment_mode: EquipmentMode::default(),
            injuries: Vec::new(),
        }
    }
}

impl Profile {
    /// Injury set normalized for matching: trimmed, lower-cased, empties
    /// dropped.
    #[must_use]
    pub fn normalized_injuries(&self) -> Vec<String> {
        self.injuries
            .iter()
            .map(|injury| injury.trim().to_lowercase())
            .filter(|injury| !injury.is_empty())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn goal_strings_round_trip() {
        let goal: Goal = serde_json::from_str(r#""Muscle Gain""#).unwrap();
        assert_eq!(goal, Goal::MuscleGain);
        let goal: Goal = serde_json::from_str(r#""Strength""#).unwrap();
        assert_eq!(goal, Goal::Strength);
    }

    #[test]
    fn unknown_goal_degrades_to_general() {
        let goal: Goal = serde_json::from_str(r#""Parkour""#).unwrap();
        assert_eq!(goal, Goal::General);
    }

    #[test]
    fn equipment_mode_from_strings() {
        let mode: EquipmentMode = serde_json::from_str(r#""gym""#).unwrap();
        assert_eq!(mode, EquipmentMode::Gym);
        let mode: EquipmentMode = serde_json::from_str(r#""Dumbbells""#).unwrap();
        assert_eq!(mode, EquipmentMode::DumbbellsOnly);
        // Anything unrecognized means no equipment is assumed.
        let mode: EquipmentMode = serde_json::from_str(r#""park""#).unwrap();
        assert_eq!(mode, EquipmentMode::BodyweightOnly);
    }

    #[test]
    fn equipment_mode_from_explicit_set() {
        let mode: EquipmentMode = serde_json::from_str(r#"["Barbell", "Cable"]"#).unwrap();
        let EquipmentMode::Custom(items) = mode else {
            panic!("expected custom mode");
        };
        assert_eq!(items, vec!["barbell", "cable"]);
    }

    #[test]
    fn gym_allowance_permits_everything() {
        let allowance = EquipmentMode::Gym.allowance();
        assert!(allowance.permits(&["barbell".to_owned()]));
        assert!(allowance.permits(&[]));
    }

    #[test]
    fn restricted_allowance_requires_intersection() {
        let allowance = EquipmentMode::BodyweightOnly.allowance();
        assert!(allowance.permits(&["Body Weight".to_owned()]));
        assert!(!allowance.permits(&["barbell".to_owned()]));
        assert!(!allowance.permits(&[]));
    }

    #[test]
    fn profile_defaults_from_minimal_input() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.goal, Goal::General);
        assert_eq!(profile.days_per_week, 4);
        assert_eq!(profile.equipment_mode, EquipmentMode::Gym);
        assert!(profile.injuries.is_empty());
    }

    #[test]
    fn injuries_are_normalized() {
        let profile = Profile {
            goal: Goal::General,
            days_per_week: 3,
            equipment_mode: EquipmentMode::Gym,
            injuries: vec!["  Knees ".to_owned(), String::new(), "BACK".to_owned()],
        };
        assert_eq!(profile.normalized_injuries(), vec!["knees", "back"]);
    }
}
