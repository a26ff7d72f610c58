// ABOUTME: Immutable exercise catalog record with muscle, body-part, and equipment metadata
// ABOUTME: Wire shape matches the catalog JSON (camelCase field names)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

use serde::{Deserialize, Serialize};

use super::profile::EquipmentAllowance;

/// One entry of the exercise catalog.
///
/// Records are loaded once at process start and never mutated. All matching
/// against a record (injuries, muscle keys, equipment) is case-insensitive;
/// the stored strings keep their original display casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Unique display name
    pub name: String,
    /// Body parts this exercise loads
    #[serde(default)]
    pub body_parts: Vec<String>,
    /// Muscles this exercise targets
    #[serde(default)]
    pub target_muscles: Vec<String>,
    /// Equipment required to perform the exercise
    #[serde(default)]
    pub equipments: Vec<String>,
}

impl ExerciseRecord {
    /// Whether any of this record's body parts appears in the injury set.
    ///
    /// `injuries` must already be lower-cased (see
    /// [`Profile::normalized_injuries`](super::Profile::normalized_injuries)).
    #[must_use]
    pub fn conflicts_with_injuries(&self, injuries: &[String]) -> bool {
        self.body_parts
            .iter()
            .any(|part| injuries.iter().any(|injury| injury == &part.to_lowercase()))
    }

    /// Whether the given lowercase key appears among this record's body
    /// parts or target muscles.
    #[must_use]
    pub fn targets(&self, key: &str) -> bool {
        self.body_parts
            .iter()
            .chain(&self.target_muscles)
            .any(|entry| entry.to_lowercase() == key)
    }

    /// Whether this record's equipment is usable under the given allowance.
    #[must_use]
    pub fn usable_with(&self, allowance: &EquipmentAllowance) -> bool {
        allowance.permits(&self.equipments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record() -> ExerciseRecord {
        ExerciseRecord {
            name: "Barbell Bench Press".to_owned(),
            body_parts: vec!["Chest".to_owned()],
            target_muscles: vec!["Pectorals".to_owned()],
            equipments: vec!["Barbell".to_owned()],
        }
    }

    #[test]
    fn injury_matching_is_case_insensitive() {
        let rec = record();
        assert!(rec.conflicts_with_injuries(&["chest".to_owned()]));
        assert!(!rec.conflicts_with_injuries(&["knees".to_owned()]));
        assert!(!rec.conflicts_with_injuries(&[]));
    }

    #[test]
    fn targets_checks_body_parts_and_muscles() {
        let rec = record();
        assert!(rec.targets("chest"));
        assert!(rec.targets("pectorals"));
        assert!(!rec.targets("back"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"name":"push-up","bodyParts":["chest"],"targetMuscles":["pectorals"],"equipments":["body weight"]}"#;
        let rec: ExerciseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name, "push-up");
        assert_eq!(rec.equipments, vec!["body weight"]);
    }

    #[test]
    fn missing_metadata_defaults_to_empty() {
        let rec: ExerciseRecord = serde_json::from_str(r#"{"name":"mystery"}"#).unwrap();
        assert!(rec.body_parts.is_empty());
        assert!(rec.equipments.is_empty());
    }
}
