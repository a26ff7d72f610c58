// ABOUTME: Substitution resolver - swaps or de-risks exercises under equipment and injury limits
// ABOUTME: First catalog match wins; no scoring or backtracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Exercise substitution under equipment and injury constraints.

use tracing::debug;

use trainsmith_core::constants::substitution::NO_SUBSTITUTE_VOLUME_SCALE;
use trainsmith_core::models::{EquipmentAllowance, ExerciseRecord, Prediction, Profile};
use trainsmith_core::muscle::MuscleGroup;

use crate::catalog::ExerciseCatalog;

/// Resolves each predicted exercise against the catalog and the profile's
/// constraints.
///
/// Per exercise, in prediction order: keep it unchanged when its catalog
/// record is compatible (or when it has no record at all; unknown
/// exercises are assumed safe and available, a documented limitation);
/// otherwise swap in the first compatible catalog record targeting the
/// same muscle group; failing that, retain it with sets and intensity
/// scaled down by 30%.
pub struct SubstitutionResolver<'a> {
    catalog: &'a ExerciseCatalog,
}

impl<'a> SubstitutionResolver<'a> {
    /// Create a resolver over the shared catalog.
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// Produce a new prediction map with substitutions applied. The input
    /// map is never mutated.
    #[must_use]
    pub fn resolve(&self, predictions: &Prediction, profile: &Profile) -> Prediction {
        let injuries = profile.normalized_injuries();
        let allowance = profile.equipment_mode.allowance();

        let mut resolved = Prediction::with_capacity(predictions.len());
        for (name, &prescription) in predictions {
            let Some(record) = self.catalog.find_by_name_substring(name) else {
                resolved.insert(name.clone(), prescription);
                continue;
            };

            let contraindicated = record.conflicts_with_injuries(&injuries);
            let unavailable = !record.usable_with(&allowance);
            if !contraindicated && !unavailable {
                resolved.insert(name.clone(), prescription);
                continue;
            }

            let group = MuscleGroup::for_exercise(name);
            if let Some(substitute) = self.find_substitute(group, &injuries, &allowance) {
                debug!(
                    original = %name,
                    substitute = %substitute.name,
                    contraindicated,
                    unavailable,
                    "substituting exercise"
                );
                resolved.insert(substitute.name.clone(), prescription);
            } else {
                debug!(exercise = %name, "no substitute found, reducing volume");
                resolved.insert(
                    name.clone(),
                    prescription.with_reduced_volume(NO_SUBSTITUTE_VOLUME_SCALE),
                );
            }
        }
        resolved
    }

    /// First catalog record, in load order, that targets the group's
    /// muscle key, avoids every injured body part, and fits the equipment
    /// allowance. A group without a catalog key never matches.
    fn find_substitute(
        &self,
        group: MuscleGroup,
        injuries: &[String],
        allowance: &EquipmentAllowance,
    ) -> Option<&ExerciseRecord> {
        let key = group.catalog_key()?;
        self.catalog.iter().find(|record| {
            !record.conflicts_with_injuries(injuries)
                && record.usable_with(allowance)
                && record.targets(key)
        })
    }
}
