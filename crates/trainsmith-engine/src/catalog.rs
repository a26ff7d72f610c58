// ABOUTME: In-memory read-only exercise catalog with substring and muscle lookups
// ABOUTME: File loading degrades to an empty catalog instead of aborting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! The exercise catalog: a read-only index built once per process.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use trainsmith_core::errors::CatalogError;
use trainsmith_core::models::ExerciseRecord;

/// Read-only index over exercise records.
///
/// Load order is preserved and observable: both lookups resolve ties by
/// returning the earliest-loaded match, which keeps substitution and
/// name resolution deterministic.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    records: Vec<ExerciseRecord>,
}

impl ExerciseCatalog {
    /// Build a catalog from already-parsed records.
    #[must_use]
    pub fn new(records: Vec<ExerciseRecord>) -> Self {
        Self { records }
    }

    /// An empty catalog. Every lookup misses, which routes callers to
    /// their pass-through and fallback paths.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON file of records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<ExerciseRecord> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(count = records.len(), path = %path.display(), "loaded exercise catalog");
        Ok(Self::new(records))
    }

    /// Load a catalog from a JSON file, degrading to an empty catalog on
    /// any failure. The failure is logged, never propagated.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(path = %error.path().display(), %error, "catalog unavailable, continuing with empty catalog");
                Self::empty()
            }
        }
    }

    /// First record whose name contains `query`, case-insensitively.
    /// Ties resolve by load order.
    #[must_use]
    pub fn find_by_name_substring(&self, query: &str) -> Option<&ExerciseRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase().contains(&needle))
    }

    /// All records whose body parts or target muscles contain the given
    /// lowercase key, in load order.
    #[must_use]
    pub fn find_by_muscle_or_body_part(&self, key: &str) -> Vec<&ExerciseRecord> {
        self.records
            .iter()
            .filter(|record| record.targets(key))
            .collect()
    }

    /// Iterate records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExerciseRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExerciseCatalog {
    type Item = &'a ExerciseRecord;
    type IntoIter = std::slice::Iter<'a, ExerciseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
