// ABOUTME: Structured error types for the application edge of the plan engine
// ABOUTME: Covers catalog file loading; the core pipeline itself never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Error types for catalog loading.
//!
//! The composition pipeline is designed around graceful degradation and never
//! surfaces an error to its caller. The only fallible operation in this
//! workspace is reading and parsing the catalog file, and even that failure
//! is recoverable: callers downgrade to an empty catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the exercise catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog file '{path}'")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The catalog file contents are not valid catalog JSON
    #[error("failed to parse catalog file '{path}'")]
    Parse {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Path of the catalog file involved in this error.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
