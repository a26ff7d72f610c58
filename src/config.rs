// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Resolves the exercise catalog location and logging setup from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Environment-based application configuration

use crate::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;

/// Default catalog location relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "data/exercises.json";

/// Application configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the exercise catalog JSON file
    pub catalog_path: PathBuf,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables
    ///
    /// `TRAINSMITH_CATALOG` overrides the catalog path. Logging picks up
    /// `RUST_LOG` and `LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        let catalog_path = env::var("TRAINSMITH_CATALOG")
            .map_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        Self {
            catalog_path,
            logging: LoggingConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_catalog() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from("data/exercises.json"));
    }
}
