// ABOUTME: Trainsmith CLI - composes multi-week training plans from profile and prediction files
// ABOUTME: Loads the exercise catalog, runs the composition pipeline, and prints text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

//! Usage:
//! ```bash
//! # Compose a 4-week plan rendered as text
//! trainsmith-cli --profile profile.json --predictions predictions.json
//!
//! # Emit the plan as JSON with a custom catalog
//! trainsmith-cli --profile profile.json --predictions predictions.json \
//!     --catalog data/exercises.json --weeks 6 --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use trainsmith::{render_plan_text, AppConfig};
use trainsmith_core::{Prediction, Profile};
use trainsmith_engine::{ExerciseCatalog, PlanComposer};

#[derive(Parser)]
#[command(
    name = "trainsmith-cli",
    about = "Trainsmith plan composition CLI",
    long_about = "Composes a multi-week training plan from a user profile and a predicted exercise set, applying injury, equipment, and volume safeguards."
)]
struct Cli {
    /// Exercise catalog path (defaults to TRAINSMITH_CATALOG or data/exercises.json)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// User profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Predicted exercises JSON file (name to sets/reps/intensity map)
    #[arg(long)]
    predictions: PathBuf,

    /// Number of weeks to generate
    #[arg(long, default_value_t = 4)]
    weeks: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable day-by-day listing
    Text,
    /// Full plan serialized as JSON
    Json,
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.logging.init()?;

    let cli = Cli::parse();

    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    let catalog = ExerciseCatalog::load_or_empty(&catalog_path);
    info!(
        catalog = %catalog_path.display(),
        exercises = catalog.len(),
        "catalog loaded"
    );

    let profile: Profile = read_json(&cli.profile, "profile")?;
    let predictions: Prediction = read_json(&cli.predictions, "predictions")?;

    let composer = PlanComposer::new(Arc::new(catalog));
    let plan = composer.compose(&profile, &predictions, cli.weeks);

    match cli.format {
        OutputFormat::Text => print!("{}", render_plan_text(&plan, &profile)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan)
                .context("failed to serialize plan as JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {what} file {}", path.display()))
}
