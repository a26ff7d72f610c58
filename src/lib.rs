// ABOUTME: Main library entry point for the Trainsmith plan composition platform
// ABOUTME: Wires the core domain types and composition engine to configuration, logging, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainsmith Contributors

#![deny(unsafe_code)]

//! # Trainsmith
//!
//! A workout plan composition engine that turns a raw exercise prediction into a
//! multi-week training schedule tailored to a user's profile.
//!
//! ## Features
//!
//! - **Exercise substitution**: Replaces exercises that conflict with injuries or
//!   unavailable equipment using a catalog of alternatives
//! - **Volume safety**: Caps weekly set volume per muscle group and adjusts
//!   prescriptions to the user's training goal
//! - **Weekly scheduling**: Distributes exercises across training days by
//!   movement category with rest days in between
//! - **Progressive overload**: Projects the base week forward with gradual
//!   set and intensity increases
//!
//! ## Architecture
//!
//! The workspace is split into focused crates:
//! - `trainsmith-core`: Domain models, muscle group taxonomy, and tuning constants
//! - `trainsmith-engine`: Catalog, substitution, refinement, scheduling, and progression
//! - `trainsmith` (this crate): Configuration, logging, plan formatting, and the CLI

pub mod config;
pub mod formatter;
pub mod logging;

pub use config::AppConfig;
pub use formatter::render_plan_text;
pub use logging::{LogFormat, LoggingConfig};
