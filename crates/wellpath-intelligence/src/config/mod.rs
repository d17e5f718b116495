// ABOUTME: Configuration module for wellpath-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

/// Engine configuration (metrics, risk scoring, behavior targets, coaching thresholds)
pub mod intelligence;

pub use intelligence::{ConfigError, EngineConfig};
