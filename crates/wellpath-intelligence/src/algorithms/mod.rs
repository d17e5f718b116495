// ABOUTME: Algorithm module for physiological estimates
// ABOUTME: Currently the age-predicted maximum heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

/// Maximum heart rate estimation
pub mod maxhr;

pub use maxhr::MaxHrAlgorithm;
