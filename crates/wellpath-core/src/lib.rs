// ABOUTME: Core types and constants for the Wellpath health-risk engine
// ABOUTME: Foundation crate with error handling, the canonical data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

#![deny(unsafe_code)]

//! # Wellpath Core
//!
//! Foundation crate providing shared types and constants for the Wellpath
//! health-risk scoring and coaching engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The single canonical data model (profiles, logs, outputs)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Canonical health data model consumed and produced by the engine
pub mod models;

/// Application constants organized by domain
pub mod constants;
