// ABOUTME: Small descriptive statistics helpers shared by the behavior analyzer
// ABOUTME: Mean, population standard deviation, unit-interval clamping, and decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wellpath Contributors

/// Arithmetic mean; zero for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; zero for fewer than two values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - avg).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Clamp into `[0, 1]`
#[must_use]
pub fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Divide, clamping the quotient into `[0, 1]`
#[must_use]
pub fn unit_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    unit(numerator / denominator)
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
