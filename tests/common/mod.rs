// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::config::OutputFormat;
use workout_tracker::services::{process_packages, BatchSummary};
use workout_tracker::{Package, Result};

/// Tolerance for comparing computed metrics against hand-derived values.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-9;

/// Assert two floats agree within [`EPSILON`].
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Run a batch into an in-memory buffer and return the result and output.
#[allow(dead_code)]
pub fn run_batch(packages: &[Package], format: OutputFormat) -> (Result<BatchSummary>, String) {
    let mut out = Vec::new();
    let result = process_packages(packages, format, &mut out);
    let output = String::from_utf8(out).expect("Output should be UTF-8");
    (result, output)
}
