// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Batch processing of sensor packages.
//!
//! Each package is turned into metrics and written as one line. Unknown
//! workout tags are reported in place of a summary and the batch carries
//! on; an invalid record stops the batch.

use std::io::Write;

use crate::config::OutputFormat;
use crate::error::{AppError, Result};
use crate::models::Package;
use crate::services::calculator::calculate;
use crate::services::report::format_report;

/// Line written after the diagnostic for an unknown workout tag.
pub const UNABLE_TO_RUN: &str = "Unable to run main function";

/// Outcome counts for a processed batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Packages that produced a summary line
    pub reported: usize,
    /// Packages skipped because of an unknown workout tag
    pub unknown: usize,
}

/// Compute and write the summary for a single package.
pub fn process_package<W: Write>(
    package: &Package,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let metrics = calculate(&package.workout_type, &package.values)?;

    match format {
        OutputFormat::Text => writeln!(out, "{}", format_report(&metrics))?,
        OutputFormat::Json => {
            let line = serde_json::to_string(&metrics).map_err(|e| AppError::Internal(e.into()))?;
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}

/// Process packages in order, writing one result per package.
pub fn process_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for package in packages {
        match process_package(package, format, out) {
            Ok(()) => summary.reported += 1,
            Err(err) if err.is_recoverable() => {
                tracing::warn!(
                    workout_type = %package.workout_type,
                    "Skipping package with unknown workout type"
                );
                writeln!(out, "{}", err)?;
                writeln!(out, "{}", UNABLE_TO_RUN)?;
                summary.unknown += 1;
            }
            Err(err) => {
                tracing::error!(
                    workout_type = %package.workout_type,
                    error = %err,
                    "Aborting batch"
                );
                return Err(err);
            }
        }
    }

    tracing::debug!(
        reported = summary.reported,
        unknown = summary.unknown,
        "Batch processed"
    );
    Ok(summary)
}
