// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker CLI
//!
//! Processes the configured sensor packages and prints one summary line per
//! workout to stdout.

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use workout_tracker::config::{Config, LogFormat};
use workout_tracker::services::process_packages;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize structured logging on stderr
    init_logging(config.log_format)?;
    tracing::info!(
        packages = config.packages.len(),
        output_format = ?config.output_format,
        "Starting Workout-Tracker"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = process_packages(&config.packages, config.output_format, &mut out)?;
    out.flush()?;

    tracing::info!(
        reported = summary.reported,
        unknown = summary.unknown,
        "Finished processing packages"
    );
    Ok(())
}

/// Initialize structured logging, JSON or human-readable.
fn init_logging(format: LogFormat) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env()
        .add_directive("workout_tracker=debug".parse()?)
        .add_directive("info".parse()?);

    let layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry().with(filter).with(layer).init();
    Ok(())
}
