// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: derive fitness metrics from raw sensor readings
//!
//! This crate turns step/stroke counts from running, walking and swimming
//! sensors into distance, mean speed and calories burned, and renders a
//! one-line summary per workout.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, RecordError, Result};
pub use models::{Metrics, Package, WorkoutRecord, WorkoutType};
pub use services::{calculate, format_report, process_packages, read_package};
