// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived workout metrics.

use serde::{Deserialize, Serialize};

use crate::models::WorkoutType;

/// Metrics computed from one workout record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Workout kind the metrics were computed for
    pub workout_type: WorkoutType,
    /// Duration in hours (as reported by the sensor)
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}
