// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Human-readable workout summaries.

use std::fmt;

use crate::models::Metrics;

/// Informational message about a completed workout.
///
/// Numeric fields are rendered up front with three fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMessage {
    pub workout_type: String,
    pub duration: String,
    pub distance: String,
    pub speed: String,
    pub calories: String,
}

impl InfoMessage {
    /// The single summary line.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<&Metrics> for InfoMessage {
    fn from(metrics: &Metrics) -> Self {
        Self {
            workout_type: metrics.workout_type.label().to_string(),
            duration: format!("{:.3}", metrics.duration_hours),
            distance: format!("{:.3}", metrics.distance_km),
            speed: format!("{:.3}", metrics.mean_speed_kmh),
            calories: format!("{:.3}", metrics.calories_kcal),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {} h; Distance: {} km; Avg speed: {} km/h; Calories burned: {}.",
            self.workout_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Render metrics as a summary line.
pub fn format_report(metrics: &Metrics) -> String {
    InfoMessage::from(metrics).message()
}
