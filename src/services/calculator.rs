// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Metric calculation for sensor records.
//!
//! Every workout shares the distance formula (action count times a step
//! length); mean speed and calories are chosen per workout kind.

use crate::error::{RecordError, Result};
use crate::models::{Metrics, WorkoutRecord, WorkoutType};

pub const METERS_PER_KM: f64 = 1000.0;
pub const MIN_PER_HOUR: f64 = 60.0;
/// Meters covered per action while running or walking.
pub const STEP_LENGTH_RUN_WALK_M: f64 = 0.65;
/// Meters covered per stroke while swimming.
pub const STEP_LENGTH_SWIM_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;
const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Resolve a sensor tag and build the matching record from its values.
pub fn read_package(tag: &str, values: &[f64]) -> Result<WorkoutRecord> {
    let workout_type = WorkoutType::from_tag(tag)?;
    WorkoutRecord::from_values(workout_type, values)
}

/// Compute metrics straight from a sensor tag and its values.
pub fn calculate(tag: &str, values: &[f64]) -> Result<Metrics> {
    let record = read_package(tag, values)?;
    let metrics = record.metrics()?;
    tracing::debug!(
        workout_type = %metrics.workout_type,
        distance_km = metrics.distance_km,
        mean_speed_kmh = metrics.mean_speed_kmh,
        calories_kcal = metrics.calories_kcal,
        "Computed workout metrics"
    );
    Ok(metrics)
}

impl WorkoutRecord {
    fn step_length_m(&self) -> f64 {
        match self {
            WorkoutRecord::Swimming { .. } => STEP_LENGTH_SWIM_M,
            WorkoutRecord::Running { .. } | WorkoutRecord::Walking { .. } => {
                STEP_LENGTH_RUN_WALK_M
            }
        }
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.action() as f64 * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming derives it from the pool geometry rather than stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            WorkoutRecord::Swimming {
                duration_hours,
                pool_length_m,
                pool_laps_count,
                ..
            } => pool_length_m * pool_laps_count / METERS_PER_KM / duration_hours,
            WorkoutRecord::Running { duration_hours, .. }
            | WorkoutRecord::Walking { duration_hours, .. } => {
                self.distance_km() / duration_hours
            }
        }
    }

    /// Calories burned in kcal.
    pub fn spent_calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            WorkoutRecord::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight_kg / METERS_PER_KM
                    * duration_hours
                    * MIN_PER_HOUR
            }
            WorkoutRecord::Walking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                // Floor division is part of the formula, not real division.
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + floor_div(speed.powi(2), *height_cm)
                        * WALK_SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * duration_hours
                    * MIN_PER_HOUR
            }
            WorkoutRecord::Swimming { weight_kg, .. } => {
                (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// All derived metrics for this record.
    ///
    /// Fails if any metric overflows, e.g. a subnormal duration or an
    /// extreme weight; no partial metrics are returned.
    pub fn metrics(&self) -> Result<Metrics> {
        let metrics = Metrics {
            workout_type: self.workout_type(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        };

        let fields = [
            ("distance", metrics.distance_km),
            ("mean_speed", metrics.mean_speed_kmh),
            ("calories", metrics.calories_kcal),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RecordError::NonFiniteMetric { field: *field }.into());
        }

        Ok(metrics)
    }
}

/// Floating-point floor division.
///
/// Derived from the remainder rather than `(a / b).floor()` so that a
/// quotient which rounds up to a whole number is not floored past the
/// true result.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
