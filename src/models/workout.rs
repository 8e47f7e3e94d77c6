// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout kinds and the validated sensor records behind them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, RecordError, Result};

/// The three supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Resolve a sensor tag ("SWM", "RUN", "WLK").
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            other => Err(AppError::UnknownWorkoutType(other.to_string())),
        }
    }

    /// Sensor tag for this workout kind.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Name shown in reports.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single workout as read from the sensors.
///
/// Only built through [`WorkoutRecord::from_values`], so every record holds
/// finite values with a positive duration.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutRecord {
    Running {
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
    },
    Walking {
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps_count: f64,
    },
}

impl WorkoutRecord {
    /// Build a record from positional sensor values.
    ///
    /// Order is action, duration, weight, then height (walking) or pool
    /// length and lap count (swimming).
    pub fn from_values(workout_type: WorkoutType, values: &[f64]) -> Result<Self> {
        if values.len() != workout_type.arity() {
            return Err(RecordError::ArityMismatch {
                workout_type: workout_type.tag(),
                expected: workout_type.arity(),
                actual: values.len(),
            }
            .into());
        }

        let action = parse_action(values[0])?;
        let duration_hours = parse_duration(values[1])?;
        let weight_kg = non_negative("weight", values[2])?;

        let record = match workout_type {
            WorkoutType::Running => WorkoutRecord::Running {
                action,
                duration_hours,
                weight_kg,
            },
            WorkoutType::SportsWalking => {
                let height_cm = finite("height", values[3])?;
                if height_cm <= 0.0 {
                    return Err(RecordError::NonPositiveHeight(height_cm).into());
                }
                WorkoutRecord::Walking {
                    action,
                    duration_hours,
                    weight_kg,
                    height_cm,
                }
            }
            WorkoutType::Swimming => WorkoutRecord::Swimming {
                action,
                duration_hours,
                weight_kg,
                pool_length_m: non_negative("pool_length", values[3])?,
                pool_laps_count: non_negative("pool_laps", values[4])?,
            },
        };

        Ok(record)
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutRecord::Running { .. } => WorkoutType::Running,
            WorkoutRecord::Walking { .. } => WorkoutType::SportsWalking,
            WorkoutRecord::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    pub fn action(&self) -> u64 {
        match self {
            WorkoutRecord::Running { action, .. }
            | WorkoutRecord::Walking { action, .. }
            | WorkoutRecord::Swimming { action, .. } => *action,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            WorkoutRecord::Running { duration_hours, .. }
            | WorkoutRecord::Walking { duration_hours, .. }
            | WorkoutRecord::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            WorkoutRecord::Running { weight_kg, .. }
            | WorkoutRecord::Walking { weight_kg, .. }
            | WorkoutRecord::Swimming { weight_kg, .. } => *weight_kg,
        }
    }
}

fn finite(field: &'static str, value: f64) -> std::result::Result<f64, RecordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordError::NonFiniteValue { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> std::result::Result<f64, RecordError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(RecordError::NegativeValue { field, value });
    }
    Ok(value)
}

fn parse_action(value: f64) -> std::result::Result<u64, RecordError> {
    let value = non_negative("action", value)?;
    if value.fract() != 0.0 {
        return Err(RecordError::FractionalAction(value));
    }
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it overflows.
    if value >= u64::MAX as f64 {
        return Err(RecordError::ActionOutOfRange(value));
    }
    Ok(value as u64)
}

fn parse_duration(value: f64) -> std::result::Result<f64, RecordError> {
    let value = finite("duration", value)?;
    if value <= 0.0 {
        return Err(RecordError::NonPositiveDuration(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(WorkoutType::from_tag("SWM").unwrap(), WorkoutType::Swimming);
        assert_eq!(WorkoutType::from_tag("RUN").unwrap(), WorkoutType::Running);
        assert_eq!(
            WorkoutType::from_tag("WLK").unwrap(),
            WorkoutType::SportsWalking
        );
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        let err = WorkoutType::from_tag("run").unwrap_err();
        assert!(matches!(err, AppError::UnknownWorkoutType(tag) if tag == "run"));
    }

    #[test]
    fn test_tag_round_trips() {
        for workout_type in WorkoutType::ALL {
            assert_eq!(
                WorkoutType::from_tag(workout_type.tag()).unwrap(),
                workout_type
            );
        }
    }

    #[test]
    fn test_from_values_walking() {
        let record =
            WorkoutRecord::from_values(WorkoutType::SportsWalking, &[9000.0, 1.0, 75.0, 180.0])
                .unwrap();
        assert_eq!(
            record,
            WorkoutRecord::Walking {
                action: 9000,
                duration_hours: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            }
        );
        assert_eq!(record.workout_type(), WorkoutType::SportsWalking);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = WorkoutRecord::from_values(WorkoutType::Swimming, &[720.0, 1.0, 80.0])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::ArityMismatch {
                workout_type: "SWM",
                expected: 5,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err =
            WorkoutRecord::from_values(WorkoutType::Running, &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn test_negative_laps_rejected() {
        let err = WorkoutRecord::from_values(
            WorkoutType::Swimming,
            &[720.0, 1.0, 80.0, 25.0, -1.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::NegativeValue {
                field: "pool_laps",
                ..
            })
        ));
    }

    #[test]
    fn test_fractional_action_rejected() {
        let err =
            WorkoutRecord::from_values(WorkoutType::Running, &[10.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::FractionalAction(_))
        ));
    }

    #[test]
    fn test_action_at_u64_limit_rejected() {
        let two_pow_64 = 18_446_744_073_709_551_616.0;
        let err = WorkoutRecord::from_values(WorkoutType::Running, &[two_pow_64, 1.0, 75.0])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::ActionOutOfRange(v)) if v == two_pow_64
        ));

        let record =
            WorkoutRecord::from_values(WorkoutType::Running, &[9_007_199_254_740_992.0, 1.0, 75.0])
                .unwrap();
        assert_eq!(record.action(), 9_007_199_254_740_992);
    }

    #[test]
    fn test_nan_rejected() {
        let err = WorkoutRecord::from_values(WorkoutType::Running, &[100.0, 1.0, f64::NAN])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::NonFiniteValue { field: "weight" })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err =
            WorkoutRecord::from_values(WorkoutType::SportsWalking, &[9000.0, 1.0, 75.0, 0.0])
                .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRecord(RecordError::NonPositiveHeight(_))
        ));
    }
}
