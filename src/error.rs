// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown training: {0}")]
    UnknownWorkoutType(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether a batch can carry on with the next package after this error.
    ///
    /// Only an unknown workout tag is recoverable; a malformed record or a
    /// failed write aborts the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::UnknownWorkoutType(_))
    }
}

/// Reasons a set of sensor values cannot become a workout record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("{workout_type} expects {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("action must be a whole number, got {0}")]
    FractionalAction(f64),

    #[error("action is too large, got {0}")]
    ActionOutOfRange(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("{field} is not a finite number for these inputs")]
    NonFiniteMetric { field: &'static str },
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, AppError>;
