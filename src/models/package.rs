// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw sensor packages.

use serde::Deserialize;

/// One (tag, values) pair as received from the sensor feed.
///
/// Deserializes from the pair form `["SWM", [720, 1, 80, 25, 40]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, Vec<f64>)")]
pub struct Package {
    pub workout_type: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            values,
        }
    }

    /// The reference packages processed when nothing else is configured.
    pub fn defaults() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

impl From<(String, Vec<f64>)> for Package {
    fn from((workout_type, values): (String, Vec<f64>)) -> Self {
        Self {
            workout_type,
            values,
        }
    }
}
