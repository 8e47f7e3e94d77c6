// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod metrics;
pub mod package;
pub mod workout;

pub use metrics::Metrics;
pub use package::Package;
pub use workout::{WorkoutRecord, WorkoutType};
