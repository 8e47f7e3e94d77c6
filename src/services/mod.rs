// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - metric calculation and reporting.

pub mod calculator;
pub mod package;
pub mod report;

pub use calculator::{calculate, read_package};
pub use package::{process_package, process_packages, BatchSummary};
pub use report::{format_report, InfoMessage};
