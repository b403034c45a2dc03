// ABOUTME: Daily activity summary supplied by sensor collaborators
// ABOUTME: ActivityEntry definition with replace-per-day semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's activity summary for a user
///
/// Entries arrive from sensor/wearable collaborators at day granularity.
/// There is at most one entry per (user, day); a later write for the same
/// day replaces the prior entry entirely, it never merges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// The calendar day this summary covers
    pub date: NaiveDate,
    /// Total calories burned, defaults to 0
    pub calories_burned: f64,
    /// Total workout minutes
    pub workout_minutes: u32,
    /// Total steps taken, defaults to 0
    pub total_steps: u64,
}

impl ActivityEntry {
    /// Create an empty summary for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calories_burned: 0.0,
            workout_minutes: 0,
            total_steps: 0,
        }
    }

    /// Set calories burned
    #[must_use]
    pub const fn with_calories_burned(mut self, calories: f64) -> Self {
        self.calories_burned = calories;
        self
    }

    /// Set workout minutes
    #[must_use]
    pub const fn with_workout_minutes(mut self, minutes: u32) -> Self {
        self.workout_minutes = minutes;
        self
    }

    /// Set total steps
    #[must_use]
    pub const fn with_total_steps(mut self, steps: u64) -> Self {
        self.total_steps = steps;
        self
    }
}
