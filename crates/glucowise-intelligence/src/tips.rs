// ABOUTME: Rotating daily tip selection from a fixed content catalog
// ABOUTME: Tip, TipCatalog, and DailyTipEngine definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Daily tips
//!
//! Tips are static content; the engine only selects, it never generates.
//! A day with any recorded data gets one of three fixed tip pairs chosen
//! by `day_of_month % 3` and returned in randomized order. A day with no
//! meals, no activity, and no readings gets a single placeholder tip
//! prompting the user to log something.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

/// Identity of the placeholder tip returned for days without any data
pub const NO_DATA_TIP_ID: &str = "no_data";

/// A single contextual tip shown on the daily dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tip {
    /// Stable identity for the tip content
    pub id: String,
    /// Short headline
    pub title: String,
    /// One or two sentence body
    pub message: String,
    /// Call-to-action label
    pub action: String,
}

impl Tip {
    fn new(id: &str, title: &str, message: &str, action: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            action: action.into(),
        }
    }

    /// Whether this is the no-data placeholder
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.id == NO_DATA_TIP_ID
    }
}

/// The fixed tip content the engine rotates through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipCatalog {
    /// Tip pairs rotated by day of month
    pub rotations: Vec<[Tip; 2]>,
    /// Placeholder returned when the day has no recorded data
    pub no_data: Tip,
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self {
            rotations: vec![
                [
                    Tip::new(
                        "take_a_walk",
                        "Take a Walk",
                        "Walking 10 minutes can boost your mood and lower blood sugar.",
                        "View Activity",
                    ),
                    Tip::new(
                        "hba1c_progress",
                        "HbA1c Alert",
                        "Great progress! Your HbA1c levels are improving. Keep it up!",
                        "Know More",
                    ),
                ],
                [
                    Tip::new(
                        "eat_greens",
                        "Eat Greens",
                        "Adding greens to meals improves blood sugar stability.",
                        "Diet Tips",
                    ),
                    Tip::new(
                        "sleep_matters",
                        "Sleep Matters",
                        "A good night's sleep helps regulate insulin levels.",
                        "Improve Sleep",
                    ),
                ],
                [
                    Tip::new(
                        "stay_hydrated",
                        "Stay Hydrated",
                        "Drinking water helps flush excess sugar from your system.",
                        "Hydration Guide",
                    ),
                    Tip::new(
                        "track_meals",
                        "Track Meals",
                        "Logging meals helps spot patterns affecting glucose levels.",
                        "Log Meals",
                    ),
                ],
            ],
            no_data: Tip::new(
                NO_DATA_TIP_ID,
                "No Tips Available",
                "No data has been recorded for this day. Add meals or activities to get recommendations.",
                "Log Data",
            ),
        }
    }
}

/// Selects the day's tips from a [`TipCatalog`]
#[derive(Debug, Clone, Default)]
pub struct DailyTipEngine {
    catalog: TipCatalog,
}

impl DailyTipEngine {
    /// Create an engine over the default catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over a custom catalog
    #[must_use]
    pub const fn with_catalog(catalog: TipCatalog) -> Self {
        Self { catalog }
    }

    /// Tips for `date`
    ///
    /// `has_data` reflects whether the day has any meal, activity, or
    /// reading on record; without data the single placeholder tip is
    /// returned regardless of the date.
    #[must_use]
    pub fn daily_tips(&self, date: NaiveDate, has_data: bool) -> Vec<Tip> {
        if !has_data {
            return vec![self.catalog.no_data.clone()];
        }
        if self.catalog.rotations.is_empty() {
            return Vec::new();
        }

        let rotation = date.day() as usize % self.catalog.rotations.len();
        let mut tips: Vec<Tip> = self.catalog.rotations[rotation].to_vec();
        tips.shuffle(&mut thread_rng());
        tips
    }
}
