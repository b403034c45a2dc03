// ABOUTME: Blood glucose reading models and range classification
// ABOUTME: BloodReading, ReadingType, and GlucoseBand definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of the in-range band, mg/dL
const GOOD_UPPER_MG_DL: f64 = 120.0;

/// Upper bound of the elevated band, mg/dL
const ELEVATED_UPPER_MG_DL: f64 = 180.0;

/// Measurement context of a blood glucose reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    /// Taken after an overnight fast
    Fasting,
    /// Taken shortly before a meal
    PreMeal,
    /// Taken after a meal
    PostMeal,
    /// Taken before a workout
    PreWorkout,
    /// Taken after a workout
    PostWorkout,
}

/// Coarse classification of a glucose value for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseBand {
    /// At or below 120 mg/dL
    Good,
    /// Above 120 and at or below 180 mg/dL
    Elevated,
    /// Above 180 mg/dL
    High,
}

impl GlucoseBand {
    /// Classify a glucose value in mg/dL
    #[must_use]
    pub fn from_mg_dl(value: f64) -> Self {
        if value <= GOOD_UPPER_MG_DL {
            Self::Good
        } else if value <= ELEVATED_UPPER_MG_DL {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Good => "in range",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

/// A single blood glucose measurement
///
/// Readings are created on log and deleted individually by id; they are
/// never updated in place. The record store rejects readings whose
/// timestamp lies in the future relative to the insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodReading {
    /// Unique identifier for this reading
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Measurement context
    pub reading_type: ReadingType,
    /// Measured value in mg/dL, non-negative
    pub value_mg_dl: f64,
    /// When the measurement was taken; its UTC calendar day is the bucket key
    pub taken_at: DateTime<Utc>,
}

impl BloodReading {
    /// Create a new reading with a fresh id
    #[must_use]
    pub fn new(
        user_id: Uuid,
        reading_type: ReadingType,
        value_mg_dl: f64,
        taken_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            reading_type,
            value_mg_dl,
            taken_at,
        }
    }

    /// Classify this reading's value
    #[must_use]
    pub fn band(&self) -> GlucoseBand {
        GlucoseBand::from_mg_dl(self.value_mg_dl)
    }

    /// Whether the reading claims a timestamp after `now`
    #[must_use]
    pub fn is_future_dated(&self, now: DateTime<Utc>) -> bool {
        self.taken_at > now
    }
}
