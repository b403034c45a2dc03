// ABOUTME: User profile and biometric models used by the goal calculators
// ABOUTME: UserProfile, Gender, and ActivityLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};

/// Gender used for the basal metabolic rate adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male adjustment (+5 kcal)
    Male,
    /// Female adjustment (-161 kcal)
    Female,
    /// Midpoint of the male and female adjustments
    Other,
}

/// Self-reported habitual activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days a week
    Active,
    /// Moderate exercise 3-5 days a week
    ModeratelyActive,
    /// Hard exercise 6-7 days a week
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate total daily energy expenditure
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Active => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
        }
    }
}

/// A registered user's identity, biometrics, and goals
///
/// Biometrics feed the energy calculators; the optional goal fields are
/// set during onboarding and surfaced back by the embedding application.
/// Profiles are created at registration and mutated on profile edit;
/// deletion is a collaborator concern and never happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Age in years, must be positive
    pub age: u32,
    /// Gender for the BMR adjustment
    pub gender: Gender,
    /// Body weight in kilograms, must be positive
    pub weight_kg: f64,
    /// Height in centimeters, must be positive
    pub height_cm: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Target blood glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_blood_sugar: Option<f64>,
    /// Most recent known blood glucose in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_blood_sugar: Option<f64>,
    /// Goal body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    /// Goal HbA1c percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_hba1c_pct: Option<f64>,
    /// Goal daily activity minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_activity_minutes: Option<u32>,
}

impl UserProfile {
    /// Check the biometric invariants: age, weight, and height must be positive
    ///
    /// The energy calculators are total and do not re-check; run this at the
    /// point where profile data enters the system.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.age == 0 {
            return Err(EngineError::validation("age", "must be positive"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(EngineError::validation(
                "weight_kg",
                format!("must be positive, got {}", self.weight_kg),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(EngineError::validation(
                "height_cm",
                format!("must be positive, got {}", self.height_cm),
            ));
        }
        Ok(())
    }
}
