// ABOUTME: Energy expenditure and macronutrient goal calculators
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! # Energy & Macro Calculator
//!
//! Pure functions deriving energy expenditure and macronutrient gram
//! targets from a user's biometrics. All functions are total: they never
//! fail, and an invalid profile (zero age, negative weight) produces
//! nonsensical but non-crashing output. Callers gate input with
//! [`UserProfile::validate`](crate::models::UserProfile::validate).

use serde::{Deserialize, Serialize};

use crate::models::{Gender, UserProfile};

/// Mifflin-St Jeor weight coefficient (kcal per kg)
const WEIGHT_COEFFICIENT: f64 = 10.0;

/// Mifflin-St Jeor height coefficient (kcal per cm)
const HEIGHT_COEFFICIENT: f64 = 6.25;

/// Mifflin-St Jeor age coefficient (kcal per year)
const AGE_COEFFICIENT: f64 = 5.0;

/// Additive BMR adjustment for males
const MALE_ADJUSTMENT: f64 = 5.0;

/// Additive BMR adjustment for females
const FEMALE_ADJUSTMENT: f64 = -161.0;

/// Share of daily energy allotted to carbohydrates
const CARB_ENERGY_SHARE: f64 = 0.50;

/// Share of daily energy allotted to protein
const PROTEIN_ENERGY_SHARE: f64 = 0.20;

/// Share of daily energy allotted to fat
const FAT_ENERGY_SHARE: f64 = 0.30;

/// Energy density of carbohydrates and protein, kcal per gram
const KCAL_PER_GRAM_CARB_PROTEIN: f64 = 4.0;

/// Energy density of fat, kcal per gram
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Recommended fiber grams per 1000 kcal of expenditure
const FIBER_G_PER_1000_KCAL: f64 = 14.0;

/// Basal metabolic rate in kcal/day via Mifflin-St Jeor
///
/// `10*weight(kg) + 6.25*height(cm) - 5*age`, then the gender adjustment:
/// +5 for male, -161 for female, and the midpoint of the two for other.
#[must_use]
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let base = WEIGHT_COEFFICIENT * profile.weight_kg + HEIGHT_COEFFICIENT * profile.height_cm
        - AGE_COEFFICIENT * f64::from(profile.age);

    match profile.gender {
        Gender::Male => base + MALE_ADJUSTMENT,
        Gender::Female => base + FEMALE_ADJUSTMENT,
        Gender::Other => f64::midpoint(base + MALE_ADJUSTMENT, base + FEMALE_ADJUSTMENT),
    }
}

/// Total daily energy expenditure: BMR scaled by the activity factor
#[must_use]
pub fn total_daily_energy_expenditure(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(profile) * profile.activity_level.factor()
}

/// Daily macronutrient gram targets derived from energy expenditure
///
/// The carb/protein/fat split is 50/20/30 percent of TDEE converted to
/// grams at 4/4/9 kcal per gram; fiber follows the 14 g per 1000 kcal
/// guideline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGoals {
    /// Carbohydrate target in grams
    pub carbs_g: f64,
    /// Protein target in grams
    pub protein_g: f64,
    /// Fat target in grams
    pub fats_g: f64,
    /// Fiber target in grams
    pub fiber_g: f64,
}

impl MacroGoals {
    /// Compute gram targets for a profile
    #[must_use]
    pub fn for_profile(profile: &UserProfile) -> Self {
        let tdee = total_daily_energy_expenditure(profile);
        Self {
            carbs_g: tdee * CARB_ENERGY_SHARE / KCAL_PER_GRAM_CARB_PROTEIN,
            protein_g: tdee * PROTEIN_ENERGY_SHARE / KCAL_PER_GRAM_CARB_PROTEIN,
            fats_g: tdee * FAT_ENERGY_SHARE / KCAL_PER_GRAM_FAT,
            fiber_g: tdee / 1000.0 * FIBER_G_PER_1000_KCAL,
        }
    }
}
