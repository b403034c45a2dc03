// ABOUTME: Recommendation engine configuration for dinner suggestions
// ABOUTME: Thresholds that trigger each rule of the recommendation chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Recommendation Engine Configuration
//!
//! Thresholds for the ordered dinner recommendation rules. Defaults match
//! the clinical rules of thumb the product ships with; embedding
//! applications may construct their own values.

use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Threshold values for triggering each recommendation rule
    pub thresholds: RecommendationThresholds,
}

/// Thresholds for the ordered recommendation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Day-average blood glucose (mg/dL) above which the low-carb rule fires
    pub elevated_glucose_mg_dl: f64,
    /// Last-meal carbohydrates (grams) above which the moderate-dinner rule fires
    pub heavy_meal_carbs_g: f64,
    /// Calories burned above which the recovery-dinner rule fires
    pub active_day_calories: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            elevated_glucose_mg_dl: 140.0,
            heavy_meal_carbs_g: 50.0,
            active_day_calories: 300.0,
        }
    }
}
