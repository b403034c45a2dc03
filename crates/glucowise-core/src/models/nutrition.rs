// ABOUTME: Nutrition models for meal logging and aggregation
// ABOUTME: FoodItem, Meal, MealType, and NutritionTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snacks between meals
    Snacks,
}

/// Individual food item within a meal
///
/// The five nutrient fields are extensive (they scale with `quantity`);
/// the glycemic index is intensive and never scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Unit-agnostic amount consumed (grams, cups, pieces - caller's choice)
    pub quantity: f64,
    /// Calories for this quantity
    pub calories: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fats_g: f64,
    /// Protein in grams
    pub proteins_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Glycemic index on the 0-100 scale
    pub gi_index: f64,
}

impl FoodItem {
    /// Build a food item from its name, amount, and nutrient profile
    #[must_use]
    #[allow(clippy::too_many_arguments)] // mirrors the nutrition label fields
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        calories: f64,
        carbs_g: f64,
        fats_g: f64,
        proteins_g: f64,
        fiber_g: f64,
        gi_index: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            calories,
            carbs_g,
            fats_g,
            proteins_g,
            fiber_g,
            gi_index,
        }
    }

    /// Return a copy of this item rescaled to `new_quantity`
    ///
    /// All mass-proportional nutrients scale linearly by
    /// `new_quantity / quantity`; the glycemic index is a per-unit property
    /// and is carried over unchanged. Requires `quantity > 0` (see
    /// [`FoodItem::validate`]).
    #[must_use]
    pub fn scaled_to(&self, new_quantity: f64) -> Self {
        let factor = new_quantity / self.quantity;
        Self {
            name: self.name.clone(),
            quantity: new_quantity,
            calories: self.calories * factor,
            carbs_g: self.carbs_g * factor,
            fats_g: self.fats_g * factor,
            proteins_g: self.proteins_g * factor,
            fiber_g: self.fiber_g * factor,
            gi_index: self.gi_index,
        }
    }

    /// Check the item invariants: positive quantity, non-negative nutrients,
    /// glycemic index within 0-100
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(EngineError::validation(
                "quantity",
                format!("must be positive, got {}", self.quantity),
            ));
        }
        for (field, value) in [
            ("calories", self.calories),
            ("carbs_g", self.carbs_g),
            ("fats_g", self.fats_g),
            ("proteins_g", self.proteins_g),
            ("fiber_g", self.fiber_g),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::Validation {
                    field,
                    reason: format!("must be non-negative, got {value}"),
                });
            }
        }
        if !(0.0..=100.0).contains(&self.gi_index) {
            return Err(EngineError::validation(
                "gi_index",
                format!("must be within 0-100, got {}", self.gi_index),
            ));
        }
        Ok(())
    }
}

/// Aggregate nutrition facts for a sequence of food items
///
/// The first five fields are sums across items. `avg_gi` is the arithmetic
/// mean of the items' glycemic indices (0 for an empty sequence - a defined
/// edge case, not an error) and `glycemic_load` scales that mean by the
/// carbohydrates actually consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Total calories
    pub calories: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fats_g: f64,
    /// Total protein in grams
    pub proteins_g: f64,
    /// Total fiber in grams
    pub fiber_g: f64,
    /// Mean glycemic index across items, 0 when empty
    pub avg_gi: f64,
    /// Glycemic load: `avg_gi * carbs_g / 100`
    pub glycemic_load: f64,
}

impl NutritionTotals {
    /// Aggregate a sequence of food items
    ///
    /// Pure and total: an empty slice yields the zero-filled aggregate,
    /// including a glycemic load of 0 since both factors are 0.
    #[must_use]
    pub fn from_items(items: &[FoodItem]) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.calories += item.calories;
            totals.carbs_g += item.carbs_g;
            totals.fats_g += item.fats_g;
            totals.proteins_g += item.proteins_g;
            totals.fiber_g += item.fiber_g;
        }
        if !items.is_empty() {
            let gi_sum: f64 = items.iter().map(|i| i.gi_index).sum();
            totals.avg_gi = gi_sum / items.len() as f64;
        }
        totals.glycemic_load = totals.avg_gi * totals.carbs_g / 100.0;
        totals
    }

    /// Aggregate every food item across a sequence of meals
    ///
    /// Used for daily rollups: the mean glycemic index is taken over all
    /// items of the day, not averaged per meal.
    #[must_use]
    pub fn from_meals(meals: &[Meal]) -> Self {
        let items: Vec<FoodItem> = meals
            .iter()
            .flat_map(|meal| meal.food_items.iter().cloned())
            .collect();
        Self::from_items(&items)
    }
}

/// A logged meal: an ordered list of food items at a point in time
///
/// Meals are immutable once created; corrections are modeled as delete
/// plus re-log by the embedding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier for this meal
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Which meal of the day this is
    pub meal_type: MealType,
    /// Ordered food items making up the meal
    pub food_items: Vec<FoodItem>,
    /// When the meal was logged; its UTC calendar day is the bucket key
    pub logged_at: DateTime<Utc>,
    /// Optional link to an external recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_url: Option<Url>,
}

impl Meal {
    /// Create a new meal with a fresh id
    #[must_use]
    pub fn new(
        user_id: Uuid,
        meal_type: MealType,
        food_items: Vec<FoodItem>,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            meal_type,
            food_items,
            logged_at,
            recipe_url: None,
        }
    }

    /// Attach an external recipe link
    #[must_use]
    pub fn with_recipe_url(mut self, url: Url) -> Self {
        self.recipe_url = Some(url);
        self
    }

    /// Aggregate nutrition facts across this meal's food items
    #[must_use]
    pub fn total_nutrition(&self) -> NutritionTotals {
        NutritionTotals::from_items(&self.food_items)
    }
}
