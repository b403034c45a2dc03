// ABOUTME: Rule-based dinner recommendation engine over aggregated day state
// ABOUTME: DaySnapshot input, MealRecommender trait, and the ordered rule chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Dinner recommendation engine
//!
//! Inspects the day's last logged meal, activity summary, and average
//! blood glucose, then selects exactly one recommended dinner via an
//! ordered rule chain. Rule order is part of the contract:
//!
//! 1. elevated average glucose -> high-protein/low-carb dinner
//! 2. carb-heavy last meal -> moderate dinner
//! 3. high calorie burn -> recovery dinner
//! 4. otherwise -> balanced default
//!
//! With no meal logged for the day there is nothing to react to and no
//! recommendation is produced.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use glucowise_core::models::{ActivityEntry, BloodReading, FoodItem, Meal, MealType};

use crate::config::RecommendationConfig;

/// Aggregated state for one (user, day), assembled by the caller
///
/// The engines never read storage themselves; the embedding service builds
/// a snapshot from its record store and hands it over.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    /// User the snapshot belongs to
    pub user_id: Uuid,
    /// The UTC calendar day covered
    pub date: NaiveDate,
    /// Meals logged that day, in log order
    pub meals: Vec<Meal>,
    /// Activity summary for the day, if any
    pub activity: Option<ActivityEntry>,
    /// Blood glucose readings taken that day
    pub readings: Vec<BloodReading>,
}

impl DaySnapshot {
    /// The most recently logged meal of the day
    #[must_use]
    pub fn last_meal(&self) -> Option<&Meal> {
        self.meals.last()
    }

    /// Mean glucose value across the day's readings, 0 when there are none
    #[must_use]
    pub fn average_glucose(&self) -> f64 {
        if self.readings.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.readings.iter().map(|r| r.value_mg_dl).sum();
        sum / self.readings.len() as f64
    }

    /// Calories burned that day, 0 without an activity entry
    #[must_use]
    pub fn calories_burned(&self) -> f64 {
        self.activity.as_ref().map_or(0.0, |a| a.calories_burned)
    }

    /// Whether the day has no meals, no activity, and no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.activity.is_none() && self.readings.is_empty()
    }
}

/// Trait for generating a dinner recommendation from a day snapshot
pub trait MealRecommender: Send + Sync {
    /// Pick at most one recommended dinner for the snapshot's day
    fn recommend(&self, snapshot: &DaySnapshot) -> Option<Meal>;
}

/// The shipped rule-based recommender
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRecommender {
    config: RecommendationConfig,
}

impl RuleBasedRecommender {
    /// Create a recommender with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recommender with custom thresholds
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// High-protein, low-carb dinner for elevated glucose days
    fn low_carb_dinner(snapshot: &DaySnapshot) -> Meal {
        Meal::new(
            snapshot.user_id,
            MealType::Dinner,
            vec![
                FoodItem::new("Grilled Salmon", 150.0, 250.0, 5.0, 10.0, 30.0, 2.0, 30.0),
                FoodItem::new("Steamed Broccoli", 100.0, 55.0, 10.0, 0.5, 4.0, 5.0, 15.0),
            ],
            dinner_time(snapshot.date),
        )
        .with_recipe_url(recipe("https://www.acouplecooks.com/grilled-salmon/"))
    }

    /// Moderate dinner after a carb-heavy last meal
    fn moderate_dinner(snapshot: &DaySnapshot) -> Meal {
        Meal::new(
            snapshot.user_id,
            MealType::Dinner,
            vec![FoodItem::new(
                "Grilled Chicken Salad",
                200.0,
                300.0,
                15.0,
                12.0,
                40.0,
                5.0,
                25.0,
            )],
            dinner_time(snapshot.date),
        )
        .with_recipe_url(recipe(
            "https://www.foodnetwork.com/recipes/food-network-kitchen/best-grilled-chicken-salad-19100929",
        ))
    }

    /// Higher-calorie recovery dinner after a heavy activity day
    fn recovery_dinner(snapshot: &DaySnapshot) -> Meal {
        Meal::new(
            snapshot.user_id,
            MealType::Dinner,
            vec![
                FoodItem::new("Lean Beef Steak", 150.0, 280.0, 0.0, 15.0, 35.0, 0.0, 0.0),
                FoodItem::new("Quinoa", 100.0, 120.0, 21.0, 2.0, 4.0, 3.0, 53.0),
            ],
            dinner_time(snapshot.date),
        )
        .with_recipe_url(recipe(
            "https://recipes.net/articles/how-to-cook-a-lean-steak/",
        ))
    }

    /// Balanced default dinner
    fn balanced_dinner(snapshot: &DaySnapshot) -> Meal {
        Meal::new(
            snapshot.user_id,
            MealType::Dinner,
            vec![FoodItem::new(
                "Stir-Fried Tofu with Vegetables",
                200.0,
                250.0,
                20.0,
                8.0,
                15.0,
                6.0,
                30.0,
            )],
            dinner_time(snapshot.date),
        )
        .with_recipe_url(recipe(
            "https://www.skinnytaste.com/tofu-stir-fry-with-vegetables-in-a-soy-sesame-sauce/",
        ))
    }
}

impl MealRecommender for RuleBasedRecommender {
    fn recommend(&self, snapshot: &DaySnapshot) -> Option<Meal> {
        // The rule chain reacts to what was eaten; without a logged meal
        // there is nothing to recommend against.
        let last_meal = snapshot.last_meal()?;

        let thresholds = &self.config.thresholds;
        let avg_glucose = snapshot.average_glucose();
        let last_meal_carbs = last_meal.total_nutrition().carbs_g;
        let calories_burned = snapshot.calories_burned();

        let meal = if avg_glucose > thresholds.elevated_glucose_mg_dl {
            debug!(
                user_id = %snapshot.user_id,
                avg_glucose,
                "recommending low-carb dinner for elevated glucose"
            );
            Self::low_carb_dinner(snapshot)
        } else if last_meal_carbs > thresholds.heavy_meal_carbs_g {
            debug!(
                user_id = %snapshot.user_id,
                last_meal_carbs,
                "recommending moderate dinner after carb-heavy meal"
            );
            Self::moderate_dinner(snapshot)
        } else if calories_burned > thresholds.active_day_calories {
            debug!(
                user_id = %snapshot.user_id,
                calories_burned,
                "recommending recovery dinner after active day"
            );
            Self::recovery_dinner(snapshot)
        } else {
            debug!(user_id = %snapshot.user_id, "recommending balanced default dinner");
            Self::balanced_dinner(snapshot)
        };

        Some(meal)
    }
}

/// Nominal dinner timestamp for a recommended meal on `date`
fn dinner_time(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parse a known-good recipe link
#[allow(clippy::unwrap_used)] // Safe: catalog URLs are fixed literals covered by the engine tests
fn recipe(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}
