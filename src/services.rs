// ABOUTME: Wellness service composing the record store with the derivation engines
// ABOUTME: Cached meal recommendations, daily tips, macro goals, and day reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Wellness service
//!
//! The composition layer the UI talks to: it assembles day snapshots from
//! the [`HealthRecordStore`], runs the recommendation and tip engines over
//! them, caches recommendations per (user, day), and derives per-user
//! macro targets through the [`UserDirectory`].
//!
//! Everything here is an explicitly constructed, injected instance - no
//! process-wide singletons. Each test builds its own service.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use glucowise_core::energy::MacroGoals;
use glucowise_core::errors::EngineResult;
use glucowise_core::models::Meal;
use glucowise_intelligence::cache::RecommendationCache;
use glucowise_intelligence::recommendation::{DaySnapshot, MealRecommender, RuleBasedRecommender};
use glucowise_intelligence::tips::{DailyTipEngine, Tip};

use crate::store::HealthRecordStore;
use crate::users::UserDirectory;

/// Facade over the store, the calculators, and the engines
pub struct WellnessService {
    store: Arc<HealthRecordStore>,
    directory: Arc<dyn UserDirectory>,
    recommender: Box<dyn MealRecommender>,
    tips: DailyTipEngine,
    recommendations: RecommendationCache,
}

impl WellnessService {
    /// Build a service with the shipped rule-based recommender and tip catalog
    #[must_use]
    pub fn new(store: Arc<HealthRecordStore>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            directory,
            recommender: Box::new(RuleBasedRecommender::new()),
            tips: DailyTipEngine::new(),
            recommendations: RecommendationCache::new(),
        }
    }

    /// Swap in a custom recommender
    #[must_use]
    pub fn with_recommender(mut self, recommender: Box<dyn MealRecommender>) -> Self {
        self.recommender = recommender;
        self
    }

    /// Swap in a custom tip engine
    #[must_use]
    pub fn with_tip_engine(mut self, tips: DailyTipEngine) -> Self {
        self.tips = tips;
        self
    }

    /// Recommended meals for (user, day), computed at most once per day
    ///
    /// The first call for a day assembles the day snapshot, runs the
    /// recommender, and caches the result - including an empty result for
    /// days without a logged meal. Later calls return the cached set even
    /// if the day's records changed in between; call
    /// [`invalidate_recommendations`](Self::invalidate_recommendations)
    /// to force a recompute.
    #[must_use]
    pub fn recommended_meals(&self, user_id: Uuid, date: NaiveDate) -> Vec<Meal> {
        if let Some(cached) = self.recommendations.fetch(user_id, date) {
            debug!(%user_id, %date, "serving cached meal recommendation");
            return cached;
        }

        let snapshot = self.day_snapshot(user_id, date);
        let meals: Vec<Meal> = self.recommender.recommend(&snapshot).into_iter().collect();
        self.recommendations.store(user_id, date, meals.clone());
        meals
    }

    /// Drop the cached recommendation for (user, day)
    pub fn invalidate_recommendations(&self, user_id: Uuid, date: NaiveDate) {
        self.recommendations.invalidate_day(user_id, date);
    }

    /// The day's rotating tips, or the no-data placeholder
    #[must_use]
    pub fn daily_tips(&self, user_id: Uuid, date: NaiveDate) -> Vec<Tip> {
        let has_data = self.store.has_records_for_day(user_id, date);
        self.tips.daily_tips(date, has_data)
    }

    /// Macronutrient gram targets for a user
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user has no profile in the directory.
    pub async fn macro_goals_for(&self, user_id: Uuid) -> EngineResult<MacroGoals> {
        let profile = self.directory.profile(user_id).await?;
        Ok(MacroGoals::for_profile(&profile))
    }

    /// Plain-text summary of a user's day against their targets
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the user has no profile in the directory.
    pub async fn daily_report(&self, user_id: Uuid, date: NaiveDate) -> EngineResult<String> {
        let profile = self.directory.profile(user_id).await?;
        let goals = MacroGoals::for_profile(&profile);
        let totals = self.store.day_totals(user_id, date);
        let average_glucose = self.store.average_reading(user_id, date);
        let steps = self.store.steps_for_day(user_id, date);

        let mut report = format!("Daily report for {} - {date}\n", profile.name);
        let _ = writeln!(report, "Calories consumed: {:.0} kcal", totals.calories);
        let _ = writeln!(
            report,
            "Carbs: {:.1} g of {:.1} g target",
            totals.carbs_g, goals.carbs_g
        );
        let _ = writeln!(
            report,
            "Protein: {:.1} g of {:.1} g target",
            totals.proteins_g, goals.protein_g
        );
        let _ = writeln!(
            report,
            "Fat: {:.1} g of {:.1} g target",
            totals.fats_g, goals.fats_g
        );
        let _ = writeln!(
            report,
            "Fiber: {:.1} g of {:.1} g target",
            totals.fiber_g, goals.fiber_g
        );
        let _ = writeln!(report, "Average glucose: {average_glucose:.1} mg/dL");
        let _ = writeln!(report, "Steps: {steps}");
        Ok(report)
    }

    /// Assemble the aggregated inputs the engines consume
    fn day_snapshot(&self, user_id: Uuid, date: NaiveDate) -> DaySnapshot {
        DaySnapshot {
            user_id,
            date,
            meals: self.store.meals_for_day(user_id, date),
            activity: self.store.activity_for_day(user_id, date),
            readings: self.store.readings_for_day(user_id, date),
        }
    }
}
