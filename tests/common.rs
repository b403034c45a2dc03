// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Sample profiles, meals, readings, and storage test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

//! Shared test utilities for `glucowise_engine`
//!
//! Common fixtures to reduce duplication across integration tests.

use std::sync::Once;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use glucowise_engine::errors::{EngineError, EngineResult};
use glucowise_engine::models::{
    ActivityLevel, BloodReading, FoodItem, Gender, Meal, MealType, ReadingType, UserProfile,
};
use glucowise_engine::storage::{RecordFilter, RecordStorage, StoredRecord};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A UTC timestamp for the given calendar fields
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// A UTC calendar day
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A valid profile with unremarkable biometrics
pub fn sample_profile(id: Uuid) -> UserProfile {
    UserProfile {
        id,
        name: "Test User".into(),
        email: "test@example.com".into(),
        age: 40,
        gender: Gender::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        activity_level: ActivityLevel::ModeratelyActive,
        target_blood_sugar: Some(110.0),
        current_blood_sugar: None,
        goal_weight_kg: None,
        goal_hba1c_pct: None,
        goal_activity_minutes: None,
    }
}

/// A low-carb food item (100 g portion)
pub fn chicken_breast() -> FoodItem {
    FoodItem::new("Chicken Breast", 100.0, 165.0, 0.0, 3.6, 31.0, 0.0, 0.0)
}

/// A carb-heavy food item (150 g portion)
pub fn white_rice() -> FoodItem {
    FoodItem::new("White Rice", 150.0, 195.0, 60.0, 0.4, 4.0, 0.9, 73.0)
}

/// A moderate food item (40 g portion)
pub fn oatmeal() -> FoodItem {
    FoodItem::new("Oatmeal", 40.0, 150.0, 27.0, 2.5, 5.0, 4.0, 55.0)
}

/// A meal from `items` logged at `logged_at`
pub fn meal_at(
    user_id: Uuid,
    meal_type: MealType,
    items: Vec<FoodItem>,
    logged_at: DateTime<Utc>,
) -> Meal {
    Meal::new(user_id, meal_type, items, logged_at)
}

/// A pre-meal reading of `value_mg_dl` taken at `taken_at`
pub fn reading_at(user_id: Uuid, value_mg_dl: f64, taken_at: DateTime<Utc>) -> BloodReading {
    BloodReading::new(user_id, ReadingType::PreMeal, value_mg_dl, taken_at)
}

/// Storage double whose every round-trip fails
///
/// Exercises the `StoreUnavailable` paths: failed write-through and
/// failed hydration with stale local reads.
#[derive(Debug, Default)]
pub struct FailingStorage;

#[async_trait]
impl RecordStorage for FailingStorage {
    async fn insert(&self, _table: &str, _record: StoredRecord) -> EngineResult<()> {
        Err(EngineError::store_unavailable("backend offline"))
    }

    async fn query(
        &self,
        _table: &str,
        _filter: &RecordFilter,
    ) -> EngineResult<Vec<StoredRecord>> {
        Err(EngineError::store_unavailable("backend offline"))
    }

    async fn delete(&self, _table: &str, _id: Uuid) -> EngineResult<()> {
        Err(EngineError::store_unavailable("backend offline"))
    }
}
