// ABOUTME: Integration tests for the wellness service facade
// ABOUTME: Recommendation caching, invalidation, macro goals, tips, and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use glucowise_engine::energy::total_daily_energy_expenditure;
use glucowise_engine::models::{ActivityEntry, MealType};
use glucowise_engine::services::WellnessService;
use glucowise_engine::store::HealthRecordStore;
use glucowise_engine::users::{InMemoryUserDirectory, UserDirectory};

use common::{day, init_test_logging, meal_at, oatmeal, reading_at, sample_profile, utc, white_rice};

async fn service_with_profile(user_id: Uuid) -> Result<(Arc<HealthRecordStore>, WellnessService)> {
    init_test_logging();
    let store = Arc::new(HealthRecordStore::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    directory.upsert_profile(sample_profile(user_id)).await?;
    let service = WellnessService::new(store.clone(), directory);
    Ok((store, service))
}

#[tokio::test]
async fn recommendations_are_computed_once_per_day() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (store, service) = service_with_profile(user_id).await?;
    let date = day(2025, 3, 14);

    store
        .add_meal(meal_at(
            user_id,
            MealType::Lunch,
            vec![white_rice()],
            utc(2025, 3, 14, 12, 0),
        ))
        .await?;

    let first = service.recommended_meals(user_id, date);
    assert_eq!(first.len(), 1);

    // Mutating the day afterwards does not change the cached pick
    store
        .add_reading(reading_at(user_id, 190.0, utc(2025, 3, 14, 15, 0)))
        .await?;
    let second = service.recommended_meals(user_id, date);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, first[0].id);
    Ok(())
}

#[tokio::test]
async fn invalidation_forces_a_recompute() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (store, service) = service_with_profile(user_id).await?;
    let date = day(2025, 3, 14);

    store
        .add_meal(meal_at(
            user_id,
            MealType::Lunch,
            vec![oatmeal()],
            utc(2025, 3, 14, 12, 0),
        ))
        .await?;

    let first = service.recommended_meals(user_id, date);
    assert_eq!(first[0].food_items[0].name, "Stir-Fried Tofu with Vegetables");

    // New elevated readings change the snapshot; after invalidation the
    // engine re-runs and rule 1 takes over
    store
        .add_reading(reading_at(user_id, 190.0, utc(2025, 3, 14, 15, 0)))
        .await?;
    service.invalidate_recommendations(user_id, date);

    let second = service.recommended_meals(user_id, date);
    assert_eq!(second[0].food_items[0].name, "Grilled Salmon");
    Ok(())
}

#[tokio::test]
async fn empty_days_cache_an_empty_recommendation() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (_store, service) = service_with_profile(user_id).await?;
    let date = day(2025, 3, 14);

    assert!(service.recommended_meals(user_id, date).is_empty());
    // Second call hits the cache and stays empty
    assert!(service.recommended_meals(user_id, date).is_empty());
    Ok(())
}

#[tokio::test]
async fn tips_reflect_whether_the_day_has_data() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (store, service) = service_with_profile(user_id).await?;
    let date = day(2025, 3, 14);

    let tips = service.daily_tips(user_id, date);
    assert_eq!(tips.len(), 1);
    assert!(tips[0].is_no_data());

    store
        .upsert_activity(user_id, ActivityEntry::new(date).with_total_steps(2000))
        .await?;

    let tips = service.daily_tips(user_id, date);
    assert_eq!(tips.len(), 2);
    assert!(tips.iter().all(|tip| !tip.is_no_data()));
    Ok(())
}

#[tokio::test]
async fn macro_goals_require_a_known_profile() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (_store, service) = service_with_profile(user_id).await?;

    let goals = service.macro_goals_for(user_id).await?;
    let tdee = total_daily_energy_expenditure(&sample_profile(user_id));
    assert!((goals.carbs_g - tdee * 0.50 / 4.0).abs() < 1e-9);
    assert!((goals.protein_g - tdee * 0.20 / 4.0).abs() < 1e-9);
    assert!((goals.fats_g - tdee * 0.30 / 9.0).abs() < 1e-9);

    let unknown = service.macro_goals_for(Uuid::new_v4()).await;
    assert!(matches!(unknown, Err(ref err) if err.is_not_found()));
    Ok(())
}

#[tokio::test]
async fn daily_report_summarizes_the_day() -> Result<()> {
    let user_id = Uuid::new_v4();
    let (store, service) = service_with_profile(user_id).await?;
    let date = day(2025, 3, 14);

    store
        .add_meal(meal_at(
            user_id,
            MealType::Breakfast,
            vec![oatmeal()],
            utc(2025, 3, 14, 8, 0),
        ))
        .await?;
    store
        .add_reading(reading_at(user_id, 120.0, utc(2025, 3, 14, 9, 0)))
        .await?;
    store
        .upsert_activity(user_id, ActivityEntry::new(date).with_total_steps(5000))
        .await?;

    let report = service.daily_report(user_id, date).await?;
    assert!(report.contains("Test User"));
    assert!(report.contains("Calories consumed: 150 kcal"));
    assert!(report.contains("Carbs: 27.0 g"));
    assert!(report.contains("Average glucose: 120.0 mg/dL"));
    assert!(report.contains("Steps: 5000"));
    Ok(())
}

#[tokio::test]
async fn profile_upserts_are_validated() -> Result<()> {
    init_test_logging();
    let directory = InMemoryUserDirectory::new();

    let mut invalid = sample_profile(Uuid::new_v4());
    invalid.weight_kg = 0.0;
    assert!(directory.upsert_profile(invalid).await.is_err());
    assert_eq!(directory.profile_count().await, 0);

    directory
        .upsert_profile(sample_profile(Uuid::new_v4()))
        .await?;
    assert_eq!(directory.profile_count().await, 1);
    Ok(())
}
