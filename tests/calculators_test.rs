// ABOUTME: Unit tests for nutrition aggregation and energy calculators
// ABOUTME: Covers empty aggregates, scaling, BMR/TDEE, and macro goal identities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use uuid::Uuid;

use glucowise_engine::energy::{basal_metabolic_rate, total_daily_energy_expenditure, MacroGoals};
use glucowise_engine::models::{
    ActivityLevel, FoodItem, Gender, GlucoseBand, MealType, NutritionTotals,
};

use common::{chicken_breast, meal_at, oatmeal, sample_profile, utc, white_rice};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn empty_item_sequence_aggregates_to_zero() {
    let totals = NutritionTotals::from_items(&[]);
    assert_eq!(totals, NutritionTotals::default());
    assert_eq!(totals.avg_gi, 0.0);
    assert_eq!(totals.glycemic_load, 0.0);
}

#[test]
fn aggregation_sums_nutrients_and_averages_gi() {
    let items = [oatmeal(), white_rice()];
    let totals = NutritionTotals::from_items(&items);

    assert!(approx_eq(totals.calories, 150.0 + 195.0));
    assert!(approx_eq(totals.carbs_g, 27.0 + 60.0));
    assert!(approx_eq(totals.fats_g, 2.5 + 0.4));
    assert!(approx_eq(totals.proteins_g, 5.0 + 4.0));
    assert!(approx_eq(totals.fiber_g, 4.0 + 0.9));
    assert!(approx_eq(totals.avg_gi, (55.0 + 73.0) / 2.0));
    assert!(approx_eq(
        totals.glycemic_load,
        totals.avg_gi * totals.carbs_g / 100.0
    ));
}

#[test]
fn meal_totals_match_item_aggregation() {
    let user_id = Uuid::new_v4();
    let meal = meal_at(
        user_id,
        MealType::Lunch,
        vec![oatmeal(), chicken_breast()],
        utc(2025, 3, 14, 12, 30),
    );
    let expected = NutritionTotals::from_items(&meal.food_items);
    assert_eq!(meal.total_nutrition(), expected);
}

#[test]
fn scaling_is_linear_in_quantity_and_leaves_gi_unchanged() {
    let item = white_rice(); // 150 g portion
    let scaled = item.scaled_to(300.0);

    let factor = 300.0 / item.quantity;
    assert!(approx_eq(scaled.quantity, 300.0));
    assert!(approx_eq(scaled.calories, item.calories * factor));
    assert!(approx_eq(scaled.carbs_g, item.carbs_g * factor));
    assert!(approx_eq(scaled.fats_g, item.fats_g * factor));
    assert!(approx_eq(scaled.proteins_g, item.proteins_g * factor));
    assert!(approx_eq(scaled.fiber_g, item.fiber_g * factor));
    assert_eq!(scaled.gi_index, item.gi_index);
}

#[test]
fn bmr_follows_mifflin_st_jeor_for_each_gender() {
    let mut profile = sample_profile(Uuid::new_v4());
    // 10*70 + 6.25*175 - 5*40 = 1593.75
    let base = 1593.75;

    profile.gender = Gender::Male;
    assert!(approx_eq(basal_metabolic_rate(&profile), base + 5.0));

    profile.gender = Gender::Female;
    assert!(approx_eq(basal_metabolic_rate(&profile), base - 161.0));

    // Other is the midpoint of the male and female adjustments
    profile.gender = Gender::Other;
    assert!(approx_eq(basal_metabolic_rate(&profile), base - 78.0));
}

#[test]
fn tdee_applies_the_activity_factor_table() {
    let mut profile = sample_profile(Uuid::new_v4());
    let bmr = basal_metabolic_rate(&profile);

    for (level, factor) in [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Active, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
    ] {
        profile.activity_level = level;
        assert!(approx_eq(
            total_daily_energy_expenditure(&profile),
            bmr * factor
        ));
    }
}

#[test]
fn macro_goal_calorie_equivalents_recover_tdee() {
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let mut profile = sample_profile(Uuid::new_v4());
        profile.gender = gender;

        let tdee = total_daily_energy_expenditure(&profile);
        let goals = MacroGoals::for_profile(&profile);

        let calorie_equivalents = goals.carbs_g * 4.0 + goals.protein_g * 4.0 + goals.fats_g * 9.0;
        assert!(
            (calorie_equivalents - tdee).abs() < 1e-6 * tdee,
            "calorie equivalents {calorie_equivalents} should recover TDEE {tdee}"
        );

        let fiber_expected = tdee / 1000.0 * 14.0;
        assert!(approx_eq(goals.fiber_g, fiber_expected));
    }
}

#[test]
fn profile_validation_rejects_non_positive_biometrics() {
    let valid = sample_profile(Uuid::new_v4());
    assert!(valid.validate().is_ok());

    let mut zero_age = valid.clone();
    zero_age.age = 0;
    assert!(zero_age.validate().is_err());

    let mut bad_weight = valid.clone();
    bad_weight.weight_kg = 0.0;
    assert!(bad_weight.validate().is_err());

    let mut bad_height = valid;
    bad_height.height_cm = -170.0;
    assert!(bad_height.validate().is_err());
}

#[test]
fn food_item_validation_rejects_zero_quantity() {
    let mut item = oatmeal();
    assert!(item.validate().is_ok());

    item.quantity = 0.0;
    assert!(item.validate().is_err());
}

#[test]
fn glucose_bands_split_at_120_and_180() {
    assert_eq!(GlucoseBand::from_mg_dl(95.0), GlucoseBand::Good);
    assert_eq!(GlucoseBand::from_mg_dl(120.0), GlucoseBand::Good);
    assert_eq!(GlucoseBand::from_mg_dl(120.1), GlucoseBand::Elevated);
    assert_eq!(GlucoseBand::from_mg_dl(180.0), GlucoseBand::Elevated);
    assert_eq!(GlucoseBand::from_mg_dl(180.1), GlucoseBand::High);
}

#[test]
fn scaled_item_keeps_name() {
    let item = FoodItem::new("Apple", 1.0, 95.0, 25.0, 0.3, 0.5, 4.4, 38.0);
    let doubled = item.scaled_to(2.0);
    assert_eq!(doubled.name, "Apple");
    assert!(approx_eq(doubled.calories, 190.0));
}
