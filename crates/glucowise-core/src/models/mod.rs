// ABOUTME: Core data models for the GlucoWise engine
// ABOUTME: Re-exports user, nutrition, glucose, and activity model modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! # Data Models
//!
//! Domain models shared by the record store, the calculators, and the
//! recommendation engine.
//!
//! ## Design Principles
//!
//! - **Serializable**: every model round-trips through serde so the record
//!   store can persist it to any backend
//! - **Day-bucketed**: timestamped entries are always grouped by the UTC
//!   calendar day of their timestamp
//! - **Immutable entries**: meals and readings are never edited in place;
//!   they are created once and only ever deleted

mod activity;
mod glucose;
mod nutrition;
mod user;

pub use activity::ActivityEntry;
pub use glucose::{BloodReading, GlucoseBand, ReadingType};
pub use nutrition::{FoodItem, Meal, MealType, NutritionTotals};
pub use user::{ActivityLevel, Gender, UserProfile};
