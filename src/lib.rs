// ABOUTME: Main library entry point for the GlucoWise engine
// ABOUTME: Health record store, storage adapters, user directory, and wellness service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

#![deny(unsafe_code)]

//! # GlucoWise Engine
//!
//! The nutrition, glucose, and goal computation engine behind the
//! GlucoWise diabetes assistant. The engine owns the per-user,
//! per-calendar-day record collections (meals, blood glucose readings,
//! activity summaries), derives aggregate nutrition and glycemic metrics
//! from them, computes energy-expenditure-based macronutrient targets, and
//! produces simple rule-based meal recommendations and rotating tips.
//!
//! Screens, input validation UI, authentication, and device ingestion are
//! collaborator concerns; this crate exposes the state and the derivations
//! they render.
//!
//! ## Architecture
//!
//! - **store**: [`store::HealthRecordStore`] - the only stateful
//!   component, partitioned by user and bucketed by UTC calendar day
//! - **storage**: pluggable persistence behind
//!   [`storage::RecordStorage`], with an in-memory reference backend
//! - **users**: profile lookup behind [`users::UserDirectory`]
//! - **services**: [`services::WellnessService`] composing the store with
//!   the recommendation and tip engines
//! - **glucowise-core / glucowise-intelligence**: pure model, calculator,
//!   and rule-engine crates re-exported here
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use glucowise_engine::errors::EngineResult;
//! use glucowise_engine::models::{FoodItem, Meal, MealType};
//! use glucowise_engine::store::HealthRecordStore;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> EngineResult<()> {
//!     let store = Arc::new(HealthRecordStore::new());
//!     let user_id = Uuid::new_v4();
//!
//!     let oatmeal = FoodItem::new("Oatmeal", 40.0, 150.0, 27.0, 2.5, 5.0, 4.0, 55.0);
//!     let breakfast = Meal::new(user_id, MealType::Breakfast, vec![oatmeal], chrono::Utc::now());
//!     let day = breakfast.logged_at.date_naive();
//!     store.add_meal(breakfast).await?;
//!
//!     let totals = store.day_totals(user_id, day);
//!     println!("calories so far: {}", totals.calories);
//!     Ok(())
//! }
//! ```

/// Logging configuration and structured logging setup
pub mod logging;

/// Wellness service composing store, calculators, and engines
pub mod services;

/// Pluggable record persistence behind the `RecordStorage` trait
pub mod storage;

/// Per-user, per-day health record collections
pub mod store;

/// User profile lookup behind the `UserDirectory` trait
pub mod users;

pub use glucowise_core::energy;
pub use glucowise_core::errors;
pub use glucowise_core::models;
pub use glucowise_intelligence as intelligence;
