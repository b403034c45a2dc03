// ABOUTME: Per-user, per-day health record collections with optional write-through persistence
// ABOUTME: HealthRecordStore for meals, blood readings, and activity summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Health record store
//!
//! The only stateful component of the engine. Records are partitioned by
//! user id - different users never contend - and bucketed inside each
//! partition by the **UTC calendar day** of their timestamp
//! (`DateTime<Utc>::date_naive()`). No local-timezone handling happens
//! anywhere in the store; a reading logged at 23:59 local time lands on
//! whatever UTC day that instant falls on.
//!
//! With a [`RecordStorage`] backend attached, mutations are write-through:
//! the remote write happens first, so a failed round-trip leaves local
//! state untouched and the failure is reported to the caller.
//! [`HealthRecordStore::hydrate_user`] is the read-through path that
//! refreshes a user's partition from the backend; when it fails, the
//! partition keeps serving the last known data and the user's
//! [`SyncState`] turns [`Stale`](SyncState::Stale).
//!
//! The store assumes one logical writer per user (the owning session);
//! reads and writes for different users proceed concurrently.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use glucowise_core::errors::{EngineError, EngineResult};
use glucowise_core::models::{ActivityEntry, BloodReading, Meal, NutritionTotals};

use crate::storage::{tables, RecordFilter, RecordStorage, StoredRecord};

// ============================================================================
// Sync State
// ============================================================================

/// Freshness of a user's local partition relative to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// No backend attached; local state is the only state
    LocalOnly,
    /// The last backend round-trip for this user succeeded
    Fresh,
    /// The last backend round-trip failed; reads serve the last known data
    Stale,
}

// ============================================================================
// Per-User Records
// ============================================================================

/// One user's day-bucketed collections
#[derive(Debug, Default)]
struct UserRecords {
    meals: BTreeMap<NaiveDate, Vec<Meal>>,
    readings: BTreeMap<NaiveDate, Vec<BloodReading>>,
    activities: BTreeMap<NaiveDate, ActivityEntry>,
}

impl UserRecords {
    fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.readings.is_empty() && self.activities.is_empty()
    }
}

// ============================================================================
// Health Record Store
// ============================================================================

/// Per-user, per-day store for meals, blood readings, and activity
pub struct HealthRecordStore {
    users: DashMap<Uuid, UserRecords>,
    sync_states: DashMap<Uuid, SyncState>,
    storage: Option<Arc<dyn RecordStorage>>,
}

impl HealthRecordStore {
    /// Create a purely local store with no persistence backend
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            sync_states: DashMap::new(),
            storage: None,
        }
    }

    /// Create a store that writes through to `storage`
    #[must_use]
    pub fn with_storage(storage: Arc<dyn RecordStorage>) -> Self {
        Self {
            users: DashMap::new(),
            sync_states: DashMap::new(),
            storage: Some(storage),
        }
    }

    // ------------------------------------------------------------------
    // Meals
    // ------------------------------------------------------------------

    /// Append a meal to its (user, day) bucket, creating buckets lazily
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the write-through to the backend
    /// fails; local state is left unchanged in that case.
    pub async fn add_meal(&self, meal: Meal) -> EngineResult<()> {
        let day = meal.logged_at.date_naive();
        self.write_through(tables::MEALS, meal.id, meal.user_id, day, &meal)
            .await?;

        debug!(user_id = %meal.user_id, %day, meal_type = ?meal.meal_type, "meal logged");
        self.users
            .entry(meal.user_id)
            .or_default()
            .meals
            .entry(day)
            .or_default()
            .push(meal);
        Ok(())
    }

    /// Meals logged on `date`, in log order; empty when the bucket is absent
    #[must_use]
    pub fn meals_for_day(&self, user_id: Uuid, date: NaiveDate) -> Vec<Meal> {
        self.users
            .get(&user_id)
            .and_then(|records| records.meals.get(&date).cloned())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Blood readings
    // ------------------------------------------------------------------

    /// Append a reading to its (user, day) bucket
    ///
    /// # Errors
    ///
    /// Returns `Validation` without mutating anything when the reading is
    /// future-dated relative to the insertion time, and `StoreUnavailable`
    /// if the write-through fails.
    pub async fn add_reading(&self, reading: BloodReading) -> EngineResult<()> {
        let now = Utc::now();
        if reading.is_future_dated(now) {
            warn!(
                user_id = %reading.user_id,
                taken_at = %reading.taken_at,
                "rejecting future-dated blood reading"
            );
            return Err(EngineError::validation(
                "taken_at",
                format!("reading timestamp {} is in the future", reading.taken_at),
            ));
        }

        let day = reading.taken_at.date_naive();
        self.write_through(tables::BLOOD_READINGS, reading.id, reading.user_id, day, &reading)
            .await?;

        debug!(user_id = %reading.user_id, %day, value = reading.value_mg_dl, "reading logged");
        self.users
            .entry(reading.user_id)
            .or_default()
            .readings
            .entry(day)
            .or_default()
            .push(reading);
        Ok(())
    }

    /// Readings taken on `date`, newest first; empty when the bucket is absent
    #[must_use]
    pub fn readings_for_day(&self, user_id: Uuid, date: NaiveDate) -> Vec<BloodReading> {
        let mut readings = self
            .users
            .get(&user_id)
            .and_then(|records| records.readings.get(&date).cloned())
            .unwrap_or_default();
        readings.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
        readings
    }

    /// Remove one reading from its day bucket
    ///
    /// The caller supplies the reading's `date` to locate the bucket.
    /// Now-empty day buckets and now-empty user partitions are pruned so
    /// the map does not accumulate empty entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no reading with `reading_id` exists under
    /// (user, date), and `StoreUnavailable` if the backend delete fails
    /// (local state is left unchanged).
    pub async fn delete_reading(
        &self,
        user_id: Uuid,
        reading_id: Uuid,
        date: NaiveDate,
    ) -> EngineResult<()> {
        let exists = self.users.get(&user_id).is_some_and(|records| {
            records
                .readings
                .get(&date)
                .is_some_and(|bucket| bucket.iter().any(|r| r.id == reading_id))
        });
        if !exists {
            return Err(EngineError::not_found("blood reading", reading_id));
        }

        if let Some(storage) = &self.storage {
            storage.delete(tables::BLOOD_READINGS, reading_id).await?;
        }

        if let Some(mut records) = self.users.get_mut(&user_id) {
            if let Some(bucket) = records.readings.get_mut(&date) {
                bucket.retain(|r| r.id != reading_id);
                if bucket.is_empty() {
                    records.readings.remove(&date);
                }
            }
        }
        self.users.remove_if(&user_id, |_, records| records.is_empty());

        debug!(%user_id, %date, %reading_id, "reading deleted");
        Ok(())
    }

    /// Mean reading value for `date`; 0.0 for a day without readings
    ///
    /// The zero default is a defined convention for display surfaces;
    /// use [`reading_delta_from_previous_day`](Self::reading_delta_from_previous_day)
    /// when absence must be distinguishable.
    #[must_use]
    pub fn average_reading(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        let readings = self.readings_for_day(user_id, date);
        if readings.is_empty() {
            return 0.0;
        }
        let sum: f64 = readings.iter().map(|r| r.value_mg_dl).sum();
        sum / readings.len() as f64
    }

    /// Day-over-day change in average reading: `date` minus the day before
    ///
    /// `None` when either day has no readings - the difference cannot be
    /// computed, which is distinct from the 0.0 default of
    /// [`average_reading`](Self::average_reading).
    #[must_use]
    pub fn reading_delta_from_previous_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Option<f64> {
        let previous_day = date.pred_opt()?;

        let today = self.readings_for_day(user_id, date);
        let yesterday = self.readings_for_day(user_id, previous_day);
        if today.is_empty() || yesterday.is_empty() {
            return None;
        }

        let mean = |readings: &[BloodReading]| {
            readings.iter().map(|r| r.value_mg_dl).sum::<f64>() / readings.len() as f64
        };
        Some(mean(&today) - mean(&yesterday))
    }

    // ------------------------------------------------------------------
    // Activity
    // ------------------------------------------------------------------

    /// Store the day's activity summary, replacing any prior entry
    ///
    /// One entry per (user, day): a later write for the same day replaces
    /// the prior entry entirely, it never merges.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the backend round-trip fails; local
    /// state is left unchanged in that case.
    pub async fn upsert_activity(&self, user_id: Uuid, entry: ActivityEntry) -> EngineResult<()> {
        if let Some(storage) = &self.storage {
            // Replace semantics on the backend too: clear the day's prior
            // records before inserting the new one.
            let existing = storage
                .query(
                    tables::ACTIVITY_ENTRIES,
                    &RecordFilter::for_day(user_id, entry.date),
                )
                .await?;
            for record in existing {
                storage.delete(tables::ACTIVITY_ENTRIES, record.id).await?;
            }
            let record = StoredRecord::encode(Uuid::new_v4(), user_id, entry.date, &entry)?;
            storage.insert(tables::ACTIVITY_ENTRIES, record).await?;
        }

        debug!(%user_id, date = %entry.date, steps = entry.total_steps, "activity recorded");
        self.users
            .entry(user_id)
            .or_default()
            .activities
            .insert(entry.date, entry);
        Ok(())
    }

    /// The day's activity summary, if one was recorded
    #[must_use]
    pub fn activity_for_day(&self, user_id: Uuid, date: NaiveDate) -> Option<ActivityEntry> {
        self.users
            .get(&user_id)
            .and_then(|records| records.activities.get(&date).cloned())
    }

    /// Steps recorded for the day, 0 without an activity entry
    #[must_use]
    pub fn steps_for_day(&self, user_id: Uuid, date: NaiveDate) -> u64 {
        self.activity_for_day(user_id, date)
            .map_or(0, |entry| entry.total_steps)
    }

    // ------------------------------------------------------------------
    // Daily rollups
    // ------------------------------------------------------------------

    /// Aggregate nutrition across every food item logged on `date`
    #[must_use]
    pub fn day_totals(&self, user_id: Uuid, date: NaiveDate) -> NutritionTotals {
        NutritionTotals::from_meals(&self.meals_for_day(user_id, date))
    }

    /// Calories consumed on `date`
    #[must_use]
    pub fn calories_consumed(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        self.day_totals(user_id, date).calories
    }

    /// Carbohydrate grams consumed on `date`
    #[must_use]
    pub fn carbs_for_day(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        self.day_totals(user_id, date).carbs_g
    }

    /// Protein grams consumed on `date`
    #[must_use]
    pub fn protein_for_day(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        self.day_totals(user_id, date).proteins_g
    }

    /// Fat grams consumed on `date`
    #[must_use]
    pub fn fat_for_day(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        self.day_totals(user_id, date).fats_g
    }

    /// Fiber grams consumed on `date`
    #[must_use]
    pub fn fiber_for_day(&self, user_id: Uuid, date: NaiveDate) -> f64 {
        self.day_totals(user_id, date).fiber_g
    }

    /// Whether the day has any meal, reading, or activity on record
    #[must_use]
    pub fn has_records_for_day(&self, user_id: Uuid, date: NaiveDate) -> bool {
        self.users.get(&user_id).is_some_and(|records| {
            records.meals.get(&date).is_some_and(|m| !m.is_empty())
                || records.readings.get(&date).is_some_and(|r| !r.is_empty())
                || records.activities.contains_key(&date)
        })
    }

    // ------------------------------------------------------------------
    // Backend synchronization
    // ------------------------------------------------------------------

    /// Refresh a user's partition from the backend
    ///
    /// Replaces the partition wholesale with the backend's view. On
    /// failure the partition keeps serving the last known data and the
    /// user's sync state turns [`SyncState::Stale`]; the error is
    /// returned, never swallowed. A store without a backend is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` on backend round-trip failure or
    /// `Serialization` if a stored payload does not decode.
    pub async fn hydrate_user(&self, user_id: Uuid) -> EngineResult<()> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };

        match Self::fetch_user_records(storage.as_ref(), user_id).await {
            Ok(records) => {
                self.users.insert(user_id, records);
                self.sync_states.insert(user_id, SyncState::Fresh);
                debug!(%user_id, "partition hydrated from backend");
                Ok(())
            }
            Err(err) => {
                self.sync_states.insert(user_id, SyncState::Stale);
                warn!(%user_id, error = %err, "hydration failed, serving cached records");
                Err(err)
            }
        }
    }

    /// Freshness of the user's partition relative to the backend
    #[must_use]
    pub fn sync_state(&self, user_id: Uuid) -> SyncState {
        if self.storage.is_none() {
            return SyncState::LocalOnly;
        }
        self.sync_states
            .get(&user_id)
            .map_or(SyncState::Fresh, |state| *state)
    }

    async fn fetch_user_records(
        storage: &dyn RecordStorage,
        user_id: Uuid,
    ) -> EngineResult<UserRecords> {
        let filter = RecordFilter::for_user(user_id);
        let mut records = UserRecords::default();

        for stored in storage.query(tables::MEALS, &filter).await? {
            let meal: Meal = stored.decode()?;
            records.meals.entry(stored.day).or_default().push(meal);
        }
        for stored in storage.query(tables::BLOOD_READINGS, &filter).await? {
            let reading: BloodReading = stored.decode()?;
            records.readings.entry(stored.day).or_default().push(reading);
        }
        for stored in storage.query(tables::ACTIVITY_ENTRIES, &filter).await? {
            let entry: ActivityEntry = stored.decode()?;
            records.activities.insert(stored.day, entry);
        }

        Ok(records)
    }

    /// Write a record to the backend before touching local state
    async fn write_through<T: serde::Serialize + Sync>(
        &self,
        table: &str,
        id: Uuid,
        user_id: Uuid,
        day: NaiveDate,
        value: &T,
    ) -> EngineResult<()> {
        if let Some(storage) = &self.storage {
            let record = StoredRecord::encode(id, user_id, day, value)?;
            storage.insert(table, record).await?;
        }
        Ok(())
    }
}

impl Default for HealthRecordStore {
    fn default() -> Self {
        Self::new()
    }
}
