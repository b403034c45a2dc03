// ABOUTME: Record persistence abstraction for the health record store
// ABOUTME: RecordStorage trait, StoredRecord envelope, and query filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Record storage abstraction
//!
//! The record store persists through this capability set and nothing
//! else: insert a record, query records by user (and optionally day),
//! delete a record by id. Backends are interchangeable; the crate ships
//! an in-memory reference implementation used by tests and local-only
//! deployments. Remote backends surface round-trip failures as
//! [`EngineError::StoreUnavailable`](glucowise_core::errors::EngineError::StoreUnavailable);
//! they never silently no-op.

/// In-memory reference storage backend
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use glucowise_core::errors::EngineResult;

/// Table names understood by every storage backend
pub mod tables {
    /// Logged meals
    pub const MEALS: &str = "meals";
    /// Blood glucose readings
    pub const BLOOD_READINGS: &str = "blood_readings";
    /// Daily activity summaries
    pub const ACTIVITY_ENTRIES: &str = "activity_entries";
}

/// Persistence envelope for one domain record
///
/// Backends store the serialized payload opaquely; the indexable columns
/// (`id`, `user_id`, `day`) are lifted out so any backend can filter
/// without understanding the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Record identity, unique within its table
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// UTC calendar day the record is bucketed under
    pub day: NaiveDate,
    /// Serialized domain value
    pub payload: serde_json::Value,
}

impl StoredRecord {
    /// Wrap a domain value for persistence
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be encoded.
    pub fn encode<T: Serialize>(
        id: Uuid,
        user_id: Uuid,
        day: NaiveDate,
        value: &T,
    ) -> EngineResult<Self> {
        Ok(Self {
            id,
            user_id,
            day,
            payload: serde_json::to_value(value)?,
        })
    }

    /// Unwrap the payload back into a domain value
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload does not decode as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> EngineResult<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Filter for [`RecordStorage::query`]
#[derive(Debug, Clone, Copy)]
pub struct RecordFilter {
    /// Only records owned by this user
    pub user_id: Uuid,
    /// Only records bucketed under this day, when set
    pub day: Option<NaiveDate>,
}

impl RecordFilter {
    /// Every record a user owns in the table
    #[must_use]
    pub const fn for_user(user_id: Uuid) -> Self {
        Self { user_id, day: None }
    }

    /// A user's records for a single day
    #[must_use]
    pub const fn for_day(user_id: Uuid, day: NaiveDate) -> Self {
        Self {
            user_id,
            day: Some(day),
        }
    }

    /// Whether `record` satisfies this filter
    #[must_use]
    pub fn matches(&self, record: &StoredRecord) -> bool {
        record.user_id == self.user_id && self.day.map_or(true, |day| record.day == day)
    }
}

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent persistence interface for the record store.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Persist a record into `table`
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the backend round-trip fails.
    async fn insert(&self, table: &str, record: StoredRecord) -> EngineResult<()>;

    /// Fetch the records in `table` matching `filter`
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the backend round-trip fails.
    async fn query(&self, table: &str, filter: &RecordFilter) -> EngineResult<Vec<StoredRecord>>;

    /// Remove the record with `id` from `table`
    ///
    /// Removing an absent id is not an error; delete is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the backend round-trip fails.
    async fn delete(&self, table: &str, id: Uuid) -> EngineResult<()>;
}
