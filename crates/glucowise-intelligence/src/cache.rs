// ABOUTME: Compute-once-per-day cache for meal recommendations
// ABOUTME: Keyed by (user, UTC day) with explicit invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! Recommendation cache
//!
//! Recommendations are computed at most once per (user, day) and then
//! served from this cache. The cache deliberately does not watch the
//! underlying records: a day whose meals, activity, or readings change
//! after the first computation keeps serving the original recommendation
//! until a caller invalidates it. That staleness window is a documented
//! tradeoff, not an oversight.
//!
//! # Thread Safety
//!
//! Uses `RwLock` internally and is safe to share across threads via `Arc`.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use glucowise_core::models::Meal;

/// Cache key: one entry per user per UTC calendar day
type DayKey = (Uuid, NaiveDate);

/// Thread-safe cache of computed meal recommendations
#[derive(Debug, Default)]
pub struct RecommendationCache {
    entries: RwLock<HashMap<DayKey, Vec<Meal>>>,
}

impl RecommendationCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached recommendation for (user, day)
    ///
    /// `Some(vec![])` is a valid hit: a day that produced no
    /// recommendation is still settled and will not be recomputed.
    /// Returns `None` if the lock is poisoned.
    #[must_use]
    pub fn fetch(&self, user_id: Uuid, day: NaiveDate) -> Option<Vec<Meal>> {
        let Ok(entries) = self.entries.read() else {
            return None;
        };
        entries.get(&(user_id, day)).cloned()
    }

    /// Record the computed recommendation for (user, day)
    ///
    /// Silently skipped if the lock is poisoned - the next fetch misses
    /// and the recommendation is recomputed.
    pub fn store(&self, user_id: Uuid, day: NaiveDate, meals: Vec<Meal>) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        debug!(%user_id, %day, count = meals.len(), "caching meal recommendation");
        entries.insert((user_id, day), meals);
    }

    /// Drop the cached recommendation for one (user, day)
    pub fn invalidate_day(&self, user_id: Uuid, day: NaiveDate) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&(user_id, day));
        }
    }

    /// Drop every cached recommendation for a user
    pub fn invalidate_user(&self, user_id: Uuid) {
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|(cached_user, _), _| *cached_user != user_id);
        }
    }

    /// Number of cached (user, day) entries
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }
}
