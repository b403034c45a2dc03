// ABOUTME: In-memory reference implementation of the RecordStorage trait
// ABOUTME: Table-keyed record vectors behind a tokio RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use glucowise_core::errors::EngineResult;

use super::{RecordFilter, RecordStorage, StoredRecord};

/// In-memory storage backend
///
/// The reference [`RecordStorage`] implementation: a map of table name to
/// record list behind a `tokio::sync::RwLock`. Used by tests and by
/// local-only deployments that want write-through semantics without a
/// remote backend.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    tables: RwLock<HashMap<String, Vec<StoredRecord>>>,
}

impl InMemoryStorage {
    /// Create an empty storage backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records held across every table
    pub async fn record_count(&self) -> usize {
        self.tables.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl RecordStorage for InMemoryStorage {
    async fn insert(&self, table: &str, record: StoredRecord) -> EngineResult<()> {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_owned()).or_default().push(record);
        Ok(())
    }

    async fn query(&self, table: &str, filter: &RecordFilter) -> EngineResult<Vec<StoredRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete(&self, table: &str, id: Uuid) -> EngineResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(records) = tables.get_mut(table) {
            records.retain(|record| record.id != id);
        }
        Ok(())
    }
}
