// ABOUTME: User directory abstraction for profile lookup
// ABOUTME: UserDirectory trait and the in-memory reference implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! User directory
//!
//! Profiles are owned by a separate collaborator; the engine only needs
//! to look them up for goal computation. The trait mirrors that boundary:
//! fetch by id, upsert on registration/edit. Deleting accounts is the
//! collaborator's concern and has no surface here.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use glucowise_core::errors::{EngineError, EngineResult};
use glucowise_core::models::UserProfile;

/// Profile lookup interface for the engine
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user's profile
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no profile exists for `user_id`, or
    /// `StoreUnavailable` when the directory backend cannot be reached.
    async fn profile(&self, user_id: Uuid) -> EngineResult<UserProfile>;

    /// Create or replace a user's profile
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the profile's biometrics violate their
    /// invariants, or `StoreUnavailable` on backend failure.
    async fn upsert_profile(&self, profile: UserProfile) -> EngineResult<()>;
}

/// In-memory reference directory
///
/// Used by tests and local-only deployments. Profiles are validated on
/// the way in so the calculators can stay total.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn profile(&self, user_id: Uuid) -> EngineResult<UserProfile> {
        self.profiles
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("user profile", user_id))
    }

    async fn upsert_profile(&self, profile: UserProfile) -> EngineResult<()> {
        profile.validate()?;
        self.profiles.write().await.insert(profile.id, profile);
        Ok(())
    }
}
