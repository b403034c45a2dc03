// ABOUTME: Unified error types shared across the GlucoWise engine workspace
// ABOUTME: EngineError covers validation, lookup, and backing-store failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

//! # Unified Error Handling
//!
//! Every fallible operation in the engine reports failure through
//! [`EngineError`]. The aggregation and energy calculators are total and
//! never fail on well-typed input; store and directory operations surface
//! their failures explicitly instead of logging and returning.

use std::fmt::Display;

use thiserror::Error;

/// Convenience alias used throughout the workspace
pub type EngineResult<T> = Result<T, EngineError>;

/// Common error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A supplied value violates a domain invariant
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Reason the value was rejected
        reason: String,
    },

    /// A requested entity does not exist
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of entity that was looked up
        resource: &'static str,
        /// Identifier used for the lookup
        id: String,
    },

    /// The backing record store failed a round-trip
    ///
    /// The local cache keeps serving the last known data after this error;
    /// callers can inspect the store's sync state to see that it is stale.
    #[error("record storage unavailable: {details}")]
    StoreUnavailable {
        /// Description of the backend failure
        details: String,
    },

    /// A record payload could not be (de)serialized
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Build a validation error for `field`
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Build a not-found error for a `resource` looked up by `id`
    pub fn not_found(resource: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Build a store-unavailable error
    pub fn store_unavailable(details: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            details: details.into(),
        }
    }

    /// Whether this error is a not-found lookup
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
