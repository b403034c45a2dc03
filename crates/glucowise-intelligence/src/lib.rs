// ABOUTME: Rule-based meal recommendation and daily tip engine
// ABOUTME: Pure selection logic over aggregated day snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoWise Engine

#![deny(unsafe_code)]

//! # GlucoWise Intelligence
//!
//! Rule-based meal recommendations and rotating daily tips for the
//! GlucoWise platform. The engines here are deliberately simple heuristics
//! over aggregated day state - selection, not optimization, and no claim
//! of medical accuracy.
//!
//! Both engines are pure: they consume a [`DaySnapshot`](recommendation::DaySnapshot)
//! assembled by the caller and never touch storage themselves. The
//! per-(user, day) [`RecommendationCache`](cache::RecommendationCache)
//! gives recommendations their compute-once-per-day semantics.

/// Compute-once-per-day cache for meal recommendations
pub mod cache;

/// Threshold configuration for the recommendation rules
pub mod config;

/// Rule-based dinner recommendation engine
pub mod recommendation;

/// Rotating daily tip selection
pub mod tips;
