// ABOUTME: Intelligence module re-exports from the capsule-intelligence crate
// ABOUTME: Preserves import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # Intelligence Module
//!
//! The outfit recommendation engine: candidate generation, multi-dimensional
//! scoring, session deduplication, and wardrobe insights.
//!
//! This module re-exports from the `capsule-intelligence` crate so server
//! code and tests can use `capsule_server::intelligence::…` paths.

// Re-export all public items from capsule-intelligence
pub use capsule_intelligence::*;

// Re-export submodules for path-based access
// (e.g., crate::intelligence::color_harmony::harmony_score)
pub use capsule_intelligence::{
    color_harmony, config, generator, insights, scoring, session, weather,
};
