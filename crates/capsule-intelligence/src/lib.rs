// ABOUTME: Outfit recommendation engine for the Capsule wardrobe platform
// ABOUTME: Color harmony, multi-dimensional scoring, candidate generation, and session dedup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![deny(unsafe_code)]

//! # Capsule Intelligence
//!
//! The outfit recommendation engine. Given a wardrobe of garments, a user's
//! style profile, and a generation request, the engine enumerates candidate
//! outfits, scores each across weighted dimensions (color harmony, style
//! matching, season suitability, occasion suitability), enforces hard
//! constraints, deduplicates against session history, and reports incremental
//! progress while it works.
//!
//! The engine is pure CPU: no I/O, no network. Candidate scoring runs in
//! parallel with `rayon`.
//!
//! ## Modules
//!
//! - **`color_harmony`**: hue-wheel color relationship scoring
//! - **`scoring`**: per-dimension scorers and weighted totals
//! - **`generator`**: candidate enumeration with budgets and progress
//! - **`session`**: TTL-bounded per-user recommendation history for dedup
//! - **`insights`**: wardrobe gap analysis and recommendations
//! - **`weather`**: caller-provided weather conditions to warmth targets
//! - **`config`**: engine configuration with a process-wide default

/// Color relationship classification and harmony scoring
pub mod color_harmony;

/// Engine configuration (generator budgets, scoring weights, thresholds)
pub mod config;

/// Candidate outfit enumeration, budgets, and progress reporting
pub mod generator;

/// Wardrobe gap analysis and prioritized recommendations
pub mod insights;

/// Per-dimension outfit scoring and weighted totals
pub mod scoring;

/// Session history for deduplicating recommendations
pub mod session;

/// Weather conditions and warmth targets
pub mod weather;

pub use color_harmony::{ColorProfile, PairRelation};
pub use config::{
    FilterBiasConfig, GeneratorConfig, GeneratorLimits, InsightsConfig, IntelligenceConfig,
    ScoringConfig, ScoringWeights, WeatherConfig,
};
pub use generator::{
    GenerationPhase, GenerationProgress, GenerationRequest, NoopProgress, OutfitGenerator,
    OutfitGeneratorTrait, ProgressReporter,
};
pub use insights::{
    Confidence, RecommendationPriority, WardrobeInsights, WardrobeRecommendation,
    WardrobeRecommendationType,
};
pub use scoring::{OutfitScorer, ScoringContext};
pub use session::{
    create_shared_session_history, HistorySource, SessionHistory, SessionHistoryConfig,
    SessionStats, SharedSessionHistory,
};
pub use weather::{TemperatureBand, WeatherConditions};
