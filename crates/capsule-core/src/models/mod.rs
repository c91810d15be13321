// ABOUTME: Core data models and types for the Capsule wardrobe platform
// ABOUTME: Re-exports Garment, Outfit, Color, StyleProfile and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # Data Models
//!
//! This module contains the core data structures used throughout the Capsule
//! platform. These models provide a single representation of wardrobe data
//! shared by the storage layer, the recommendation engine, and the API.
//!
//! ## Design Principles
//!
//! - **Serializable**: All models support JSON serialization for the REST API
//! - **Type Safe**: Strong typing prevents common data handling errors
//! - **Guarded Construction**: `Garment` fields are private; use
//!   `GarmentBuilder` to construct instances with clamped attribute ranges
//!
//! ## Core Models
//!
//! - `Garment`: a single wardrobe item (category, colors, styles, seasons)
//! - `Outfit`: a combination of garments filling outfit slots
//! - `ScoreBreakdown` / `ScoredOutfit`: multi-dimensional quality metrics
//! - `StyleProfile` / `StylistFilters`: user preferences biasing generation

// Domain modules
mod color;
mod garment;
mod outfit;
mod profile;

// Re-export all public types for convenience
// Color domain
pub use color::{Color, Rgb};

// Garment domain
pub use garment::{Garment, GarmentBuilder, GarmentCategory, Occasion, Season, StyleTag};

// Outfit domain
pub use outfit::{
    Outfit, OutfitItem, OutfitSlot, SavedOutfit, ScoreBreakdown, ScoredOutfit, WearRecord,
};

// Profile domain
pub use profile::{StyleProfile, StylistFilters};
