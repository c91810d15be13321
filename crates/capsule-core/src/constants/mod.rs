// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Capsule wardrobe platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better
//! maintainability. Constants are grouped into logical domains rather than
//! being in a single large file.

/// Generation and scoring limits
pub mod limits {
    /// Default maximum number of outfits returned by one generation run
    pub const DEFAULT_MAX_RESULTS: usize = 10;
    /// Hard cap on `max_results` regardless of request
    pub const MAX_RESULTS_CAP: usize = 50;
    /// Default minimum total score for a returned outfit (0-100)
    pub const DEFAULT_MIN_SCORE: f64 = 55.0;
    /// Maximum candidate combinations considered in one generation run
    pub const DEFAULT_MAX_CANDIDATES: usize = 5_000;
    /// Maximum garments accepted in a single wardrobe
    pub const MAX_WARDROBE_SIZE: usize = 500;
    /// Minimum confidence score to include a wardrobe recommendation
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;
    /// Maximum wardrobe recommendations returned by an insights run
    pub const MAX_WARDROBE_RECOMMENDATIONS: usize = 8;
}

/// Score scale boundaries
pub mod scores {
    /// Lowest possible dimension or total score
    pub const MIN_SCORE: f64 = 0.0;
    /// Highest possible dimension or total score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Garment attribute ranges
pub mod garment_ranges {
    /// Lowest formality level (very casual)
    pub const MIN_FORMALITY: u8 = 1;
    /// Highest formality level (black tie)
    pub const MAX_FORMALITY: u8 = 5;
    /// Lowest warmth rating (sheer summer fabric)
    pub const MIN_WARMTH: u8 = 0;
    /// Highest warmth rating (heavy winter outerwear)
    pub const MAX_WARMTH: u8 = 10;
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8084;
}

/// Service names for structured logging
pub mod service_names {
    /// Main server service name
    pub const CAPSULE_SERVER: &str = "capsule-server";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// API base path
    pub const API_BASE: &str = "/api";
}
