// ABOUTME: Intelligence engine configuration with generator budgets and scoring weights
// ABOUTME: Provides a process-wide default via IntelligenceConfig::global()
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Intelligence Configuration
//!
//! Aggregates configuration for every engine subsystem: generation budgets,
//! scoring weights and filter bias strengths, weather thresholds, and
//! insights thresholds. All sections are serde round-trippable and carry
//! sensible defaults; `IntelligenceConfig::global()` exposes a process-wide
//! default instance for callers that don't inject their own.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use capsule_core::constants::limits;

/// Top-level intelligence engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Candidate generation budgets and caps
    pub generator: GeneratorConfig,
    /// Scoring weights and stylist filter bias strengths
    pub scoring: ScoringConfig,
    /// Weather thresholds and warmth targets
    pub weather: WeatherConfig,
    /// Wardrobe insights thresholds and limits
    pub insights: InsightsConfig,
}

static GLOBAL_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Process-wide default configuration
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(Self::default)
    }
}

/// Candidate generation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Budgets and caps on generation work
    pub limits: GeneratorLimits,
}

/// Budgets and caps applied during candidate generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorLimits {
    /// Maximum candidate combinations enumerated in one run
    pub max_candidates: usize,
    /// Default number of outfits returned when the request doesn't say
    pub default_max_results: usize,
    /// Hard cap on requested `max_results`
    pub max_results_cap: usize,
    /// Default minimum total score for a returned outfit
    pub default_min_score: f64,
    /// Maximum garments considered per outfit slot after prior ranking
    pub per_slot_cap: usize,
    /// Candidates scored per progress report
    pub scoring_batch_size: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            max_candidates: limits::DEFAULT_MAX_CANDIDATES,
            default_max_results: limits::DEFAULT_MAX_RESULTS,
            max_results_cap: limits::MAX_RESULTS_CAP,
            default_min_score: limits::DEFAULT_MIN_SCORE,
            per_slot_cap: 40,
            scoring_batch_size: 64,
        }
    }
}

/// Scoring configuration: dimension weights and filter bias strengths
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weights combining the four score dimensions into a total
    pub weights: ScoringWeights,
    /// How strongly stylist filters bias dimension scores
    pub biases: FilterBiasConfig,
}

/// Weights for combining score dimensions into a total
///
/// Weights are normalized at scoring time, so they only need to be
/// meaningful relative to each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the color harmony dimension
    pub color_harmony: f64,
    /// Weight for the style matching dimension
    pub style_matching: f64,
    /// Weight for the season suitability dimension
    pub season_suitability: f64,
    /// Weight for the occasion suitability dimension
    pub occasion_suitability: f64,
}

impl ScoringWeights {
    /// Sum of all weights (used for normalization)
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.color_harmony
            + self.style_matching
            + self.season_suitability
            + self.occasion_suitability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            color_harmony: 0.30,
            style_matching: 0.30,
            season_suitability: 0.20,
            occasion_suitability: 0.20,
        }
    }
}

/// Bias strengths for the stylist filter sliders
///
/// Each strength is the maximum score adjustment (in points out of 100) a
/// filter at full deflection can apply to its dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterBiasConfig {
    /// Maximum adjustment from the boldness slider
    pub boldness_strength: f64,
    /// Maximum adjustment from the colorfulness slider
    pub colorfulness_strength: f64,
    /// Maximum adjustment from the layering slider
    pub layering_strength: f64,
}

impl Default for FilterBiasConfig {
    fn default() -> Self {
        Self {
            boldness_strength: 12.0,
            colorfulness_strength: 12.0,
            layering_strength: 8.0,
        }
    }
}

/// Weather analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature band boundaries
    pub temperature: TemperatureThresholds,
    /// Outfit warmth targets per temperature band
    pub warmth_targets: WarmthTargets,
    /// Non-temperature condition thresholds (wind, precipitation)
    pub conditions: WeatherConditionThresholds,
}

/// Temperature thresholds bounding the four temperature bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureThresholds {
    /// Below this it's cold (Celsius)
    pub cold_below_celsius: f64,
    /// Below this (and not cold) it's mild (Celsius)
    pub mild_below_celsius: f64,
    /// Below this (and not mild) it's warm; above is hot (Celsius)
    pub warm_below_celsius: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            cold_below_celsius: 8.0,
            mild_below_celsius: 18.0,
            warm_below_celsius: 26.0,
        }
    }
}

/// Total-outfit warmth target ranges per temperature band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmthTargets {
    /// Target range when cold
    pub cold: (u32, u32),
    /// Target range when mild
    pub mild: (u32, u32),
    /// Target range when warm
    pub warm: (u32, u32),
    /// Target range when hot
    pub hot: (u32, u32),
}

impl Default for WarmthTargets {
    fn default() -> Self {
        Self {
            cold: (12, 30),
            mild: (8, 16),
            warm: (5, 11),
            hot: (2, 7),
        }
    }
}

/// Non-temperature weather thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConditionThresholds {
    /// Wind speed in m/s above which outerwear is required
    pub strong_wind_mps: f64,
}

impl Default for WeatherConditionThresholds {
    fn default() -> Self {
        Self {
            strong_wind_mps: 10.0,
        }
    }
}

/// Wardrobe insights configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Thresholds triggering wardrobe recommendations
    pub thresholds: InsightsThresholds,
    /// Limits on recommendation output
    pub limits: InsightsLimits,
}

/// Thresholds for triggering wardrobe recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsThresholds {
    /// Minimum garments per core category before flagging a gap
    pub min_items_per_core_category: usize,
    /// Days without wear before a garment counts as under-worn
    pub underworn_days: i64,
    /// Neutral color share above which the palette reads as muted
    pub neutral_share_high: f64,
    /// Neutral color share below which the palette lacks anchors
    pub neutral_share_low: f64,
    /// Minimum share of the wardrobe covering a season
    pub season_coverage_min: f64,
}

impl Default for InsightsThresholds {
    fn default() -> Self {
        Self {
            min_items_per_core_category: 3,
            underworn_days: 90,
            neutral_share_high: 0.85,
            neutral_share_low: 0.25,
            season_coverage_min: 0.15,
        }
    }
}

/// Limits on wardrobe recommendation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsLimits {
    /// Maximum recommendations returned by an insights run
    pub max_recommendations: usize,
    /// Minimum confidence score to include a recommendation
    pub min_confidence_threshold: f64,
}

impl Default for InsightsLimits {
    fn default() -> Self {
        Self {
            max_recommendations: limits::MAX_WARDROBE_RECOMMENDATIONS,
            min_confidence_threshold: limits::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = IntelligenceConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: IntelligenceConfig = serde_json::from_str(&json).expect("deserialize");
        assert!(
            (back.generator.limits.default_min_score - config.generator.limits.default_min_score)
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn global_returns_the_same_instance() {
        let a = IntelligenceConfig::global();
        let b = IntelligenceConfig::global();
        assert!(std::ptr::eq(a, b));
    }
}
