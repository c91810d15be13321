// ABOUTME: Wardrobe gap analysis producing prioritized, actionable recommendations
// ABOUTME: Flags category gaps, palette imbalance, thin season coverage, and idle garments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Wardrobe Insights
//!
//! Analyzes a wardrobe's composition and produces prioritized
//! recommendations: missing core categories, a palette skewed too neutral or
//! too colorful, seasons with thin coverage, and garments that never leave
//! the closet. Recommendations carry a priority, a confidence level, and
//! concrete next steps, sorted best-first and truncated to a configured cap.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use capsule_core::errors::AppResult;
use capsule_core::models::{Garment, GarmentCategory, Season, StyleProfile};

use crate::color_harmony::ColorProfile;
use crate::config::{InsightsConfig, IntelligenceConfig};

/// Priority of a wardrobe recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Nice to have
    Low,
    /// Worth addressing
    Medium,
    /// Addresses a real gap
    High,
    /// The wardrobe can't serve its owner without this
    Critical,
}

impl RecommendationPriority {
    /// Numeric rank for sorting (higher is more urgent)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

/// Confidence in a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// Weak signal
    Low,
    /// Reasonable signal
    Medium,
    /// Strong signal
    High,
}

impl Confidence {
    /// Confidence as a 0-1 score
    #[must_use]
    pub const fn as_score(&self) -> f64 {
        match self {
            Self::Low => 0.4,
            Self::Medium => 0.7,
            Self::High => 0.95,
        }
    }
}

/// Kinds of wardrobe recommendations
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WardrobeRecommendationType {
    /// A core category is missing or thin
    CategoryGap,
    /// The color palette is out of balance
    PaletteBalance,
    /// A season has little to wear
    SeasonCoverage,
    /// Garments are going unworn
    Rotation,
}

/// A prioritized, actionable wardrobe recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeRecommendation {
    /// Kind of recommendation
    pub recommendation_type: WardrobeRecommendationType,
    /// Short title
    pub title: String,
    /// What was observed
    pub description: String,
    /// How urgent this is
    pub priority: RecommendationPriority,
    /// How confident the analysis is
    pub confidence: Confidence,
    /// Concrete next steps
    pub actionable_steps: Vec<String>,
}

/// Wardrobe composition analysis results
#[derive(Debug)]
struct WardrobeAnalysis {
    category_counts: HashMap<GarmentCategory, usize>,
    neutral_share: f64,
    season_coverage: HashMap<Season, usize>,
    idle_count: usize,
}

/// Wardrobe insights engine
pub struct WardrobeInsights {
    config: InsightsConfig,
}

impl Default for WardrobeInsights {
    fn default() -> Self {
        Self::new()
    }
}

impl WardrobeInsights {
    /// Create an insights engine from the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().insights.clone(),
        }
    }

    /// Create an insights engine with explicit configuration
    #[must_use]
    pub const fn with_config(config: InsightsConfig) -> Self {
        Self { config }
    }

    /// Analyze a wardrobe and produce prioritized recommendations
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `AppResult` for interface stability.
    pub fn analyze(
        &self,
        wardrobe: &[Garment],
        _profile: &StyleProfile,
    ) -> AppResult<Vec<WardrobeRecommendation>> {
        if wardrobe.is_empty() {
            return Ok(vec![WardrobeRecommendation {
                recommendation_type: WardrobeRecommendationType::CategoryGap,
                title: "Start with the basics".into(),
                description: "Your wardrobe is empty, so there's nothing to combine yet.".into(),
                priority: RecommendationPriority::Critical,
                confidence: Confidence::High,
                actionable_steps: vec![
                    "Add a few tops, bottoms, and one pair of shoes".into(),
                    "Tag colors and occasions as you add items".into(),
                ],
            }]);
        }

        let analysis = self.analyze_composition(wardrobe);

        let mut recommendations = Vec::new();
        recommendations.extend(self.category_gap_recommendations(&analysis));
        recommendations.extend(self.palette_recommendations(&analysis));
        recommendations.extend(self.season_coverage_recommendations(wardrobe, &analysis));
        recommendations.extend(Self::rotation_recommendations(&analysis));

        recommendations
            .retain(|r| r.confidence.as_score() >= self.config.limits.min_confidence_threshold);

        // Sort by priority then confidence, best first
        recommendations.sort_by(|a, b| {
            b.priority.rank().cmp(&a.priority.rank()).then_with(|| {
                b.confidence
                    .as_score()
                    .partial_cmp(&a.confidence.as_score())
                    .unwrap_or(Ordering::Equal)
            })
        });

        Ok(recommendations
            .into_iter()
            .take(self.config.limits.max_recommendations)
            .collect())
    }

    /// Compute wardrobe composition statistics
    fn analyze_composition(&self, wardrobe: &[Garment]) -> WardrobeAnalysis {
        let mut category_counts: HashMap<GarmentCategory, usize> = HashMap::new();
        let mut season_coverage: HashMap<Season, usize> = HashMap::new();
        let mut neutral_colors = 0_usize;
        let mut total_colors = 0_usize;
        let mut idle_count = 0_usize;

        let idle_cutoff = Utc::now() - Duration::days(self.config.thresholds.underworn_days);

        for garment in wardrobe {
            *category_counts.entry(garment.category()).or_insert(0) += 1;

            for season in Season::all() {
                if garment.suits_season(season) {
                    *season_coverage.entry(season).or_insert(0) += 1;
                }
            }

            for color in garment.colors() {
                if let Some(profile) = ColorProfile::from_color(color) {
                    total_colors += 1;
                    if profile.neutral {
                        neutral_colors += 1;
                    }
                }
            }

            let worn_recently = garment.last_worn().is_some_and(|worn| worn > idle_cutoff);
            let newly_added = garment.created_at() > idle_cutoff;
            if !worn_recently && !newly_added {
                idle_count += 1;
            }
        }

        let neutral_share = if total_colors == 0 {
            0.0
        } else {
            neutral_colors as f64 / total_colors as f64
        };

        WardrobeAnalysis {
            category_counts,
            neutral_share,
            season_coverage,
            idle_count,
        }
    }

    /// Flag missing or thin core categories
    fn category_gap_recommendations(
        &self,
        analysis: &WardrobeAnalysis,
    ) -> Vec<WardrobeRecommendation> {
        let mut recommendations = Vec::new();
        let min = self.config.thresholds.min_items_per_core_category;

        let has_dresses = analysis
            .category_counts
            .get(&GarmentCategory::Dress)
            .copied()
            .unwrap_or(0)
            > 0;

        for category in [
            GarmentCategory::Top,
            GarmentCategory::Bottom,
            GarmentCategory::Shoes,
        ] {
            let count = analysis.category_counts.get(&category).copied().unwrap_or(0);
            if count >= min {
                continue;
            }
            // A dress wardrobe doesn't need separates to make outfits
            if has_dresses && matches!(category, GarmentCategory::Top | GarmentCategory::Bottom) {
                continue;
            }
            let priority = if count == 0 {
                RecommendationPriority::Critical
            } else {
                RecommendationPriority::High
            };
            recommendations.push(WardrobeRecommendation {
                recommendation_type: WardrobeRecommendationType::CategoryGap,
                title: format!("Add more {category} options"),
                description: format!(
                    "Only {count} {category} item(s) in the wardrobe; combinations will repeat quickly."
                ),
                priority,
                confidence: Confidence::High,
                actionable_steps: vec![
                    format!("Add versatile {category} pieces in neutral colors"),
                    "Favor items that pair with what you already own".into(),
                ],
            });
        }

        recommendations
    }

    /// Flag a palette skewed too neutral or too colorful
    fn palette_recommendations(&self, analysis: &WardrobeAnalysis) -> Vec<WardrobeRecommendation> {
        let mut recommendations = Vec::new();

        if analysis.neutral_share >= self.config.thresholds.neutral_share_high {
            recommendations.push(WardrobeRecommendation {
                recommendation_type: WardrobeRecommendationType::PaletteBalance,
                title: "Introduce an accent color".into(),
                description:
                    "Nearly every item is neutral; outfits will be safe but samey.".into(),
                priority: RecommendationPriority::Low,
                confidence: Confidence::Medium,
                actionable_steps: vec![
                    "Pick one accent color you like and add 1-2 pieces in it".into(),
                    "Accessories are a low-commitment way to test a color".into(),
                ],
            });
        } else if analysis.neutral_share <= self.config.thresholds.neutral_share_low {
            recommendations.push(WardrobeRecommendation {
                recommendation_type: WardrobeRecommendationType::PaletteBalance,
                title: "Add neutral anchors".into(),
                description:
                    "Few neutral items to anchor outfits; bold pieces compete with each other."
                        .into(),
                priority: RecommendationPriority::Medium,
                confidence: Confidence::High,
                actionable_steps: vec![
                    "Add basics in black, white, grey, or navy".into(),
                    "Aim for roughly half the wardrobe in neutrals".into(),
                ],
            });
        }

        recommendations
    }

    /// Flag seasons with thin coverage
    fn season_coverage_recommendations(
        &self,
        wardrobe: &[Garment],
        analysis: &WardrobeAnalysis,
    ) -> Vec<WardrobeRecommendation> {
        let mut recommendations = Vec::new();
        let wardrobe_size = wardrobe.len();

        for season in Season::all() {
            let covered = analysis.season_coverage.get(&season).copied().unwrap_or(0);
            let share = covered as f64 / wardrobe_size as f64;
            if share < self.config.thresholds.season_coverage_min {
                recommendations.push(WardrobeRecommendation {
                    recommendation_type: WardrobeRecommendationType::SeasonCoverage,
                    title: format!("Thin {season} coverage"),
                    description: format!(
                        "Only {covered} of {wardrobe_size} items work for {season}."
                    ),
                    priority: RecommendationPriority::Medium,
                    confidence: Confidence::Medium,
                    actionable_steps: vec![
                        format!("Add a few {season}-appropriate pieces"),
                        "Check warmth ratings match the season's weather".into(),
                    ],
                });
            }
        }

        recommendations
    }

    /// Flag garments going unworn
    fn rotation_recommendations(analysis: &WardrobeAnalysis) -> Vec<WardrobeRecommendation> {
        let mut recommendations = Vec::new();

        if analysis.idle_count >= 5 {
            recommendations.push(WardrobeRecommendation {
                recommendation_type: WardrobeRecommendationType::Rotation,
                title: "Rotate idle garments".into(),
                description: format!(
                    "{} garments haven't been worn in months.",
                    analysis.idle_count
                ),
                priority: RecommendationPriority::Low,
                confidence: Confidence::Medium,
                actionable_steps: vec![
                    "Ask for outfits built around rarely-worn items".into(),
                    "Consider donating pieces that no longer fit your style".into(),
                ],
            });
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_core::models::{Color, GarmentBuilder};
    use uuid::Uuid;

    fn basic(name: &str, category: GarmentCategory, hex: &str) -> Garment {
        GarmentBuilder::new(name, category, Color::new(name, hex))
            .seasons(Season::all().to_vec())
            .build()
    }

    #[test]
    fn empty_wardrobe_yields_a_bootstrap_recommendation() {
        let insights = WardrobeInsights::with_config(InsightsConfig::default());
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let recommendations = insights.analyze(&[], &profile).expect("analyze");
        assert_eq!(recommendations.len(), 1);
        assert_eq!(
            recommendations[0].priority,
            RecommendationPriority::Critical
        );
    }

    #[test]
    fn missing_shoes_are_flagged_as_a_gap() {
        let insights = WardrobeInsights::with_config(InsightsConfig::default());
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let wardrobe = vec![
            basic("tee 1", GarmentCategory::Top, "#ffffff"),
            basic("tee 2", GarmentCategory::Top, "#111111"),
            basic("tee 3", GarmentCategory::Top, "#808080"),
            basic("jeans 1", GarmentCategory::Bottom, "#1f2a44"),
            basic("jeans 2", GarmentCategory::Bottom, "#222222"),
            basic("jeans 3", GarmentCategory::Bottom, "#555555"),
        ];
        let recommendations = insights.analyze(&wardrobe, &profile).expect("analyze");
        assert!(recommendations.iter().any(|r| {
            r.recommendation_type == WardrobeRecommendationType::CategoryGap
                && r.title.contains("shoes")
        }));
    }

    #[test]
    fn dress_wardrobe_does_not_demand_separates() {
        let insights = WardrobeInsights::with_config(InsightsConfig::default());
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let wardrobe = vec![
            basic("dress 1", GarmentCategory::Dress, "#304050"),
            basic("dress 2", GarmentCategory::Dress, "#6b2737"),
            basic("heels", GarmentCategory::Shoes, "#111111"),
            basic("flats", GarmentCategory::Shoes, "#996633"),
            basic("boots", GarmentCategory::Shoes, "#222222"),
        ];
        let recommendations = insights.analyze(&wardrobe, &profile).expect("analyze");
        assert!(!recommendations.iter().any(|r| {
            r.recommendation_type == WardrobeRecommendationType::CategoryGap
                && (r.title.contains("top") || r.title.contains("bottom"))
        }));
    }

    #[test]
    fn all_neutral_palette_suggests_an_accent() {
        let insights = WardrobeInsights::with_config(InsightsConfig::default());
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let wardrobe: Vec<Garment> = (0..6)
            .map(|i| basic(&format!("item {i}"), GarmentCategory::Top, "#808080"))
            .collect();
        let recommendations = insights.analyze(&wardrobe, &profile).expect("analyze");
        assert!(recommendations.iter().any(|r| {
            r.recommendation_type == WardrobeRecommendationType::PaletteBalance
        }));
    }

    #[test]
    fn results_are_sorted_best_first_and_capped() {
        let insights = WardrobeInsights::with_config(InsightsConfig::default());
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let wardrobe = vec![basic("lone tee", GarmentCategory::Top, "#808080")];
        let recommendations = insights.analyze(&wardrobe, &profile).expect("analyze");

        assert!(recommendations.len() <= InsightsConfig::default().limits.max_recommendations);
        for pair in recommendations.windows(2) {
            assert!(pair[0].priority.rank() >= pair[1].priority.rank());
        }
    }
}
