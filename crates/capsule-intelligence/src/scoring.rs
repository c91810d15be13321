// ABOUTME: Multi-dimensional outfit scoring with weighted totals and filter biases
// ABOUTME: Scores color harmony, style matching, season suitability, and occasion suitability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Outfit Scoring
//!
//! Computes a [`ScoreBreakdown`] for an outfit candidate: four dimensions
//! scored 0-100 and combined into a weighted total. Stylist filters bias
//! the dimensions (boldness and colorfulness act on the color dimension,
//! formality shifts the occasion target, layering adjusts the total for
//! outer layers) without ever hard-excluding a candidate.

use capsule_core::models::{
    Garment, Occasion, Outfit, ScoreBreakdown, ScoredOutfit, Season, StyleProfile, StylistFilters,
};

use crate::color_harmony::{self, ColorProfile, PairRelation};
use crate::config::{IntelligenceConfig, ScoringConfig, WeatherConfig};
use crate::weather::{self, WeatherConditions};

/// Mix of preference vs. coherence inside the style dimension
const STYLE_PREFERENCE_SHARE: f64 = 0.6;

/// Mix of season tags vs. warmth fit inside the season dimension
const SEASON_TAG_SHARE: f64 = 0.65;

/// Mix of formality proximity vs. occasion tags inside the occasion dimension
const OCCASION_FORMALITY_SHARE: f64 = 0.6;

/// Representative temperature per season when no weather is supplied
const fn season_representative_celsius(season: Season) -> f64 {
    match season {
        Season::Spring => 13.0,
        Season::Summer => 28.0,
        Season::Fall => 10.0,
        Season::Winter => 2.0,
    }
}

/// Inputs the scorer needs beyond the outfit itself
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    /// The user's style profile
    pub profile: &'a StyleProfile,
    /// Stylist filter sliders (already clamped)
    pub filters: StylistFilters,
    /// Target season
    pub season: Season,
    /// Target occasion
    pub occasion: Occasion,
    /// Weather conditions, when the caller supplied them
    pub weather: Option<WeatherConditions>,
    /// Effective formality band for this request (inclusive)
    pub formality_range: (u8, u8),
}

/// Scores outfit candidates across weighted dimensions
pub struct OutfitScorer {
    config: ScoringConfig,
    weather_config: WeatherConfig,
}

impl Default for OutfitScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutfitScorer {
    /// Create a scorer from the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        let global = IntelligenceConfig::global();
        Self {
            config: global.scoring.clone(),
            weather_config: global.weather.clone(),
        }
    }

    /// Create a scorer with explicit configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig, weather_config: WeatherConfig) -> Self {
        Self {
            config,
            weather_config,
        }
    }

    /// Score an outfit, producing its breakdown and reasons
    #[must_use]
    pub fn score(&self, outfit: Outfit, ctx: &ScoringContext<'_>) -> ScoredOutfit {
        let garments: Vec<&Garment> = outfit.garments().collect();
        let mut reasons = Vec::new();

        let color_harmony = self.score_color_dimension(&garments, ctx, &mut reasons);
        let style_matching = Self::score_style_dimension(&garments, ctx, &mut reasons);
        let season_suitability = self.score_season_dimension(&outfit, &garments, ctx, &mut reasons);
        let occasion_suitability = Self::score_occasion_dimension(&garments, ctx, &mut reasons);

        let weights = &self.config.weights;
        let weight_sum = weights.sum();
        let mut total = if weight_sum > 0.0 {
            (color_harmony * weights.color_harmony
                + style_matching * weights.style_matching
                + season_suitability * weights.season_suitability
                + occasion_suitability * weights.occasion_suitability)
                / weight_sum
        } else {
            0.0
        };

        total += self.layering_adjustment(&outfit, ctx, &mut reasons);
        let total = total.clamp(0.0, 100.0);

        ScoredOutfit {
            outfit,
            breakdown: ScoreBreakdown {
                color_harmony,
                style_matching,
                season_suitability,
                occasion_suitability,
                total,
            },
            reasons,
        }
    }

    /// Color harmony dimension with boldness and colorfulness biases
    fn score_color_dimension(
        &self,
        garments: &[&Garment],
        ctx: &ScoringContext<'_>,
        reasons: &mut Vec<String>,
    ) -> f64 {
        let profiles = color_harmony::outfit_color_profiles(garments);
        let mut score = color_harmony::harmony_score(&profiles);

        if let Some(relation) = color_harmony::dominant_relation(&profiles) {
            if relation != PairRelation::Unrelated {
                reasons.push(relation.description().to_owned());
            }
        }

        // Colorfulness slider: reward outfits whose chromatic share points
        // the same way the user leaned
        let colorful = color_harmony::colorful_share(&profiles);
        let colorfulness_bias = StylistFilters::bias(ctx.filters.colorfulness) * 2.0;
        score += colorfulness_bias
            * self.config.biases.colorfulness_strength
            * colorful.mul_add(2.0, -1.0);

        // Boldness slider: saturated colors and visible patterns
        let bold_share = Self::bold_share(garments, &profiles);
        let boldness_bias = StylistFilters::bias(ctx.filters.boldness) * 2.0;
        score += boldness_bias
            * self.config.biases.boldness_strength
            * bold_share.mul_add(2.0, -1.0);

        score.clamp(0.0, 100.0)
    }

    /// Share of the outfit that reads as bold (saturated colors, patterns)
    fn bold_share(garments: &[&Garment], profiles: &[ColorProfile]) -> f64 {
        if garments.is_empty() {
            return 0.0;
        }
        let saturated = if profiles.is_empty() {
            0.0
        } else {
            profiles.iter().filter(|p| p.is_saturated()).count() as f64 / profiles.len() as f64
        };
        let patterned =
            garments.iter().filter(|g| g.is_patterned()).count() as f64 / garments.len() as f64;
        f64::midpoint(saturated, patterned)
    }

    /// Style matching dimension: weighted preferences and tag coherence
    fn score_style_dimension(
        garments: &[&Garment],
        ctx: &ScoringContext<'_>,
        reasons: &mut Vec<String>,
    ) -> f64 {
        if garments.is_empty() {
            return 0.0;
        }

        // Preference component: how much the user likes each garment's
        // strongest style
        let mut best_tag = None;
        let mut best_weight = 0.0;
        let preference_sum: f64 = garments
            .iter()
            .map(|garment| {
                let tags = garment.style_tags();
                if tags.is_empty() {
                    return 0.5;
                }
                tags.iter()
                    .map(|&tag| {
                        let weight = ctx.profile.preference_weight(tag);
                        if weight > best_weight {
                            best_weight = weight;
                            best_tag = Some(tag);
                        }
                        weight
                    })
                    .fold(0.0, f64::max)
            })
            .sum();
        let preference = preference_sum / garments.len() as f64;

        // Coherence component: do the tagged garments agree on a style?
        let tagged: Vec<&&Garment> = garments
            .iter()
            .filter(|g| !g.style_tags().is_empty())
            .collect();
        let coherence = if tagged.len() < 2 {
            1.0
        } else {
            let mut agreeing = 0_u32;
            let mut pairs = 0_u32;
            for (i, a) in tagged.iter().enumerate() {
                for b in tagged.iter().skip(i + 1) {
                    pairs += 1;
                    if a.style_tags().iter().any(|tag| b.style_tags().contains(tag)) {
                        agreeing += 1;
                    }
                }
            }
            f64::from(agreeing) / f64::from(pairs)
        };

        if let Some(tag) = best_tag {
            if best_weight >= 0.75 && !ctx.profile.style_preferences.is_empty() {
                reasons.push(format!("matches your {tag} preference"));
            }
        }

        (STYLE_PREFERENCE_SHARE * preference + (1.0 - STYLE_PREFERENCE_SHARE) * coherence) * 100.0
    }

    /// Season suitability dimension: season tags and warmth fit
    fn score_season_dimension(
        &self,
        outfit: &Outfit,
        garments: &[&Garment],
        ctx: &ScoringContext<'_>,
        reasons: &mut Vec<String>,
    ) -> f64 {
        if garments.is_empty() {
            return 0.0;
        }

        let tag_sum: f64 = garments
            .iter()
            .map(|garment| {
                if garment.suits_season(ctx.season) {
                    1.0
                } else if ctx
                    .season
                    .neighbors()
                    .iter()
                    .any(|&neighbor| garment.suits_season(neighbor))
                {
                    0.6
                } else {
                    0.2
                }
            })
            .sum();
        let tag_component = tag_sum / garments.len() as f64;

        let conditions = ctx.weather.unwrap_or_else(|| {
            WeatherConditions::clear(season_representative_celsius(ctx.season))
        });
        let target = conditions.warmth_target(&self.weather_config);
        let warmth_component = weather::warmth_fit(outfit.total_warmth(), target);

        if warmth_component >= 0.99 && tag_component >= 0.9 {
            reasons.push(format!("dressed right for {}", ctx.season));
        }

        (SEASON_TAG_SHARE * tag_component + (1.0 - SEASON_TAG_SHARE) * warmth_component) * 100.0
    }

    /// Occasion suitability dimension: formality proximity and occasion tags
    fn score_occasion_dimension(
        garments: &[&Garment],
        ctx: &ScoringContext<'_>,
        reasons: &mut Vec<String>,
    ) -> f64 {
        if garments.is_empty() {
            return 0.0;
        }

        let (lo, hi) = ctx.formality_range;
        let band_width = f64::from(hi.saturating_sub(lo)).max(1.0);
        // Formality slider moves the target within the occasion's band
        let target = f64::from(lo) + band_width * ctx.filters.formality.clamp(0.0, 1.0);

        let formality_sum: f64 = garments
            .iter()
            .map(|garment| {
                let formality = f64::from(garment.formality());
                let proximity = 1.0 - (formality - target).abs() / 4.0;
                if garment.formality() >= lo && garment.formality() <= hi {
                    0.7 + 0.3 * proximity.clamp(0.0, 1.0)
                } else {
                    0.25 * proximity.clamp(0.0, 1.0)
                }
            })
            .sum();
        let formality_component = formality_sum / garments.len() as f64;

        let tag_sum: f64 = garments
            .iter()
            .map(|garment| {
                if garment.suits_occasion(ctx.occasion) {
                    1.0
                } else {
                    0.4
                }
            })
            .sum();
        let tag_component = tag_sum / garments.len() as f64;

        if formality_component >= 0.9 && tag_component >= 0.9 {
            reasons.push(format!("formality right for {}", ctx.occasion));
        }

        (OCCASION_FORMALITY_SHARE * formality_component
            + (1.0 - OCCASION_FORMALITY_SHARE) * tag_component)
            * 100.0
    }

    /// Total-score adjustment from the layering slider
    fn layering_adjustment(
        &self,
        outfit: &Outfit,
        ctx: &ScoringContext<'_>,
        reasons: &mut Vec<String>,
    ) -> f64 {
        use capsule_core::models::OutfitSlot;

        let layering_bias = StylistFilters::bias(ctx.filters.layering) * 2.0;
        if layering_bias.abs() < f64::EPSILON {
            return 0.0;
        }
        let has_outer = outfit.slot(OutfitSlot::Outerwear).is_some();
        let direction = if has_outer { 1.0 } else { -1.0 };
        let adjustment = layering_bias * self.config.biases.layering_strength * direction;
        if adjustment > 4.0 && has_outer {
            reasons.push("layered the way you like".to_owned());
        }
        adjustment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsule_core::models::{
        Color, GarmentBuilder, GarmentCategory, OutfitItem, OutfitSlot, StyleTag,
    };
    use uuid::Uuid;

    fn outfit_of(garments: Vec<(OutfitSlot, Garment)>) -> Outfit {
        Outfit::new(
            garments
                .into_iter()
                .map(|(slot, garment)| OutfitItem { slot, garment })
                .collect(),
        )
    }

    fn casual_ctx(profile: &StyleProfile) -> ScoringContext<'_> {
        ScoringContext {
            profile,
            filters: StylistFilters::default(),
            season: Season::Summer,
            occasion: Occasion::Casual,
            weather: None,
            formality_range: Occasion::Casual.formality_band(),
        }
    }

    fn summer_top() -> Garment {
        GarmentBuilder::new("tee", GarmentCategory::Top, Color::new("white", "#fafafa"))
            .style_tags(vec![StyleTag::Casual])
            .seasons(vec![Season::Summer])
            .occasions(vec![Occasion::Casual])
            .formality(1)
            .warmth(2)
            .build()
    }

    fn summer_bottom() -> Garment {
        GarmentBuilder::new("shorts", GarmentCategory::Bottom, Color::new("navy", "#1f2a44"))
            .style_tags(vec![StyleTag::Casual])
            .seasons(vec![Season::Summer])
            .occasions(vec![Occasion::Casual])
            .formality(1)
            .warmth(2)
            .build()
    }

    #[test]
    fn matching_casual_outfit_scores_well() {
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let ctx = casual_ctx(&profile);
        let scorer = OutfitScorer::with_config(ScoringConfig::default(), WeatherConfig::default());

        let outfit = outfit_of(vec![
            (OutfitSlot::Top, summer_top()),
            (OutfitSlot::Bottom, summer_bottom()),
        ]);
        let scored = scorer.score(outfit, &ctx);

        assert!(scored.breakdown.total >= 70.0, "total {}", scored.breakdown.total);
        assert!(scored.breakdown.season_suitability >= 80.0);
        assert!(scored.breakdown.occasion_suitability >= 80.0);
    }

    #[test]
    fn winter_coat_in_summer_drags_season_score_down() {
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let ctx = casual_ctx(&profile);
        let scorer = OutfitScorer::with_config(ScoringConfig::default(), WeatherConfig::default());

        let coat = GarmentBuilder::new(
            "parka",
            GarmentCategory::Outerwear,
            Color::new("black", "#111111"),
        )
        .seasons(vec![Season::Winter])
        .warmth(9)
        .formality(2)
        .build();

        let light = scorer.score(
            outfit_of(vec![
                (OutfitSlot::Top, summer_top()),
                (OutfitSlot::Bottom, summer_bottom()),
            ]),
            &ctx,
        );
        let heavy = scorer.score(
            outfit_of(vec![
                (OutfitSlot::Top, summer_top()),
                (OutfitSlot::Bottom, summer_bottom()),
                (OutfitSlot::Outerwear, coat),
            ]),
            &ctx,
        );

        assert!(heavy.breakdown.season_suitability < light.breakdown.season_suitability);
    }

    #[test]
    fn style_preferences_shift_the_style_score() {
        let mut profile = StyleProfile::default_for(Uuid::new_v4());
        profile.style_preferences.insert(StyleTag::Edgy, 1.0);
        let ctx = casual_ctx(&profile);
        let scorer = OutfitScorer::with_config(ScoringConfig::default(), WeatherConfig::default());

        let scored = scorer.score(
            outfit_of(vec![
                (OutfitSlot::Top, summer_top()),
                (OutfitSlot::Bottom, summer_bottom()),
            ]),
            &ctx,
        );

        // Casual garments against an edgy-only preference score the baseline
        assert!(scored.breakdown.style_matching < 60.0);
    }

    #[test]
    fn total_stays_in_score_range_under_extreme_filters() {
        let profile = StyleProfile::default_for(Uuid::new_v4());
        let mut ctx = casual_ctx(&profile);
        ctx.filters = StylistFilters {
            formality: 1.0,
            boldness: 1.0,
            layering: 1.0,
            colorfulness: 1.0,
        };
        let scorer = OutfitScorer::with_config(ScoringConfig::default(), WeatherConfig::default());

        let scored = scorer.score(
            outfit_of(vec![
                (OutfitSlot::Top, summer_top()),
                (OutfitSlot::Bottom, summer_bottom()),
            ]),
            &ctx,
        );
        assert!(scored.breakdown.total >= 0.0 && scored.breakdown.total <= 100.0);
    }
}
